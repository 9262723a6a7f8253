//! Media variant classification.
//!
//! Decides whether an item is a movie, a season pack or a single episode
//! from its name, the attributes parsed so far and, for directories, the
//! directory analysis. Classification is a pure function of those inputs.

use regex::Regex;
use seedforge_common::paths::{is_ebook_file, is_game_file};
use seedforge_common::{AttributeBag, DirectoryAnalysis, SeasonDesignator};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

/// Which naming template applies to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Variant {
    Movie,
    SeasonPack {
        season: Option<SeasonDesignator>,
        episode_count: Option<u32>,
    },
    Episode {
        season: Option<u16>,
        episode: Option<u16>,
    },
}

impl Variant {
    pub fn is_pack(&self) -> bool {
        matches!(self, Self::SeasonPack { .. })
    }

    /// Season packs and episodes share the series template.
    pub fn is_series(&self) -> bool {
        !matches!(self, Self::Movie)
    }

    /// Season/episode designator rendered in a series name, if any.
    ///
    /// A season pack never carries an episode designator.
    pub fn designator(&self) -> Option<String> {
        match self {
            Self::Movie => None,
            Self::SeasonPack { season, .. } => season.map(|s| s.to_string()),
            Self::Episode { season, episode } => {
                let season = season.map(|s| SeasonDesignator::Number(s).to_string());
                let episode = episode.map(seedforge_common::episode_designator);
                match (season, episode) {
                    (None, None) => None,
                    (s, e) => Some(format!(
                        "{}{}",
                        s.unwrap_or_default(),
                        e.unwrap_or_default()
                    )),
                }
            }
        }
    }
}

/// Broad media kind; only video goes through the naming pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "media", rename_all = "snake_case")]
pub enum MediaKind {
    Video { variant: Variant },
    Ebook,
    Game,
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern must compile")
}

static BARE_SEASON: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bS(\d{1,3})\b"));
static SEASON_WORD: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:saison|season)[ .-]?(\d{1,3})\b"));
static COMPLETE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:complete|int[ée]grale)\b"));
static EPISODE_FOLLOWS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)^[ .\-_]*(?:E\d|[ée]pisode|ep[ .-]?\d)"));

static SEASON_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\bS(\d{1,3})[ .-]?E(\d{1,4})"));
static CROSS_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(\d{1,2})x(\d{2,3})\b"));
static BARE_EPISODE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bE(\d{1,4})\b"));
static EPISODE_WORD: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b[ée]pisode[ .-]?(\d{1,4})\b"));

static EBOOK_NAME: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:ebook|epub|mobi|azw3|cbz|cbr|djvu|pdf)\b"));
static GAME_NAME: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"\b(?:NSW|NSP|XCI|PS[345]|XBOX(?:ONE|360)?|GOG|CODEX|FitGirl|ElAmigos|PLAZA|SKIDROW)\b")
});

fn name_of(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}

/// Classify a video item into its naming variant.
///
/// Order: a directory flagged as a pack, then season-pack name patterns,
/// then episode name patterns, then the parsed season/episode, then movie.
pub fn classify_variant(
    path: &str,
    bag: &AttributeBag,
    analysis: Option<&DirectoryAnalysis>,
) -> Variant {
    if let Some(variant) = pack_from_analysis(bag, analysis) {
        return variant;
    }
    classify_name(name_of(path), bag)
}

/// Classify an item, recognizing ebooks and games before the video variants.
pub fn classify_media(
    path: &str,
    bag: &AttributeBag,
    analysis: Option<&DirectoryAnalysis>,
) -> MediaKind {
    if let Some(variant) = pack_from_analysis(bag, analysis) {
        return MediaKind::Video { variant };
    }

    let name = name_of(path);
    let file = Path::new(name);
    if is_ebook_file(file) || EBOOK_NAME.is_match(name) {
        return MediaKind::Ebook;
    }
    if is_game_file(file) || GAME_NAME.is_match(name) {
        return MediaKind::Game;
    }

    MediaKind::Video {
        variant: classify_name(name, bag),
    }
}

fn pack_from_analysis(bag: &AttributeBag, analysis: Option<&DirectoryAnalysis>) -> Option<Variant> {
    let analysis = analysis.filter(|a| a.is_series_pack)?;
    let season = analysis
        .detected_season
        .as_deref()
        .and_then(|s| s.parse().ok())
        .or(bag.season);
    let episode_count = Some(analysis.episode_count)
        .filter(|c| *c > 0)
        .or(bag.episode_count);
    Some(Variant::SeasonPack {
        season,
        episode_count,
    })
}

fn classify_name(name: &str, bag: &AttributeBag) -> Variant {
    if let Some(season) = season_pack_designator(name) {
        return Variant::SeasonPack {
            season: Some(season),
            episode_count: bag.episode_count,
        };
    }

    if let Some(variant) = episode_from_name(name, bag) {
        return variant;
    }

    match (bag.season, bag.episode) {
        (Some(SeasonDesignator::Number(s)), Some(e)) => Variant::Episode {
            season: Some(s),
            episode: Some(e),
        },
        (None, Some(e)) => Variant::Episode {
            season: None,
            episode: Some(e),
        },
        (Some(season), _) => Variant::SeasonPack {
            season: Some(season),
            episode_count: bag.episode_count,
        },
        (None, None) => Variant::Movie,
    }
}

/// Season designator of a season-pack name: a season token that is not
/// followed by an episode token, or a "complete" marker.
fn season_pack_designator(name: &str) -> Option<SeasonDesignator> {
    for pattern in [&*BARE_SEASON, &*SEASON_WORD] {
        for caps in pattern.captures_iter(name) {
            let Some(whole) = caps.get(0) else { continue };
            if EPISODE_FOLLOWS.is_match(&name[whole.end()..]) {
                continue;
            }
            if let Ok(n) = caps[1].parse() {
                return Some(SeasonDesignator::Number(n));
            }
        }
    }

    if COMPLETE.is_match(name) && !SEASON_EPISODE.is_match(name) {
        return Some(SeasonDesignator::Complete);
    }
    None
}

fn episode_from_name(name: &str, bag: &AttributeBag) -> Option<Variant> {
    for pattern in [&*SEASON_EPISODE, &*CROSS_EPISODE] {
        if let Some(caps) = pattern.captures(name) {
            return Some(Variant::Episode {
                season: caps[1].parse().ok(),
                episode: caps[2].parse().ok(),
            });
        }
    }

    for pattern in [&*BARE_EPISODE, &*EPISODE_WORD] {
        if let Some(caps) = pattern.captures(name) {
            return Some(Variant::Episode {
                season: season_in_name(name).or(match bag.season {
                    Some(SeasonDesignator::Number(n)) => Some(n),
                    _ => None,
                }),
                episode: caps[1].parse().ok(),
            });
        }
    }
    None
}

/// Season number written apart from the episode ("Saison 1 Episode 4").
fn season_in_name(name: &str) -> Option<u16> {
    [&*SEASON_WORD, &*BARE_SEASON]
        .into_iter()
        .find_map(|pattern| pattern.captures(name))
        .and_then(|caps| caps[1].parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag() -> AttributeBag {
        AttributeBag::new()
    }

    #[test]
    fn test_analysis_pack_wins() {
        let analysis = DirectoryAnalysis {
            is_directory: true,
            is_series_pack: true,
            detected_season: Some("S02".into()),
            episode_count: 8,
            ..Default::default()
        };
        let variant = classify_variant("/data/Show.S02E01.1080p", &bag(), Some(&analysis));
        assert_eq!(
            variant,
            Variant::SeasonPack {
                season: Some(SeasonDesignator::Number(2)),
                episode_count: Some(8),
            }
        );
    }

    #[test]
    fn test_season_pack_names() {
        for name in [
            "Show.S01.1080p.WEB-DL",
            "Show Saison 1 FRENCH",
            "Show.Season.1.720p",
        ] {
            let variant = classify_variant(name, &bag(), None);
            assert_eq!(
                variant,
                Variant::SeasonPack {
                    season: Some(SeasonDesignator::Number(1)),
                    episode_count: None,
                },
                "{name}"
            );
        }

        let variant = classify_variant("Show.Integrale.MULTi", &bag(), None);
        assert_eq!(variant.designator().as_deref(), Some("COMPLETE"));
    }

    #[test]
    fn test_season_followed_by_episode_is_not_a_pack() {
        let variant = classify_variant("Show.S01.E02.720p", &bag(), None);
        assert_eq!(
            variant,
            Variant::Episode {
                season: Some(1),
                episode: Some(2),
            }
        );
        let variant = classify_variant("Show Saison 1 Episode 4", &bag(), None);
        assert_eq!(
            variant,
            Variant::Episode {
                season: Some(1),
                episode: Some(4),
            }
        );
        assert_eq!(variant.designator().as_deref(), Some("S01E04"));
    }

    #[test]
    fn test_bare_episode_takes_parsed_season() {
        let mut with_season = bag();
        with_season.season = Some(SeasonDesignator::Number(2));
        assert_eq!(
            classify_variant("Show.E07.720p", &with_season, None),
            Variant::Episode {
                season: Some(2),
                episode: Some(7),
            }
        );

        let mut complete = bag();
        complete.season = Some(SeasonDesignator::Complete);
        assert_eq!(
            classify_variant("Show.E07.720p", &complete, None).designator().as_deref(),
            Some("E07")
        );
    }

    #[test]
    fn test_episode_names() {
        assert_eq!(
            classify_variant("Show.1x05.HDTV", &bag(), None).designator().as_deref(),
            Some("S01E05")
        );
        assert_eq!(
            classify_variant("Anime.E1071.VOSTFR", &bag(), None).designator().as_deref(),
            Some("E1071")
        );
    }

    #[test]
    fn test_bag_fallback() {
        let mut with_both = bag();
        with_both.season = Some(SeasonDesignator::Number(3));
        with_both.episode = Some(4);
        assert_eq!(
            classify_variant("Show", &with_both, None),
            Variant::Episode {
                season: Some(3),
                episode: Some(4),
            }
        );

        let mut season_only = bag();
        season_only.season = Some(SeasonDesignator::Number(3));
        assert!(classify_variant("Show", &season_only, None).is_pack());
    }

    #[test]
    fn test_movie_default() {
        assert_eq!(
            classify_variant("Example.Movie.2019.1080p.BluRay", &bag(), None),
            Variant::Movie
        );
        assert!(!Variant::Movie.is_series());
    }

    #[test]
    fn test_classify_media_kinds() {
        assert_eq!(classify_media("/books/Novel.epub", &bag(), None), MediaKind::Ebook);
        assert_eq!(
            classify_media("Some.Comic.Vol.1.FRENCH.CBZ", &bag(), None),
            MediaKind::Ebook
        );
        assert_eq!(classify_media("Game.NSW-GRP", &bag(), None), MediaKind::Game);
        assert_eq!(classify_media("/iso/Game.iso", &bag(), None), MediaKind::Game);
        assert_eq!(
            classify_media("Show.S01E01.mkv", &bag(), None),
            MediaKind::Video {
                variant: Variant::Episode {
                    season: Some(1),
                    episode: Some(1),
                }
            }
        );
    }

    #[test]
    fn test_classification_is_idempotent() {
        let name = "Show.S03.MULTi.1080p";
        assert_eq!(
            classify_variant(name, &bag(), None),
            classify_variant(name, &bag(), None)
        );
    }
}
