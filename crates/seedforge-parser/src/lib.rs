//! # seedforge-parser
//!
//! Extracts release hints from a free-form file or directory name.
//!
//! Patterns are applied in a fixed priority order: season/episode, year,
//! source, language markers, info and edition flags, IMAX/3D, platform and
//! finally the release group. The title is everything before the earliest
//! recognized tag.
//!
//! Technical tokens such as resolution or codecs only mark the end of the
//! title; their values come from the technical report, which is authoritative.
//!
//! ## Quick Start
//!
//! ```
//! use seedforge_parser::parse_name;
//! use seedforge_common::Source;
//!
//! let parsed = parse_name("Example.Movie.2019.1080p.BluRay.x264-GROUP");
//! let bag = parsed.attributes;
//!
//! assert_eq!(bag.title.as_deref(), Some("Example Movie"));
//! assert_eq!(bag.year.as_deref(), Some("2019"));
//! assert_eq!(bag.source, Some(Source::BluRay));
//! assert_eq!(bag.release_group.as_deref(), Some("GROUP"));
//! assert_eq!(bag.resolution, None);
//! ```

mod group;
pub mod keywords;
mod patterns;
mod span;
mod title;

pub use span::{ParsedName, TokenKind, TokenSpan};

use keywords::{
    fold_key, EDITIONS, INFO_FLAGS, LANGUAGE_MARKERS, PLATFORMS, SOURCES, TITLE_AMBIGUOUS,
};
use patterns::*;
use regex::{Captures, Match, Regex};
use seedforge_common::paths::strip_media_extension;
use seedforge_common::{AttributeBag, SeasonDesignator, Source};

/// Parse a release name into a partial attribute bag.
///
/// A trailing media extension is ignored. A name without any recognized tag
/// yields a bag holding only the trimmed name as title.
pub fn parse_name(raw: &str) -> ParsedName {
    let stem = strip_media_extension(raw.trim());
    let text = stem.replace('_', " ");

    let mut scan = Scan {
        text: &text,
        bag: AttributeBag::new(),
        spans: Vec::new(),
    };

    scan.season_episode();
    scan.year();
    scan.sources();
    scan.languages();
    scan.vostfr();
    scan.flags();
    scan.platform();
    scan.technical();
    scan.release_group();

    let Scan { mut bag, mut spans, .. } = scan;
    spans.sort_by_key(|s| (s.start, s.end));

    bag.title = match spans.iter().map(|s| s.start).min() {
        Some(offset) => title::before(&text, offset),
        None => {
            let whole = stem.trim();
            (!whole.is_empty()).then(|| whole.to_string())
        }
    };

    tracing::debug!(
        input = raw,
        title = ?bag.title,
        tags = spans.len(),
        "parsed release name"
    );

    ParsedName {
        attributes: bag,
        spans,
    }
}

fn first_match<'h>(pattern: &Regex, text: &'h str) -> Option<(Captures<'h>, Match<'h>)> {
    let caps = pattern.captures(text)?;
    let whole = caps.get(0)?;
    Some((caps, whole))
}

fn is_uppercase(s: &str) -> bool {
    !s.chars().any(char::is_lowercase)
}

/// A keyword that doubles as a title word only counts when uppercase.
fn accepted(m: &Match<'_>) -> bool {
    !TITLE_AMBIGUOUS.contains(fold_key(m.as_str()).as_str()) || is_uppercase(m.as_str())
}

struct Scan<'a> {
    text: &'a str,
    bag: AttributeBag,
    spans: Vec<TokenSpan>,
}

impl Scan<'_> {
    fn mark(&mut self, kind: TokenKind, m: &Match<'_>) {
        self.spans.push(TokenSpan {
            kind,
            start: m.start(),
            end: m.end(),
            text: m.as_str().to_string(),
        });
    }

    /// Combined form first; season and episode alone are only tried when it
    /// is absent so the same digits are never extracted twice.
    fn season_episode(&mut self) {
        let text = self.text;
        for pattern in [&*SEASON_EPISODE, &*CROSS_EPISODE] {
            if let Some((caps, whole)) = first_match(pattern, text) {
                self.bag.season = caps[1].parse().ok().map(SeasonDesignator::Number);
                self.bag.episode = caps[2].parse().ok();
                self.mark(TokenKind::SeasonEpisode, &whole);
                return;
            }
        }

        for pattern in [&*SEASON, &*SEASON_WORD] {
            if let Some((caps, whole)) = first_match(pattern, text) {
                self.bag.season = caps[1].parse().ok().map(SeasonDesignator::Number);
                self.mark(TokenKind::Season, &whole);
                break;
            }
        }
        if let Some(m) = COMPLETE.find(text) {
            if self.bag.season.is_none() {
                self.bag.season = Some(SeasonDesignator::Complete);
            }
            self.mark(TokenKind::Season, &m);
        }

        for pattern in [&*EPISODE, &*EPISODE_WORD] {
            if let Some((caps, whole)) = first_match(pattern, text) {
                self.bag.episode = caps[1].parse().ok();
                self.mark(TokenKind::Episode, &whole);
                break;
            }
        }
    }

    /// The last year-like token wins; a leading one belongs to the title.
    fn year(&mut self) {
        let text = self.text;
        if let Some(m) = YEAR.find_iter(text).filter(|m| m.start() > 0).last() {
            self.bag.year = Some(m.as_str().to_string());
            self.mark(TokenKind::Year, &m);
        }
    }

    /// Every source keyword is kept: the highest-priority one becomes the
    /// source, the others are remembered as free-text tags.
    fn sources(&mut self) {
        let text = self.text;
        let mut found: Vec<Source> = Vec::new();
        for m in SOURCE.find_iter(text) {
            if !accepted(&m) {
                continue;
            }
            if let Some(source) = SOURCES.get(fold_key(m.as_str()).as_str()) {
                if !found.contains(source) {
                    found.push(*source);
                }
                self.mark(TokenKind::Source, &m);
            }
        }

        let Some(primary) = found.iter().min_by_key(|s| s.priority()).copied() else {
            return;
        };
        self.bag.source = Some(primary);
        for extra in found.iter().filter(|s| **s != primary) {
            self.bag.push_tag(&extra.to_string());
        }
    }

    fn languages(&mut self) {
        let text = self.text;
        for m in LANGUAGE.find_iter(text) {
            if !accepted(&m) {
                continue;
            }
            let Some(marker) = LANGUAGE_MARKERS.get(fold_key(m.as_str()).as_str()) else {
                continue;
            };
            if *marker == "VOSTFR" {
                self.bag.vostfr = true;
            } else if self.bag.language.is_none() {
                self.bag.language = Some(marker.to_string());
            }
            self.mark(TokenKind::Language, &m);
        }
    }

    /// VOSTFR counts anywhere in the name, even glued to other text.
    fn vostfr(&mut self) {
        let lower = self.text.to_ascii_lowercase();
        if let Some(start) = lower.find("vostfr") {
            self.bag.vostfr = true;
            self.spans.push(TokenSpan {
                kind: TokenKind::Vostfr,
                start,
                end: start + "vostfr".len(),
                text: self.text[start..start + "vostfr".len()].to_string(),
            });
        }
    }

    fn flags(&mut self) {
        let text = self.text;

        for m in INFO.find_iter(text) {
            if !accepted(&m) {
                continue;
            }
            if let Some(flag) = INFO_FLAGS.get(fold_key(m.as_str()).as_str()) {
                if !self.bag.info.iter().any(|f| f == flag) {
                    self.bag.info.push(flag.to_string());
                }
                self.mark(TokenKind::Info, &m);
            }
        }

        for m in EDITION.find_iter(text) {
            if !accepted(&m) {
                continue;
            }
            if let Some(edition) = EDITIONS.get(fold_key(m.as_str()).as_str()) {
                if self.bag.edition.is_none() {
                    self.bag.edition = Some(edition.to_string());
                }
                self.mark(TokenKind::Edition, &m);
            }
        }

        if let Some(m) = IMAX.find(text) {
            self.bag.imax = true;
            self.mark(TokenKind::Imax, &m);
        }

        if let Some(m) = THREE_D.find(text) {
            self.bag.three_d = true;
            self.mark(TokenKind::ThreeD, &m);
            if let Some(layout) = THREE_D_LAYOUT.find(text) {
                self.bag.three_d_layout = Some(layout.as_str().to_uppercase());
                self.mark(TokenKind::ThreeD, &layout);
            }
        }
    }

    fn platform(&mut self) {
        let text = self.text;
        if let Some(m) = PLATFORM.find(text) {
            if let Some(platform) = PLATFORMS.get(m.as_str()) {
                self.bag.platform = Some(platform.to_string());
                self.mark(TokenKind::Platform, &m);
            }
        }
    }

    fn technical(&mut self) {
        let text = self.text;
        for m in TECHNICAL.find_iter(text) {
            self.mark(TokenKind::Technical, &m);
        }
    }

    fn release_group(&mut self) {
        if let Some(span) = group::extract(self.text, &self.spans) {
            self.bag.release_group = Some(span.text.clone());
            self.spans.push(span);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_movie_scenario() {
        let bag = parse_name("Example.Movie.2019.1080p.BluRay.x264-GROUP").attributes;
        assert_eq!(bag.title.as_deref(), Some("Example Movie"));
        assert_eq!(bag.year.as_deref(), Some("2019"));
        assert_eq!(bag.source, Some(Source::BluRay));
        assert_eq!(bag.release_group.as_deref(), Some("GROUP"));
        assert_eq!(bag.resolution, None);
        assert_eq!(bag.video_codec, None);
    }

    #[test]
    fn test_parse_episode() {
        let bag = parse_name("Breaking.Bad.S01E05.720p.HDTV.x264-DEMAND").attributes;
        assert_eq!(bag.title.as_deref(), Some("Breaking Bad"));
        assert_eq!(bag.season, Some(SeasonDesignator::Number(1)));
        assert_eq!(bag.episode, Some(5));
        assert_eq!(bag.source, Some(Source::Hdtv));
    }

    #[test]
    fn test_combined_form_blocks_independent_patterns() {
        let parsed = parse_name("Show.S02E03.E04.1080p");
        assert_eq!(parsed.attributes.episode, Some(3));
        assert!(!parsed.has(TokenKind::Episode));
    }

    #[test]
    fn test_cross_episode_form() {
        let bag = parse_name("Show.3x07.HDTV").attributes;
        assert_eq!(bag.season, Some(SeasonDesignator::Number(3)));
        assert_eq!(bag.episode, Some(7));
    }

    #[test]
    fn test_season_alone_and_complete() {
        let bag = parse_name("Show.S03.MULTi.1080p.WEB-DL-GRP").attributes;
        assert_eq!(bag.season, Some(SeasonDesignator::Number(3)));
        assert_eq!(bag.episode, None);
        assert_eq!(bag.language.as_deref(), Some("MULTi"));

        let bag = parse_name("Show.Integrale.FRENCH.720p").attributes;
        assert_eq!(bag.season, Some(SeasonDesignator::Complete));
        assert_eq!(bag.title.as_deref(), Some("Show"));
    }

    #[test]
    fn test_saison_word() {
        let bag = parse_name("Ma Serie Saison 2 FRENCH").attributes;
        assert_eq!(bag.season, Some(SeasonDesignator::Number(2)));
        assert_eq!(bag.title.as_deref(), Some("Ma Serie"));
    }

    #[test]
    fn test_no_matches_keeps_whole_string() {
        let parsed = parse_name("  Just Some Words  ");
        assert!(parsed.spans.is_empty());
        assert_eq!(parsed.attributes.title.as_deref(), Some("Just Some Words"));
        assert_eq!(parsed.attributes, AttributeBag::with_title("Just Some Words"));
    }

    #[test]
    fn test_group_rejects_resolution() {
        let bag = parse_name("Movie.2020.x264-1080p").attributes;
        assert_eq!(bag.release_group, None);
    }

    #[test]
    fn test_vostfr_anywhere() {
        let bag = parse_name("Anime.S01E01.VOSTFR.1080p.WEB").attributes;
        assert!(bag.vostfr);
        let bag = parse_name("Anime.S01E01.1080pVOSTFR").attributes;
        assert!(bag.vostfr);
    }

    #[test]
    fn test_vostfr_after_multibyte_title() {
        let parsed = parse_name("İİİ.VOSTFR");
        assert!(parsed.attributes.vostfr);
        let span = parsed
            .spans
            .iter()
            .find(|s| s.kind == TokenKind::Vostfr)
            .unwrap();
        assert_eq!(span.text, "VOSTFR");

        let parsed = parse_name("Élève.Ça.Vostfr.720p");
        assert!(parsed.attributes.vostfr);
    }

    #[test]
    fn test_multiple_sources_become_tags() {
        let bag = parse_name("Movie.2021.2160p.BluRay.REMUX.HEVC-FGT").attributes;
        assert_eq!(bag.source, Some(Source::Remux));
        assert_eq!(bag.tags, vec!["BluRay"]);
    }

    #[test]
    fn test_title_words_not_taken_as_tags() {
        let bag = parse_name("The.Web.of.Lies.2018.1080p.WEB.H264-GRP").attributes;
        assert_eq!(bag.title.as_deref(), Some("The Web of Lies"));
        assert_eq!(bag.source, Some(Source::WebDl));

        let bag = parse_name("The.French.Dispatch.2021.MULTi.1080p").attributes;
        assert_eq!(bag.title.as_deref(), Some("The French Dispatch"));
        assert_eq!(bag.language.as_deref(), Some("MULTi"));
    }

    #[test]
    fn test_flags() {
        let bag =
            parse_name("Avatar.2009.EXTENDED.REPACK.IMAX.3D.HSBS.1080p.NF.WEB-DL-GRP").attributes;
        assert_eq!(bag.edition.as_deref(), Some("EXTENDED"));
        assert_eq!(bag.info, vec!["REPACK"]);
        assert!(bag.imax);
        assert!(bag.three_d);
        assert_eq!(bag.three_d_layout.as_deref(), Some("HSBS"));
        assert_eq!(bag.platform.as_deref(), Some("NF"));
    }

    #[test]
    fn test_extension_and_underscores() {
        let bag = parse_name("Some_Movie_1999_DVDRip.avi").attributes;
        assert_eq!(bag.title.as_deref(), Some("Some Movie"));
        assert_eq!(bag.year.as_deref(), Some("1999"));
        assert_eq!(bag.source, Some(Source::DvdRip));
    }

    #[test]
    fn test_leading_year_belongs_to_title() {
        let bag = parse_name("1917.2019.1080p.BluRay-GRP").attributes;
        assert_eq!(bag.title.as_deref(), Some("1917"));
        assert_eq!(bag.year.as_deref(), Some("2019"));
    }
}
