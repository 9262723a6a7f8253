//! Tag inference against an injected taxonomy.
//!
//! Each tagging-relevant field of the attribute bag is turned into one or
//! more display values and resolved through [`TagResolver`]. The result is
//! the deduplicated union of every resolved id; unresolved values add nothing.

mod aliases;
mod matcher;
mod taxonomy;

pub use aliases::{aliases_for, is_telefilm, CategoryHint};
pub use matcher::{MatchTier, TagMatch, TagResolver};
pub use taxonomy::{Category, Tag, TagId, Taxonomy};

use crate::classify::Variant;
use crate::compose::{language_slot, source_slot, split_audio, RegionPolicy};
use seedforge_common::text::fold;
use seedforge_common::AttributeBag;
use std::collections::BTreeSet;

/// Display value of the media type tag.
pub fn media_type_label(variant: &Variant) -> &'static str {
    if variant.is_series() {
        "Série"
    } else {
        "Film"
    }
}

/// Values to look up, each with its category hint.
fn lookups(
    variant: &Variant,
    bag: &AttributeBag,
    region: &RegionPolicy,
) -> Vec<(String, CategoryHint)> {
    let mut values = vec![(media_type_label(variant).to_string(), CategoryHint::MediaType)];

    if let Some(resolution) = bag.resolution {
        values.push((resolution.to_string(), CategoryHint::Resolution));
    }
    if let Some(sources) = source_slot(bag) {
        values.extend(sources.split('.').map(|s| (s.to_string(), CategoryHint::Source)));
    }
    if let Some(codec) = &bag.video_codec {
        values.push((codec.clone(), CategoryHint::VideoCodec));
    }
    values.extend(bag.hdr.iter().map(|h| (h.clone(), CategoryHint::Hdr)));
    if bag.three_d {
        values.push(("3D".to_string(), CategoryHint::VideoFeatures));
    }
    if bag.imax {
        values.push(("IMAX".to_string(), CategoryHint::VideoFeatures));
    }

    let audio = split_audio(&bag.audio_codecs);
    values.extend(
        audio
            .codecs
            .iter()
            .chain(audio.specs.iter())
            .map(|c| (c.replace('.', " "), CategoryHint::AudioCodec)),
    );
    values.extend(
        bag.audio_languages
            .iter()
            .map(|l| (l.clone(), CategoryHint::AudioLanguage)),
    );
    values.extend(
        bag.subtitles
            .iter()
            .map(|s| (s.language.clone(), CategoryHint::Subtitles)),
    );
    if let Some(container) = &bag.container {
        values.push((container.clone(), CategoryHint::Container));
    }
    if let Some(language) = language_slot(bag, region) {
        values.push((language, CategoryHint::Language));
    }
    values
}

/// Genres to resolve: a TV-film genre survives only when it is the sole genre.
fn effective_genres(genres: &[String]) -> Vec<&str> {
    let mut distinct: Vec<&str> = Vec::new();
    for genre in genres.iter().map(|g| g.trim()).filter(|g| !g.is_empty()) {
        if !distinct.iter().any(|d| fold(d) == fold(genre)) {
            distinct.push(genre);
        }
    }
    if distinct.len() > 1 {
        distinct.retain(|g| !is_telefilm(g));
    }
    distinct
}

fn resolve_matches<'a>(
    variant: &Variant,
    bag: &AttributeBag,
    region: &RegionPolicy,
    resolver: &TagResolver<'a>,
) -> Vec<TagMatch<'a>> {
    let mut matches: Vec<TagMatch<'a>> = lookups(variant, bag, region)
        .iter()
        .filter_map(|(value, hint)| resolver.find(value, Some(*hint)))
        .collect();
    matches.extend(
        effective_genres(&bag.genres)
            .into_iter()
            .filter_map(|genre| resolver.find_strict(genre, CategoryHint::Genre)),
    );
    matches
}

/// Tag ids describing one item, with the default French region policy.
pub fn resolve_tags(variant: &Variant, bag: &AttributeBag, taxonomy: &Taxonomy) -> BTreeSet<TagId> {
    resolve_tags_with(variant, bag, taxonomy, &RegionPolicy::default())
}

/// Tag ids describing one item.
///
/// `region` decides the language tag of French audio of unknown origin and
/// must match the policy the name was composed with.
pub fn resolve_tags_with(
    variant: &Variant,
    bag: &AttributeBag,
    taxonomy: &Taxonomy,
    region: &RegionPolicy,
) -> BTreeSet<TagId> {
    let resolver = TagResolver::new(taxonomy);
    resolve_matches(variant, bag, region, &resolver)
        .into_iter()
        .map(|m| m.tag.id.clone())
        .collect()
}

/// Display names of the tags [`resolve_tags`] selects, in taxonomy order.
pub fn resolve_tag_names(variant: &Variant, bag: &AttributeBag, taxonomy: &Taxonomy) -> Vec<String> {
    let selected = resolve_tags(variant, bag, taxonomy);
    taxonomy
        .categories
        .iter()
        .flat_map(|c| c.tags.iter())
        .filter(|t| selected.contains(&t.id))
        .fold(Vec::new(), |mut names, tag| {
            if !names.contains(&tag.name) {
                names.push(tag.name.clone());
            }
            names
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_genres() {
        let genres = |g: &[&str]| g.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(effective_genres(&genres(&["Téléfilm"])), vec!["Téléfilm"]);
        assert_eq!(effective_genres(&genres(&["Téléfilm", "Drame"])), vec!["Drame"]);
        assert_eq!(effective_genres(&genres(&["Drame", "drame", " "])), vec!["Drame"]);
        assert!(effective_genres(&[]).is_empty());
    }

    #[test]
    fn test_media_type_label() {
        assert_eq!(media_type_label(&Variant::Movie), "Film");
        assert_eq!(
            media_type_label(&Variant::Episode {
                season: Some(1),
                episode: Some(1)
            }),
            "Série"
        );
    }
}
