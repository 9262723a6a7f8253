//! Language slot of a composed name.

use crate::config::LanguageConfig;
use seedforge_common::language::{normalize_language, LanguageClass};
use seedforge_common::text::fold;
use seedforge_common::AttributeBag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const VOSTFR: &str = "VOSTFR";
pub const MULTI: &str = "MULTI";

/// Dubbing region assumed for French audio of unknown origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrenchRegion {
    #[default]
    France,
    Quebec,
}

impl FrenchRegion {
    pub fn token(&self) -> &'static str {
        match self {
            Self::France => "VFF",
            Self::Quebec => "VFQ",
        }
    }
}

/// Markers used to tell a Québec dub from a France dub when the audio
/// track only says "French".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionPolicy {
    pub quebec_markers: Vec<String>,
    pub france_markers: Vec<String>,
    pub default_region: FrenchRegion,
}

impl Default for RegionPolicy {
    fn default() -> Self {
        Self::from(&LanguageConfig::default())
    }
}

impl From<&LanguageConfig> for RegionPolicy {
    fn from(config: &LanguageConfig) -> Self {
        Self {
            quebec_markers: config.quebec_markers.clone(),
            france_markers: config.france_markers.clone(),
            default_region: config.default_region,
        }
    }
}

impl RegionPolicy {
    /// Region hinted by the release group and free-text tags.
    pub fn detect(&self, bag: &AttributeBag) -> FrenchRegion {
        let haystack = bag
            .release_group
            .iter()
            .chain(bag.tags.iter())
            .map(|s| fold(s))
            .collect::<Vec<_>>()
            .join(" ");
        let mentions = |markers: &[String]| {
            markers
                .iter()
                .map(|m| fold(m))
                .any(|m| !m.is_empty() && haystack.contains(&m))
        };

        if mentions(&self.quebec_markers) {
            FrenchRegion::Quebec
        } else if mentions(&self.france_markers) {
            FrenchRegion::France
        } else {
            self.default_region
        }
    }
}

/// Language token for a composed name.
///
/// VOSTFR short-circuits; otherwise the audio languages are normalized,
/// treated as a set and classified into English, VFF, VFQ, generic French
/// and the rest.
/// Falls back to the advisory `language` field.
///
/// ```
/// use seedforge::compose::{language_slot, RegionPolicy};
/// use seedforge_common::AttributeBag;
///
/// let mut bag = AttributeBag::new();
/// bag.audio_languages = vec!["English".into(), "VFF".into()];
/// assert_eq!(language_slot(&bag, &RegionPolicy::default()).as_deref(), Some("MULTI"));
/// ```
pub fn language_slot(bag: &AttributeBag, policy: &RegionPolicy) -> Option<String> {
    if bag.vostfr {
        return Some(VOSTFR.to_string());
    }

    let mut english = false;
    let mut vff = false;
    let mut vfq = false;
    let mut french = false;
    let mut others = BTreeSet::new();
    for label in bag
        .audio_languages
        .iter()
        .filter_map(|l| normalize_language(l, None))
    {
        match LanguageClass::of(&label) {
            LanguageClass::English => english = true,
            LanguageClass::Vff => vff = true,
            LanguageClass::Vfq => vfq = true,
            LanguageClass::French => french = true,
            LanguageClass::Other => {
                others.insert(label.to_uppercase());
            }
        }
    }
    let no_others = others.is_empty();
    let any_french = vff || vfq || french;

    let token = if english && !any_french && no_others {
        VOSTFR.to_string()
    } else if english && (vff || vfq) && !french && no_others {
        MULTI.to_string()
    } else if vff && vfq && !english && !french && no_others {
        MULTI.to_string()
    } else if vff && !vfq && !english && !french && no_others {
        "VFF".to_string()
    } else if vfq && !vff && !english && !french && no_others {
        "VFQ".to_string()
    } else if french && (english || vff || vfq || !no_others) {
        MULTI.to_string()
    } else if french {
        policy.detect(bag).token().to_string()
    } else if any_french && !no_others {
        MULTI.to_string()
    } else if others.len() > 1 {
        MULTI.to_string()
    } else if let Some(only) = others.into_iter().next() {
        only
    } else {
        return bag
            .language
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_uppercase);
    };

    Some(token)
}
