pub use crate::compose::FrenchRegion;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub language: LanguageConfig,

    #[serde(default)]
    pub taxonomy: TaxonomyConfig,

    #[serde(default)]
    pub probe: ProbeConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NamingConfig {
    /// Release group used when none can be inferred
    #[serde(default = "default_group")]
    pub default_group: String,
}

fn default_group() -> String {
    seedforge_common::DEFAULT_RELEASE_GROUP.to_string()
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            default_group: default_group(),
        }
    }
}

/// Region heuristic for French audio of unknown origin.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LanguageConfig {
    /// Markers in the release group or tags that point to a Québec dub
    #[serde(default = "default_quebec_markers")]
    pub quebec_markers: Vec<String>,

    /// Markers that point to a France dub
    #[serde(default = "default_france_markers")]
    pub france_markers: Vec<String>,

    /// Region used when no marker matches
    #[serde(default)]
    pub default_region: FrenchRegion,
}

fn default_quebec_markers() -> Vec<String> {
    ["québec", "quebec", "canada", "vfq"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_france_markers() -> Vec<String> {
    ["european", "france", "vff", "truefrench"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            quebec_markers: default_quebec_markers(),
            france_markers: default_france_markers(),
            default_region: FrenchRegion::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaxonomyConfig {
    /// Taxonomy JSON used by `tags` when `--taxonomy` is not given
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_mediainfo")]
    pub mediainfo: String,
}

fn default_true() -> bool {
    true
}

fn default_mediainfo() -> String {
    seedforge_probe::MEDIAINFO.to_string()
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mediainfo: default_mediainfo(),
        }
    }
}
