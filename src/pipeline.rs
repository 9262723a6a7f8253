//! End-to-end preparation of one release: parse, analyze, overlay the
//! technical report, classify and compose.

use crate::classify::{classify_media, MediaKind, Variant};
use crate::compose::{ComposeOptions, NameComposer};
use crate::probe::{normalize_technical_report, TechnicalReport};
use crate::scanner::analyze_directory;
use anyhow::Result;
use seedforge_common::{AttributeBag, DirectoryAnalysis};
use seedforge_parser::parse_name;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything inferred about one item.
#[derive(Debug, Clone, Serialize)]
pub struct PreparedRelease {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<DirectoryAnalysis>,
    pub kind: MediaKind,
    pub attributes: AttributeBag,
    /// Composed name; only video items are named.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PreparedRelease {
    pub fn variant(&self) -> Option<Variant> {
        match self.kind {
            MediaKind::Video { variant } => Some(variant),
            _ => None,
        }
    }

    /// Replace the release group and compose the name again.
    pub fn set_release_group(&mut self, group: &str, options: &ComposeOptions) {
        self.attributes.release_group = Some(group.to_string());
        if let Some(variant) = self.variant() {
            self.name = Some(NameComposer::new(options.clone()).compose(&variant, &self.attributes));
        }
    }
}

/// Name used for parsing: the last path component, or the whole input.
fn release_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Prepare a release from its path and an optional technical report.
///
/// The path need not exist: a bare release name is parsed as is. Existing
/// directories are analyzed for season-pack detection.
pub fn prepare_release(
    path: &Path,
    report: Option<&TechnicalReport>,
    options: &ComposeOptions,
) -> Result<PreparedRelease> {
    let name = release_name(path);
    let mut attributes = parse_name(&name).attributes;

    let analysis = if path.is_dir() {
        Some(analyze_directory(path)?)
    } else {
        None
    };

    if let Some(report) = report {
        attributes.overlay(normalize_technical_report(report), false);
    }

    if let Some(analysis) = analysis.as_ref().filter(|a| a.is_series_pack) {
        if attributes.episode_count.is_none() && analysis.episode_count > 0 {
            attributes.episode_count = Some(analysis.episode_count);
        }
    }

    let kind = classify_media(&name, &attributes, analysis.as_ref());
    let name = match kind {
        MediaKind::Video { variant } => {
            Some(NameComposer::new(options.clone()).compose(&variant, &attributes))
        }
        _ => None,
    };
    debug!(path = %path.display(), ?kind, ?name, "Prepared release");

    Ok(PreparedRelease {
        path: path.to_path_buf(),
        analysis,
        kind,
        attributes,
        name,
    })
}
