//! Directory analysis shape consumed by the variant classifier.

use serde::{Deserialize, Serialize};

/// Summary of a directory's video content, produced by a directory scanner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryAnalysis {
    pub is_directory: bool,
    pub is_series_pack: bool,
    /// "S<nn>" when one season was seen, "COMPLETE" when several were.
    pub detected_season: Option<String>,
    pub episode_count: u32,
    /// Video file names, sorted.
    pub video_files: Vec<String>,
    /// Full path of the first video file found.
    pub first_video_file: Option<String>,
}
