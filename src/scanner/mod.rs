//! Directory analysis.
//!
//! Walks a release directory to find its video files and decide whether it
//! looks like a series pack. Only file names are inspected.

use anyhow::{Context, Result};
use regex::Regex;
use seedforge_common::paths::is_video_file;
use seedforge_common::{DirectoryAnalysis, SeasonDesignator};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;
use walkdir::WalkDir;

/// Deepest level searched below the analyzed directory.
const MAX_DEPTH: usize = 4;

static EPISODE_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[SE]\d{1,2}|Episode|Ep\d").expect("static pattern must compile")
});

static SEASON_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)S(\d{1,2})").expect("static pattern must compile"));

/// Analyze a file or directory.
///
/// A plain file yields an analysis with `is_directory` unset and nothing
/// else filled in.
pub fn analyze_directory(path: &Path) -> Result<DirectoryAnalysis> {
    let metadata =
        std::fs::metadata(path).with_context(|| format!("Failed to stat path: {:?}", path))?;

    let mut analysis = DirectoryAnalysis::default();
    if !metadata.is_dir() {
        return Ok(analysis);
    }
    analysis.is_directory = true;

    let mut video_files: Vec<String> = WalkDir::new(path)
        .max_depth(MAX_DEPTH)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_video_file(e.path()))
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    video_files.sort();

    if !video_files.is_empty() {
        analysis.first_video_file =
            find_first_video_file(path).map(|p| p.to_string_lossy().into_owned());
    }

    let mut seasons = BTreeSet::new();
    let mut episode_count = 0u32;
    for file in &video_files {
        if EPISODE_LIKE.is_match(file) {
            episode_count += 1;
        }
        if let Some(season) = SEASON_TOKEN
            .captures(file)
            .and_then(|caps| caps[1].parse::<u16>().ok())
        {
            seasons.insert(season);
        }
    }

    analysis.is_series_pack = episode_count > 1 || video_files.len() > 3;
    analysis.episode_count = episode_count;
    analysis.detected_season = match seasons.len() {
        0 => None,
        1 => seasons
            .first()
            .map(|s| SeasonDesignator::Number(*s).to_string()),
        _ => Some(SeasonDesignator::Complete.to_string()),
    };
    analysis.video_files = video_files;

    debug!(
        path = %path.display(),
        videos = analysis.video_files.len(),
        episodes = analysis.episode_count,
        pack = analysis.is_series_pack,
        season = ?analysis.detected_season,
        "analyzed directory"
    );

    Ok(analysis)
}

/// First video file in name order, descending into subdirectories as they
/// come.
pub fn find_first_video_file(dir: &Path) -> Option<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .find(|e| e.file_type().is_file() && is_video_file(e.path()))
        .map(|e| e.into_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_plain_file() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "movie.mkv");
        let analysis = analyze_directory(&dir.path().join("movie.mkv")).unwrap();
        assert!(!analysis.is_directory);
        assert!(analysis.video_files.is_empty());
    }

    #[test]
    fn test_single_season_pack() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "Show.S01E02.mkv");
        touch(dir.path(), "Show.S01E01.mkv");
        touch(dir.path(), "Show.S01E03.mkv");
        touch(dir.path(), "notes.txt");

        let analysis = analyze_directory(dir.path()).unwrap();
        assert!(analysis.is_directory);
        assert!(analysis.is_series_pack);
        assert_eq!(analysis.episode_count, 3);
        assert_eq!(analysis.detected_season.as_deref(), Some("S01"));
        assert_eq!(
            analysis.video_files,
            vec!["Show.S01E01.mkv", "Show.S01E02.mkv", "Show.S01E03.mkv"]
        );
        let first = analysis.first_video_file.unwrap();
        assert!(first.ends_with("Show.S01E01.mkv"));
    }

    #[test]
    fn test_multiple_seasons_are_complete() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "Season 1/Show.S01E01.mkv");
        touch(dir.path(), "Season 2/Show.S02E01.mkv");

        let analysis = analyze_directory(dir.path()).unwrap();
        assert!(analysis.is_series_pack);
        assert_eq!(analysis.detected_season.as_deref(), Some("COMPLETE"));
    }

    #[test]
    fn test_movie_directory_is_not_a_pack() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "Movie.2019.1080p.mkv");
        touch(dir.path(), "Extras/Trailer.mp4");

        let analysis = analyze_directory(dir.path()).unwrap();
        assert!(!analysis.is_series_pack);
        assert_eq!(analysis.episode_count, 0);
        assert_eq!(analysis.detected_season, None);
        assert!(analysis
            .first_video_file
            .unwrap()
            .ends_with("Extras/Trailer.mp4"));
    }

    #[test]
    fn test_more_than_three_videos_is_a_pack() {
        let dir = tempdir().unwrap();
        for name in ["a.mkv", "b.mkv", "c.mkv", "d.mkv"] {
            touch(dir.path(), name);
        }
        let analysis = analyze_directory(dir.path()).unwrap();
        assert!(analysis.is_series_pack);
        assert_eq!(analysis.episode_count, 0);
    }

    #[test]
    fn test_depth_limit() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "a/b/c/d/e/deep.mkv");
        let analysis = analyze_directory(dir.path()).unwrap();
        assert!(analysis.video_files.is_empty());
        assert_eq!(analysis.first_video_file, None);
    }

    #[test]
    fn test_missing_path() {
        assert!(analyze_directory(Path::new("/nonexistent/release")).is_err());
    }
}
