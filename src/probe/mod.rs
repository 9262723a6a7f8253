// Re-export report handling from seedforge-probe
pub use seedforge_probe::{
    check_tool, normalize_technical_report, require_tool, MediaInfoRunner, TechnicalReport,
    ToolInfo, Track, TrackKind, MEDIAINFO,
};

use crate::scanner::find_first_video_file;
use anyhow::{Context, Result};
use std::path::Path;

/// Probe a release: a file directly, a directory through its first video file.
pub fn probe_release(path: &Path, runner: &MediaInfoRunner) -> Result<TechnicalReport> {
    let target = if path.is_dir() {
        find_first_video_file(path)
            .with_context(|| format!("No video file found in {}", path.display()))?
    } else {
        path.to_path_buf()
    };

    runner
        .probe(&target)
        .with_context(|| format!("Failed to probe {}", target.display()))
}

/// Load a saved mediainfo JSON report.
pub fn load_report(path: &Path) -> Result<TechnicalReport> {
    seedforge_probe::load_report(path)
        .with_context(|| format!("Failed to load report {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_probe_release_empty_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        let err = probe_release(dir.path(), &MediaInfoRunner::default()).unwrap_err();
        assert!(err.to_string().contains("No video file found"));
    }

    #[test]
    fn test_probe_release_missing_binary() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("movie.mkv");
        fs::write(&file, b"").unwrap();
        let runner = MediaInfoRunner::new("seedforge-test-missing-mediainfo");
        assert!(probe_release(&file, &runner).is_err());
    }

    #[test]
    fn test_load_report() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("report.json");
        fs::write(
            &file,
            r#"{"media": {"track": [{"@type": "Video", "Width": "3840", "Height": "2160"}]}}"#,
        )
        .unwrap();
        let report = load_report(&file).unwrap();
        let bag = normalize_technical_report(&report);
        assert_eq!(bag.resolution.map(|r| r.to_string()).as_deref(), Some("2160p"));

        assert!(load_report(&dir.path().join("missing.json")).is_err());
    }
}
