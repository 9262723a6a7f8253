//! `mediainfo` runner.

use crate::report::TechnicalReport;
use crate::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Default executable name.
pub const MEDIAINFO: &str = "mediainfo";

/// Runs `mediainfo --Output=JSON` on a single file.
#[derive(Debug, Clone)]
pub struct MediaInfoRunner {
    binary: String,
}

impl Default for MediaInfoRunner {
    fn default() -> Self {
        Self::new(MEDIAINFO)
    }
}

impl MediaInfoRunner {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Probe a media file and parse the JSON report.
    pub fn probe(&self, path: &Path) -> Result<TechnicalReport> {
        if !path.is_file() {
            return Err(Error::file_not_found(path));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(binary = %self.binary, file = %path.display(), "running mediainfo");

        let output = Command::new(&self.binary)
            .arg("--Output=JSON")
            .arg(path)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::tool_not_found(&self.binary)
                } else {
                    Error::Io(e)
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::tool_failed(&self.binary, stderr.trim().to_string()));
        }

        let json = String::from_utf8(output.stdout)
            .map_err(|e| Error::parse_error(&self.binary, format!("Invalid UTF-8: {}", e)))?;

        TechnicalReport::from_mediainfo_json(&json)
            .map_err(|e| Error::parse_error(&self.binary, e.to_string()))
    }
}

/// Probe a media file with the `mediainfo` found on `PATH`.
pub fn probe_with_mediainfo(path: &Path) -> Result<TechnicalReport> {
    MediaInfoRunner::default().probe(path)
}

/// Load a report previously saved with `mediainfo --Output=JSON > file`.
pub fn load_report(path: &Path) -> Result<TechnicalReport> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }
    let json = std::fs::read_to_string(path)?;
    TechnicalReport::from_mediainfo_json(&json)
}
