//! Technical report: the `mediainfo --Output=JSON` document.
//!
//! Every field mediainfo emits is a string, numeric ones included, so the
//! report keeps them as strings and numeric access goes through
//! [`parse_numeric`]. Unknown fields are ignored.

use crate::Result;
use serde::{Deserialize, Serialize};

/// Root of a mediainfo JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalReport {
    pub media: Media,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "@ref", default, skip_serializing_if = "Option::is_none")]
    pub file_ref: Option<String>,
    #[serde(default)]
    pub track: Vec<Track>,
}

/// Kind of a track, from its `@type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    General,
    Video,
    Audio,
    Text,
    Other,
}

/// One track descriptor. Only the fields used for normalization are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    #[serde(rename = "@type")]
    pub track_type: String,
    #[serde(rename = "Format", default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(
        rename = "Format_Commercial_IfAny",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub format_commercial_if_any: Option<String>,
    #[serde(
        rename = "Format_Commercial",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub format_commercial: Option<String>,
    #[serde(
        rename = "Format_AdditionalFeatures",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub format_additional_features: Option<String>,
    #[serde(
        rename = "Encoded_Library_Name",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub encoded_library_name: Option<String>,
    #[serde(rename = "Encoded_Library", default, skip_serializing_if = "Option::is_none")]
    pub encoded_library: Option<String>,
    #[serde(rename = "FileExtension", default, skip_serializing_if = "Option::is_none")]
    pub file_extension: Option<String>,
    #[serde(rename = "Width", default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(rename = "Height", default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(rename = "HDR_Format", default, skip_serializing_if = "Option::is_none")]
    pub hdr_format: Option<String>,
    #[serde(
        rename = "HDR_Format_Compatibility",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hdr_format_compat: Option<String>,
    #[serde(
        rename = "transfer_characteristics",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub transfer_characteristics: Option<String>,
    #[serde(rename = "Channels", default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<String>,
    #[serde(rename = "Language", default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(rename = "Title", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "Default", default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(rename = "Forced", default, skip_serializing_if = "Option::is_none")]
    pub forced: Option<String>,
}

impl Track {
    pub fn kind(&self) -> TrackKind {
        match self.track_type.as_str() {
            "General" => TrackKind::General,
            "Video" => TrackKind::Video,
            "Audio" => TrackKind::Audio,
            "Text" => TrackKind::Text,
            _ => TrackKind::Other,
        }
    }

    /// Commercial format name ("Dolby Digital Plus with Dolby Atmos").
    pub fn commercial_name(&self) -> Option<&str> {
        self.format_commercial_if_any
            .as_deref()
            .or(self.format_commercial.as_deref())
    }

    /// Encoder library, short name preferred over the full version string.
    pub fn encoder(&self) -> Option<&str> {
        self.encoded_library_name
            .as_deref()
            .or(self.encoded_library.as_deref())
    }

    pub fn is_default(&self) -> bool {
        is_yes(self.default.as_deref())
    }

    pub fn is_forced(&self) -> bool {
        is_yes(self.forced.as_deref())
    }

    pub fn width(&self) -> Option<u32> {
        self.width.as_deref().and_then(parse_numeric)
    }

    pub fn height(&self) -> Option<u32> {
        self.height.as_deref().and_then(parse_numeric)
    }

    pub fn channel_count(&self) -> Option<u32> {
        self.channels.as_deref().and_then(parse_numeric)
    }
}

impl TechnicalReport {
    /// Parse a report from mediainfo JSON output.
    ///
    /// # Example
    ///
    /// ```
    /// use seedforge_probe::TechnicalReport;
    ///
    /// let json = r#"{"media": {"track": [{"@type": "Video", "Width": "1920"}]}}"#;
    /// let report = TechnicalReport::from_mediainfo_json(json)?;
    /// assert_eq!(report.video_tracks().next().and_then(|t| t.width()), Some(1920));
    /// # Ok::<(), seedforge_probe::Error>(())
    /// ```
    pub fn from_mediainfo_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn tracks_of(&self, kind: TrackKind) -> impl Iterator<Item = &Track> {
        self.media.track.iter().filter(move |t| t.kind() == kind)
    }

    pub fn general(&self) -> Option<&Track> {
        self.tracks_of(TrackKind::General).next()
    }

    pub fn video_tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks_of(TrackKind::Video)
    }

    pub fn audio_tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks_of(TrackKind::Audio)
    }

    pub fn text_tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks_of(TrackKind::Text)
    }

    pub fn is_empty(&self) -> bool {
        self.media.track.is_empty()
    }
}

fn is_yes(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case("yes"))
}

/// Parse the leading number of a mediainfo value.
///
/// Digit groups separated by spaces are joined ("1 920 pixels" → 1920) and
/// anything after the first other character is dropped ("8 / 6" → 8).
pub fn parse_numeric<T: std::str::FromStr>(s: &str) -> Option<T> {
    let digits: String = s
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ' ')
        .filter(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
