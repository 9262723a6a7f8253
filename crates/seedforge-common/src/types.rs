//! Closed vocabularies used by the attribute bag.
//!
//! Every enum here serializes to the exact token that appears in a composed
//! release name, so a persisted bag reads the same as the name it produces.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed HDR priority order used whenever HDR labels are serialized.
pub const HDR_PRIORITY: &[&str] = &["HDR10+", "HDR10", "HDR", "DV", "HLG", "SDR"];

/// Map an HDR label to its canonical uppercase form ("Dolby Vision" → "DV").
pub fn canonical_hdr_label(label: &str) -> String {
    let upper = label.trim().to_uppercase();
    match upper.as_str() {
        "DOLBY VISION" | "DOLBYVISION" | "DOVI" => "DV".to_string(),
        "HDR10PLUS" | "HDR10 PLUS" => "HDR10+".to_string(),
        _ => upper,
    }
}

/// Position of a canonical HDR label in [`HDR_PRIORITY`], if known.
pub fn hdr_rank(label: &str) -> Option<usize> {
    HDR_PRIORITY.iter().position(|known| *known == label)
}

/// Video resolution tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "480p")]
    _480p,
    #[serde(rename = "720p")]
    _720p,
    #[serde(rename = "1080p")]
    _1080p,
    #[serde(rename = "2160p")]
    _2160p,
}

impl Resolution {
    /// Derive the tier from pixel dimensions.
    ///
    /// Width and height are each sufficient on their own so that cropped or
    /// anamorphic encodes land in the tier of their larger axis.
    pub fn from_dimensions(width: u32, height: u32) -> Option<Self> {
        if width >= 3840 || height >= 2100 {
            Some(Self::_2160p)
        } else if width >= 1920 || height >= 1000 {
            Some(Self::_1080p)
        } else if width >= 1280 || height >= 700 {
            Some(Self::_720p)
        } else if width > 0 || height > 0 {
            Some(Self::_480p)
        } else {
            None
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::_480p => write!(f, "480p"),
            Self::_720p => write!(f, "720p"),
            Self::_1080p => write!(f, "1080p"),
            Self::_2160p => write!(f, "2160p"),
        }
    }
}

impl FromStr for Resolution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "2160p" | "4k" | "uhd" => Ok(Self::_2160p),
            "1080p" | "1080i" => Ok(Self::_1080p),
            "720p" => Ok(Self::_720p),
            "480p" | "576p" | "sd" => Ok(Self::_480p),
            _ => Err(Error::unknown("resolution", s)),
        }
    }
}

/// Release source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "REMUX")]
    Remux,
    #[serde(rename = "WEB-DL")]
    WebDl,
    #[serde(rename = "WEBRip")]
    WebRip,
    #[serde(rename = "BluRay")]
    BluRay,
    #[serde(rename = "HDTV")]
    Hdtv,
    #[serde(rename = "DVDRip")]
    DvdRip,
    #[serde(rename = "HDLight")]
    HdLight,
    #[serde(rename = "4KLight")]
    FourKLight,
}

impl Source {
    /// Rank used to pick the primary source when a name carries several.
    /// Lower wins.
    pub fn priority(&self) -> u8 {
        match self {
            Self::Remux => 0,
            Self::FourKLight => 1,
            Self::HdLight => 2,
            Self::WebDl => 3,
            Self::WebRip => 4,
            Self::BluRay => 5,
            Self::Hdtv => 6,
            Self::DvdRip => 7,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remux => write!(f, "REMUX"),
            Self::WebDl => write!(f, "WEB-DL"),
            Self::WebRip => write!(f, "WEBRip"),
            Self::BluRay => write!(f, "BluRay"),
            Self::Hdtv => write!(f, "HDTV"),
            Self::DvdRip => write!(f, "DVDRip"),
            Self::HdLight => write!(f, "HDLight"),
            Self::FourKLight => write!(f, "4KLight"),
        }
    }
}

impl FromStr for Source {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '.' | ' ' | '_'))
            .collect();
        match folded.as_str() {
            "remux" => Ok(Self::Remux),
            "webdl" | "web" => Ok(Self::WebDl),
            "webrip" => Ok(Self::WebRip),
            "bluray" | "bdrip" | "brrip" => Ok(Self::BluRay),
            "hdtv" => Ok(Self::Hdtv),
            "dvdrip" => Ok(Self::DvdRip),
            "hdlight" | "mhd" => Ok(Self::HdLight),
            "4klight" => Ok(Self::FourKLight),
            _ => Err(Error::unknown("source", s)),
        }
    }
}

/// Audio channel layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelLayout {
    #[serde(rename = "7.1")]
    _7_1,
    #[serde(rename = "5.1")]
    _5_1,
    #[serde(rename = "2.0")]
    _2_0,
    #[serde(rename = "1.0")]
    _1_0,
}

impl ChannelLayout {
    /// Map a raw channel count to a layout token.
    pub fn from_channel_count(channels: u32) -> Option<Self> {
        match channels {
            c if c >= 8 => Some(Self::_7_1),
            c if c >= 6 => Some(Self::_5_1),
            c if c >= 2 => Some(Self::_2_0),
            1 => Some(Self::_1_0),
            _ => None,
        }
    }
}

impl fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::_7_1 => write!(f, "7.1"),
            Self::_5_1 => write!(f, "5.1"),
            Self::_2_0 => write!(f, "2.0"),
            Self::_1_0 => write!(f, "1.0"),
        }
    }
}

/// Season designator: a numbered season or the full-series sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SeasonDesignator {
    Number(u16),
    Complete,
}

impl fmt::Display for SeasonDesignator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "S{:02}", n),
            Self::Complete => write!(f, "COMPLETE"),
        }
    }
}

impl FromStr for SeasonDesignator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("complete") {
            return Ok(Self::Complete);
        }
        trimmed
            .strip_prefix(['S', 's'])
            .and_then(|n| n.parse::<u16>().ok())
            .map(Self::Number)
            .ok_or_else(|| Error::unknown("season designator", s))
    }
}

impl TryFrom<String> for SeasonDesignator {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeasonDesignator> for String {
    fn from(value: SeasonDesignator) -> Self {
        value.to_string()
    }
}

/// Format an episode number as its designator ("E05").
pub fn episode_designator(episode: u16) -> String {
    format!("E{:02}", episode)
}

/// Whether a subtitle track carries text or bitmap images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubtitleKind {
    #[serde(rename = "SRT")]
    Text,
    #[serde(rename = "PGS")]
    Image,
}

impl fmt::Display for SubtitleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "SRT"),
            Self::Image => write!(f, "PGS"),
        }
    }
}

/// A subtitle track as it is presented and tagged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubtitleTrack {
    /// Normalized language label.
    pub language: String,
    #[serde(default)]
    pub forced: bool,
    #[serde(default)]
    pub sdh: bool,
    #[serde(default)]
    pub full: bool,
    #[serde(default)]
    pub kind: Option<SubtitleKind>,
}

impl SubtitleTrack {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            forced: false,
            sdh: false,
            full: false,
            kind: None,
        }
    }
}

impl fmt::Display for SubtitleTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.language)?;
        if self.forced {
            write!(f, " Forced")?;
        }
        if self.sdh {
            write!(f, " SDH")?;
        }
        if self.full {
            write!(f, " Full")?;
        }
        if let Some(kind) = self.kind {
            write!(f, " {}", kind)?;
        }
        Ok(())
    }
}
