//! The attribute bag: one merged record of release attributes per item.

use crate::types::{
    canonical_hdr_label, episode_designator, ChannelLayout, Resolution, SeasonDesignator, Source,
    SubtitleTrack,
};
use serde::{Deserialize, Serialize};

/// Release group used when none could be inferred.
pub const DEFAULT_RELEASE_GROUP: &str = "NoTag";

/// Canonical record of inferred release attributes for one item.
///
/// Built fresh per item: filled by the name parser, overlaid by the
/// technical-report normalizer, then read by the composer and tag resolver.
/// Serializes verbatim so a workflow can persist it between steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeBag {
    pub title: Option<String>,
    /// Four-digit year.
    pub year: Option<String>,
    pub season: Option<SeasonDesignator>,
    pub episode: Option<u16>,
    /// Number of episode files behind a season pack, when known.
    pub episode_count: Option<u32>,

    pub resolution: Option<Resolution>,
    pub video_codec: Option<String>,
    pub container: Option<String>,
    /// HDR labels; kept deduplicated, serialized by priority at compose time.
    pub hdr: Vec<String>,

    /// Canonical audio codec tokens, e.g. "TrueHD Atmos", "DTS-HD MA".
    pub audio_codecs: Vec<String>,
    pub audio_channels: Option<ChannelLayout>,
    pub audio_languages: Vec<String>,
    pub subtitles: Vec<SubtitleTrack>,

    pub source: Option<Source>,
    pub release_group: Option<String>,
    /// Info flags such as REPACK or PROPER.
    pub info: Vec<String>,
    pub edition: Option<String>,
    pub three_d: bool,
    /// 3D layout such as SBS or HOU.
    pub three_d_layout: Option<String>,
    pub imax: bool,
    pub vostfr: bool,
    /// Streaming platform tag such as NF or AMZN.
    pub platform: Option<String>,

    /// Advisory language ("MULTi", "FRENCH", "VFF", ...).
    pub language: Option<String>,
    pub secondary_languages: Vec<String>,
    pub genres: Vec<String>,
    /// Free-text tags gathered along the way (extra source keywords, notes).
    pub tags: Vec<String>,
}

impl AttributeBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Release group, falling back to [`DEFAULT_RELEASE_GROUP`].
    pub fn release_group_or_default(&self) -> &str {
        self.release_group
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .unwrap_or(DEFAULT_RELEASE_GROUP)
    }

    /// Episode designator ("E05"), if an episode is known.
    pub fn episode_designator(&self) -> Option<String> {
        self.episode.map(episode_designator)
    }

    /// Add an HDR label unless an equivalent one is already present.
    pub fn push_hdr(&mut self, label: &str) {
        let label = canonical_hdr_label(label);
        if !label.is_empty() && !self.hdr.contains(&label) {
            self.hdr.push(label);
        }
    }

    /// Add an audio codec token unless the same codec is already present.
    pub fn push_audio_codec(&mut self, codec: &str) {
        let codec = codec.trim();
        if codec.is_empty() {
            return;
        }
        if !self.audio_codecs.iter().any(|c| c.eq_ignore_ascii_case(codec)) {
            self.audio_codecs.push(codec.to_string());
        }
    }

    /// Add a free-text tag unless already present.
    pub fn push_tag(&mut self, tag: &str) {
        if !tag.is_empty() && !self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            self.tags.push(tag.to_string());
        }
    }

    /// Overlay `other` onto this bag.
    ///
    /// Fields already set here are kept unless `force` is true; empty lists
    /// count as unset. Boolean flags are combined.
    pub fn overlay(&mut self, other: AttributeBag, force: bool) {
        fn take<T>(dst: &mut Option<T>, src: Option<T>, force: bool) {
            if src.is_some() && (force || dst.is_none()) {
                *dst = src;
            }
        }
        fn take_vec<T>(dst: &mut Vec<T>, src: Vec<T>, force: bool) {
            if !src.is_empty() && (force || dst.is_empty()) {
                *dst = src;
            }
        }

        take(&mut self.title, other.title, force);
        take(&mut self.year, other.year, force);
        take(&mut self.season, other.season, force);
        take(&mut self.episode, other.episode, force);
        take(&mut self.episode_count, other.episode_count, force);
        take(&mut self.resolution, other.resolution, force);
        take(&mut self.video_codec, other.video_codec, force);
        take(&mut self.container, other.container, force);
        take_vec(&mut self.hdr, other.hdr, force);
        take_vec(&mut self.audio_codecs, other.audio_codecs, force);
        take(&mut self.audio_channels, other.audio_channels, force);
        take_vec(&mut self.audio_languages, other.audio_languages, force);
        take_vec(&mut self.subtitles, other.subtitles, force);
        take(&mut self.source, other.source, force);
        take(&mut self.release_group, other.release_group, force);
        take_vec(&mut self.info, other.info, force);
        take(&mut self.edition, other.edition, force);
        take(&mut self.three_d_layout, other.three_d_layout, force);
        take(&mut self.platform, other.platform, force);
        take(&mut self.language, other.language, force);
        take_vec(&mut self.secondary_languages, other.secondary_languages, force);
        take_vec(&mut self.genres, other.genres, force);

        self.three_d |= other.three_d;
        self.imax |= other.imax;
        self.vostfr |= other.vostfr;
        for tag in &other.tags {
            self.push_tag(tag);
        }
    }
}
