//! Parse output: the partial attribute bag plus the spans that produced it.

use seedforge_common::AttributeBag;
use serde::{Deserialize, Serialize};

/// What a matched span was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    SeasonEpisode,
    Season,
    Episode,
    Year,
    Source,
    Language,
    Vostfr,
    Info,
    Edition,
    Imax,
    ThreeD,
    Platform,
    /// Technical token (resolution, codec, HDR, audio) that only bounds the title.
    Technical,
    ReleaseGroup,
}

/// A recognized token and its byte range in the parsed string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSpan {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Result of parsing a name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedName {
    pub attributes: AttributeBag,
    /// Spans ordered by start offset.
    pub spans: Vec<TokenSpan>,
}

impl ParsedName {
    /// Offset of the first recognized tag, if any.
    pub fn first_tag_offset(&self) -> Option<usize> {
        self.spans.iter().map(|s| s.start).min()
    }

    pub fn has(&self, kind: TokenKind) -> bool {
        self.spans.iter().any(|s| s.kind == kind)
    }

    pub fn into_attributes(self) -> AttributeBag {
        self.attributes
    }
}
