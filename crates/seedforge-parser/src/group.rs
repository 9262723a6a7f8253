//! Release group: the suffix after the final hyphen.

use crate::keywords::GROUP_REJECTS;
use crate::patterns::RESOLUTION_TOKEN;
use crate::span::{TokenKind, TokenSpan};

/// Find the release group at the end of `text`.
///
/// The suffix is rejected when it is a resolution, a fragment of a
/// hyphenated tag ("WEB-DL", "DTS-HD"), when the hyphen is a spaced separator
/// (" - "), or when no other tag precedes the hyphen (hyphenated titles).
pub fn extract(text: &str, spans: &[TokenSpan]) -> Option<TokenSpan> {
    let hyphen = text.rfind('-')?;
    let candidate = &text[hyphen + 1..];

    if candidate.is_empty()
        || candidate.contains(|c: char| c.is_whitespace() || c == '.')
        || text[..hyphen].ends_with(char::is_whitespace)
    {
        return None;
    }
    if RESOLUTION_TOKEN.is_match(candidate)
        || GROUP_REJECTS.contains(candidate.to_lowercase().as_str())
    {
        return None;
    }
    if spans.iter().any(|s| s.start == hyphen + 1) {
        return None;
    }
    if !spans.iter().any(|s| s.end <= hyphen) {
        return None;
    }

    Some(TokenSpan {
        kind: TokenKind::ReleaseGroup,
        start: hyphen,
        end: text.len(),
        text: candidate.to_string(),
    })
}
