//! Text folding helpers shared by title normalization and tag matching.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Remove diacritics by decomposing to NFD and dropping combining marks.
///
/// ```
/// use seedforge_common::text::strip_diacritics;
///
/// assert_eq!(strip_diacritics("Téléfilm"), "Telefilm");
/// assert_eq!(strip_diacritics("Garçon"), "Garcon");
/// ```
pub fn strip_diacritics(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Fold a string for comparisons: diacritics stripped, lowercased, trimmed.
pub fn fold(s: &str) -> String {
    strip_diacritics(s).to_lowercase().trim().to_string()
}

/// Case- and accent-insensitive substring test.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    let needle = fold(needle);
    !needle.is_empty() && fold(haystack).contains(&needle)
}
