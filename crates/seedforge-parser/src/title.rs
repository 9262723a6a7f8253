//! Title recovery: everything before the first recognized tag.

/// Build the title from the text preceding `offset`.
///
/// Dots, underscores and path separators become spaces, runs of whitespace
/// collapse, and trailing separators are trimmed. Returns `None` when nothing
/// is left.
pub fn before(text: &str, offset: usize) -> Option<String> {
    let prefix = text.get(..offset)?;
    let folded: String = prefix
        .chars()
        .map(|c| match c {
            '.' | '_' | '/' | '\\' => ' ',
            other => other,
        })
        .collect();
    let collapsed = folded.split_whitespace().collect::<Vec<_>>().join(" ");
    let trimmed = collapsed
        .trim_end_matches(|c: char| matches!(c, '-' | '(' | '[' | '{') || c.is_whitespace())
        .trim();

    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
