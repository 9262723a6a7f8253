//! Title normalization for composed names.

use seedforge_common::text::strip_diacritics;

/// Normalize a title into dot-separated capitalized words.
///
/// Diacritics are stripped, apostrophes and hyphens become separators and
/// `, ; { } [ ] :` are dropped. Short all-caps words (acronyms, roman
/// numerals, numbers) keep their case. Applying it twice changes nothing.
///
/// ```
/// use seedforge::compose::normalize_title;
///
/// assert_eq!(normalize_title("L'Été: de Kikujiro"), "L.Ete.De.Kikujiro");
/// assert_eq!(normalize_title("the NASA files"), "The.NASA.Files");
/// ```
pub fn normalize_title(title: &str) -> String {
    words(title)
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(".")
}

/// Apply the title separator rules without touching letter case.
///
/// ```
/// use seedforge::compose::dotted;
///
/// assert_eq!(dotted("Director's cut"), "Director.s.cut");
/// assert_eq!(dotted("EXTENDED"), "EXTENDED");
/// ```
pub fn dotted(text: &str) -> String {
    words(text).join(".")
}

fn words(text: &str) -> Vec<String> {
    let cleaned: String = strip_diacritics(text)
        .chars()
        .filter(|c| !matches!(c, ',' | ';' | '{' | '}' | '[' | ']' | ':'))
        .map(|c| match c {
            '\'' | '’' | '‘' | '`' | '-' => '.',
            other => other,
        })
        .collect();

    cleaned
        .split(|c: char| c.is_whitespace() || c == '.')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

fn capitalize(word: &str) -> String {
    let is_acronym = word.chars().count() <= 4 && !word.chars().any(char::is_lowercase);
    if is_acronym {
        return word.to_string();
    }

    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
