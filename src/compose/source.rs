//! Source slot: every source keyword found on the item, in a fixed order.

use regex::Regex;
use seedforge_common::AttributeBag;
use std::sync::LazyLock;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern must compile")
}

static SOURCE_KEYWORDS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("REMUX", r"(?i)\bremux\b"),
        ("WEB-DL", r"(?i)\bweb[-. ]?dl\b"),
        ("WEB", r"(?i)\bweb\b"),
        ("WEBRip", r"(?i)\bweb[-. ]?rip\b"),
        ("HDTV", r"(?i)\bhdtv\b"),
        ("HDLight", r"(?i)\bhd[-. ]?light\b"),
        ("4KLight", r"(?i)\b4k[-. ]?light\b"),
        ("BluRay", r"(?i)\bblu[-. ]?ray\b"),
        ("DVDRip", r"(?i)\bdvd[-. ]?rip\b"),
    ]
    .into_iter()
    .map(|(token, pattern)| (token, compile(pattern)))
    .collect()
});

static WEB_SUFFIX: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^[-. ]?(?:dl|rip)\b"));

fn mentions(token: &str, pattern: &Regex, text: &str) -> bool {
    if token != "WEB" {
        return pattern.is_match(text);
    }
    // Bare WEB only, not the prefix of WEB-DL or WEBRip.
    pattern
        .find_iter(text)
        .any(|m| !WEB_SUFFIX.is_match(&text[m.end()..]))
}

/// Source slot built from the primary source, the release group and the
/// free-text tags.
pub fn source_slot(bag: &AttributeBag) -> Option<String> {
    let texts: Vec<String> = bag
        .source
        .iter()
        .map(|s| s.to_string())
        .chain(bag.release_group.iter().cloned())
        .chain(bag.tags.iter().cloned())
        .collect();

    let found: Vec<&str> = SOURCE_KEYWORDS
        .iter()
        .filter(|(token, pattern)| texts.iter().any(|t| mentions(token, pattern, t)))
        .map(|(token, _)| *token)
        .collect();

    if found.is_empty() {
        None
    } else {
        Some(found.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedforge_common::Source;

    #[test]
    fn test_primary_source_only() {
        let mut bag = AttributeBag::new();
        bag.source = Some(Source::BluRay);
        assert_eq!(source_slot(&bag).as_deref(), Some("BluRay"));
        bag.source = Some(Source::WebDl);
        assert_eq!(source_slot(&bag).as_deref(), Some("WEB-DL"));
    }

    #[test]
    fn test_compound_sources_in_fixed_order() {
        let mut bag = AttributeBag::new();
        bag.source = Some(Source::BluRay);
        bag.tags = vec!["REMUX".into()];
        assert_eq!(source_slot(&bag).as_deref(), Some("REMUX.BluRay"));
    }

    #[test]
    fn test_bare_web_is_distinct() {
        let mut bag = AttributeBag::new();
        bag.tags = vec!["WEB".into(), "WEBRip".into()];
        assert_eq!(source_slot(&bag).as_deref(), Some("WEB.WEBRip"));

        bag.tags = vec!["web-dl".into()];
        assert_eq!(source_slot(&bag).as_deref(), Some("WEB-DL"));
    }

    #[test]
    fn test_release_group_mentions_count() {
        let mut bag = AttributeBag::new();
        bag.release_group = Some("HDLight-Team".into());
        assert_eq!(source_slot(&bag).as_deref(), Some("HDLight"));
        bag.release_group = Some("GROUP".into());
        assert_eq!(source_slot(&bag), None);
    }
}
