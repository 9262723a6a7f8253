//! Track language normalization.
//!
//! Technical reports carry ISO 639 codes ("fre", "fr-CA"), English names or
//! localized names ("Français"). Everything is mapped onto one label set where
//! French is split by dubbing region: `VFF` (France), `VFQ` (Québec) and the
//! generic `French` when the region cannot be told.

use crate::text::fold;

/// Label for French dubbed in France.
pub const VFF: &str = "VFF";
/// Label for French dubbed in Québec.
pub const VFQ: &str = "VFQ";
/// Label for French of unknown region.
pub const FRENCH: &str = "French";
/// Label for English.
pub const ENGLISH: &str = "English";

/// Classification of a normalized language label for naming decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageClass {
    Vff,
    Vfq,
    French,
    English,
    Other,
}

impl LanguageClass {
    /// Classify a normalized label (output of [`normalize_language`]).
    pub fn of(label: &str) -> Self {
        match label {
            VFF => Self::Vff,
            VFQ => Self::Vfq,
            FRENCH => Self::French,
            ENGLISH => Self::English,
            _ => Self::Other,
        }
    }

    pub fn is_french_family(&self) -> bool {
        matches!(self, Self::Vff | Self::Vfq | Self::French)
    }
}

/// Normalize a track language, using the track title to refine French.
///
/// Returns `None` for empty input.
///
/// ```
/// use seedforge_common::normalize_language;
///
/// assert_eq!(normalize_language("fre", None).as_deref(), Some("French"));
/// assert_eq!(normalize_language("fr-CA", None).as_deref(), Some("VFQ"));
/// assert_eq!(normalize_language("fr", Some("TrueFrench")).as_deref(), Some("VFF"));
/// assert_eq!(normalize_language("jpn", None).as_deref(), Some("Japanese"));
/// ```
pub fn normalize_language(language: &str, title: Option<&str>) -> Option<String> {
    let folded = fold(language);
    if folded.is_empty() {
        return None;
    }

    let (primary, region) = match folded.split_once(['-', '_']) {
        Some((p, r)) => (p.to_string(), Some(r.to_string())),
        None => (folded.clone(), None),
    };

    if let Some(label) = french_label(&primary, region.as_deref(), title) {
        return Some(label.to_string());
    }

    let name = match primary.as_str() {
        "en" | "eng" | "english" | "anglais" => ENGLISH,
        "ja" | "jpn" | "japanese" | "japonais" => "Japanese",
        "de" | "ger" | "deu" | "german" | "allemand" => "German",
        "es" | "spa" | "spanish" | "espagnol" => "Spanish",
        "it" | "ita" | "italian" | "italien" => "Italian",
        "pt" | "por" | "portuguese" | "portugais" => "Portuguese",
        "ru" | "rus" | "russian" | "russe" => "Russian",
        "ko" | "kor" | "korean" | "coreen" => "Korean",
        "zh" | "chi" | "zho" | "chinese" | "chinois" => "Chinese",
        "ar" | "ara" | "arabic" | "arabe" => "Arabic",
        "nl" | "dut" | "nld" | "dutch" | "neerlandais" => "Dutch",
        "hi" | "hin" | "hindi" => "Hindi",
        "pl" | "pol" | "polish" | "polonais" => "Polish",
        "sv" | "swe" | "swedish" | "suedois" => "Swedish",
        "no" | "nor" | "nob" | "norwegian" | "norvegien" => "Norwegian",
        "da" | "dan" | "danish" | "danois" => "Danish",
        "fi" | "fin" | "finnish" | "finnois" => "Finnish",
        "tr" | "tur" | "turkish" | "turc" => "Turkish",
        "he" | "heb" | "hebrew" | "hebreu" => "Hebrew",
        "el" | "gre" | "ell" | "greek" | "grec" => "Greek",
        "cs" | "cze" | "ces" | "czech" | "tcheque" => "Czech",
        "hu" | "hun" | "hungarian" | "hongrois" => "Hungarian",
        "th" | "tha" | "thai" => "Thai",
        _ => return Some(title_case(language.trim())),
    };
    Some(name.to_string())
}

fn french_label(primary: &str, region: Option<&str>, title: Option<&str>) -> Option<&'static str> {
    match primary {
        "vff" | "truefrench" => return Some(VFF),
        "vfq" => return Some(VFQ),
        "fr" | "fre" | "fra" | "french" | "francais" => {}
        _ => return None,
    }

    match region {
        Some("fr") => return Some(VFF),
        Some("ca") => return Some(VFQ),
        _ => {}
    }

    if let Some(title) = title.map(fold) {
        if ["vfq", "quebec", "canad"].iter().any(|m| title.contains(m)) {
            return Some(VFQ);
        }
        if ["vff", "truefrench", "france"].iter().any(|m| title.contains(m)) {
            return Some(VFF);
        }
    }
    Some(FRENCH)
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_french_variants() {
        assert_eq!(normalize_language("Français", None).as_deref(), Some(FRENCH));
        assert_eq!(normalize_language("fr-FR", None).as_deref(), Some(VFF));
        assert_eq!(normalize_language("fr", Some("VFQ 5.1")).as_deref(), Some(VFQ));
        assert_eq!(normalize_language("fr", Some("Québécois")).as_deref(), Some(VFQ));
        assert_eq!(normalize_language("VFF", None).as_deref(), Some(VFF));
    }

    #[test]
    fn test_other_languages() {
        assert_eq!(normalize_language("en-US", None).as_deref(), Some(ENGLISH));
        assert_eq!(normalize_language("English", Some("VFQ")).as_deref(), Some(ENGLISH));
        assert_eq!(normalize_language("ger", None).as_deref(), Some("German"));
        assert_eq!(normalize_language("klingon", None).as_deref(), Some("Klingon"));
    }

    #[test]
    fn test_empty_language() {
        assert_eq!(normalize_language("   ", None), None);
    }

    #[test]
    fn test_language_class() {
        assert!(LanguageClass::of(VFQ).is_french_family());
        assert!(LanguageClass::of(FRENCH).is_french_family());
        assert_eq!(LanguageClass::of(ENGLISH), LanguageClass::English);
        assert_eq!(LanguageClass::of("Japanese"), LanguageClass::Other);
    }
}
