//! Category-name variants and value aliases used by the tag matcher.
//!
//! Every entry is stored folded (lowercase, no diacritics) and compared
//! against folded taxonomy text.

use seedforge_common::text::fold;

/// Which taxonomy category a value is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryHint {
    MediaType,
    Resolution,
    Source,
    VideoCodec,
    Hdr,
    VideoFeatures,
    AudioCodec,
    AudioLanguage,
    Subtitles,
    Container,
    Language,
    Genre,
}

impl CategoryHint {
    /// Display names a category takes across taxonomy snapshots.
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            Self::MediaType => &["type", "type de media", "media type", "categorie", "category"],
            Self::Resolution => &["resolution", "qualite", "quality", "definition", "qualite video"],
            Self::Source => &["source", "type de source", "origine", "release type"],
            Self::VideoCodec => &["codec video", "video codec", "codec", "encodage video"],
            Self::Hdr => &["hdr", "plage dynamique", "dynamic range"],
            Self::VideoFeatures => &[
                "caracteristiques video",
                "caracteristiques",
                "video features",
                "format video",
            ],
            Self::AudioCodec => &["codec audio", "audio codec", "format audio", "audio"],
            Self::AudioLanguage => &["langues audio", "langue audio", "audio language", "audio languages"],
            Self::Subtitles => &[
                "sous-titres",
                "sous titres",
                "langues sous-titres",
                "subtitles",
                "subtitle languages",
            ],
            Self::Container => &["extension", "conteneur", "container", "format de fichier"],
            Self::Language => &["langues", "langue", "version", "language", "languages"],
            Self::Genre => &["genres", "genre"],
        }
    }

    /// Whether a category with this name or slug answers the hint.
    pub fn matches_category(&self, name: &str, slug: Option<&str>) -> bool {
        let name = category_key(name);
        let slug = slug.map(category_key);
        self.synonyms()
            .iter()
            .map(|synonym| category_key(synonym))
            .any(|synonym| synonym == name || slug.as_deref() == Some(synonym.as_str()))
    }
}

fn category_key(s: &str) -> String {
    fold(&s.replace(['-', '_'], " "))
}

const ALIASES: &[(&str, &[&str])] = &[
    // Video codecs
    ("x264", &["avc/h264/x264", "avc", "h264", "h.264", "x264"]),
    ("x265", &["hevc/h265/x265", "hevc", "h265", "h.265", "x265"]),
    ("av1", &["av1"]),
    // Resolutions
    ("2160p", &["2160p", "4k", "uhd"]),
    ("1080p", &["1080p", "full hd", "fhd"]),
    ("720p", &["720p", "hd"]),
    ("480p", &["480p", "sd"]),
    // Sources
    ("web-dl", &["web-dl", "webdl", "web dl"]),
    ("webrip", &["webrip", "web-rip", "web rip"]),
    ("web", &["web"]),
    ("bluray", &["bluray", "blu-ray", "blu ray"]),
    ("remux", &["remux"]),
    ("dvdrip", &["dvdrip", "dvd-rip", "dvd"]),
    ("hdlight", &["hdlight", "hd light"]),
    ("4klight", &["4klight", "4k light"]),
    // HDR
    ("hdr10+", &["hdr10+", "hdr10plus", "hdr10 plus"]),
    ("dv", &["dolby vision", "dovi", "dv"]),
    // Audio
    ("eac3", &["e-ac3", "e-ac-3", "eac3", "dd+", "dolby digital plus"]),
    ("ac3", &["ac3", "ac-3", "dd", "dolby digital"]),
    ("truehd", &["truehd", "dolby truehd"]),
    ("dts-hd ma", &["dts-hd ma", "dts-hd master audio"]),
    ("dts-x", &["dts:x", "dts-x", "dtsx"]),
    ("atmos", &["atmos", "dolby atmos"]),
    // Languages
    ("multi", &["multi", "multilingue", "multi-langues"]),
    ("vff", &["vff", "truefrench", "francais (france)", "french (france)"]),
    ("vfq", &["vfq", "quebecois", "francais (canada)", "french (canada)"]),
    ("vostfr", &["vostfr", "vost"]),
    ("french", &["francais", "french", "vf"]),
    ("english", &["anglais", "english", "vo"]),
    // Containers
    ("mkv", &["mkv", "matroska"]),
    ("mp4", &["mp4", "mpeg-4"]),
    // Media types
    ("film", &["film", "films", "movie", "movies"]),
    ("serie", &["serie", "series", "serie tv", "tv show"]),
    // Genres
    ("telefilm", &["telefilm", "tele-film", "tv movie"]),
    ("drame", &["drame", "drama"]),
    ("science-fiction", &["science-fiction", "science fiction", "sci-fi", "sf"]),
    ("comedie", &["comedie", "comedy"]),
    ("animation", &["animation", "anime"]),
    ("documentaire", &["documentaire", "documentary"]),
];

/// Aliases of a folded value, empty when the value has none.
///
/// A value that is itself listed as an alias gets its whole group.
pub fn aliases_for(folded: &str) -> &'static [&'static str] {
    ALIASES
        .iter()
        .find(|(key, _)| *key == folded)
        .or_else(|| ALIASES.iter().find(|(_, aliases)| aliases.iter().any(|a| *a == folded)))
        .map(|(_, aliases)| *aliases)
        .unwrap_or(&[])
}

/// Whether a genre denotes a TV film.
pub fn is_telefilm(genre: &str) -> bool {
    let genre = fold(genre);
    aliases_for("telefilm").iter().any(|a| *a == genre)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_synonyms() {
        assert!(CategoryHint::VideoCodec.matches_category("Codec vidéo", None));
        assert!(CategoryHint::Resolution.matches_category("Qualité", None));
        assert!(CategoryHint::Subtitles.matches_category("Anything", Some("sous-titres")));
        assert!(CategoryHint::Genre.matches_category("GENRES", None));
        assert!(!CategoryHint::AudioCodec.matches_category("Codec vidéo", None));
    }

    #[test]
    fn test_aliases_for() {
        assert!(aliases_for("x264").contains(&"avc"));
        assert!(aliases_for("drama").contains(&"drame"));
        assert!(aliases_for("unknown").is_empty());
    }

    #[test]
    fn test_is_telefilm() {
        assert!(is_telefilm("Téléfilm"));
        assert!(is_telefilm(" telefilm "));
        assert!(!is_telefilm("Drame"));
    }
}
