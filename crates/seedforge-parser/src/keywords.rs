//! Static keyword tables.
//!
//! Keys are folded: lowercase with `-`, `.`, `_`, space and apostrophes removed.

use phf::phf_map;
use seedforge_common::Source;

pub static SOURCES: phf::Map<&'static str, Source> = phf_map! {
    "remux" => Source::Remux,
    "webdl" => Source::WebDl,
    "web" => Source::WebDl,
    "webrip" => Source::WebRip,
    "bluray" => Source::BluRay,
    "bdrip" => Source::BluRay,
    "brrip" => Source::BluRay,
    "hdtv" => Source::Hdtv,
    "dvdrip" => Source::DvdRip,
    "hdlight" => Source::HdLight,
    "mhd" => Source::HdLight,
    "4klight" => Source::FourKLight,
};

/// Language markers and the advisory language they imply.
pub static LANGUAGE_MARKERS: phf::Map<&'static str, &'static str> = phf_map! {
    "multi" => "MULTi",
    "vf2" => "MULTi",
    "truefrench" => "VFF",
    "vff" => "VFF",
    "vfq" => "VFQ",
    "vfi" => "VFI",
    "french" => "FRENCH",
    "subfrench" => "VOSTFR",
    "vostfr" => "VOSTFR",
};

pub static INFO_FLAGS: phf::Map<&'static str, &'static str> = phf_map! {
    "repack" => "REPACK",
    "proper" => "PROPER",
    "unrated" => "UNRATED",
    "uncut" => "UNCUT",
    "limited" => "LIMITED",
    "internal" => "INTERNAL",
};

pub static EDITIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "extended" => "EXTENDED",
    "remastered" => "REMASTERED",
    "theatrical" => "THEATRICAL",
    "criterion" => "CRITERION",
    "directorscut" => "Directors Cut",
    "directorcut" => "Directors Cut",
    "finalcut" => "Final Cut",
};

/// Streaming platforms recognized in names (matched case-sensitively).
pub static PLATFORMS: phf::Map<&'static str, &'static str> = phf_map! {
    "NF" => "NF",
    "AMZN" => "AMZN",
    "DSNP" => "DSNP",
    "ATVP" => "ATVP",
    "HMAX" => "HMAX",
    "PCOK" => "PCOK",
    "HULU" => "HULU",
    "PMTP" => "PMTP",
    "CRAV" => "CRAV",
    "ADN" => "ADN",
    "MYCANAL" => "MYCANAL",
};

/// Words that are also ordinary title words; they only count as tags when
/// written fully uppercase in the name.
pub static TITLE_AMBIGUOUS: phf::Set<&'static str> = phf::phf_set! {
    "web",
    "french",
    "truefrench",
    "proper",
    "limited",
    "internal",
    "uncut",
    "extended",
    "remastered",
    "theatrical",
    "criterion",
    "finalcut",
};

/// Hyphen suffixes that belong to a tag rather than a release group.
pub static GROUP_REJECTS: phf::Set<&'static str> = phf::phf_set! {
    "dl",
    "rip",
    "hd",
    "ma",
    "x",
    "ray",
    "ac3",
    "3",
};

/// Fold a matched keyword into its table key.
pub fn fold_key(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '.' | '_' | ' ' | '\'' | '’'))
        .flat_map(char::to_lowercase)
        .collect()
}
