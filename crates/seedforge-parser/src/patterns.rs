//! Compiled patterns, in the order the parser applies them.
//!
//! Matching runs on a copy of the name where `_` is replaced by a space, so
//! `\b` sees underscores as separators while byte offsets stay unchanged.

use regex::Regex;
use std::sync::LazyLock;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern must compile")
}

// ── Season / episode ────────────────────────────────────────────────

pub static SEASON_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\bS(\d{1,3})[ .-]?E(\d{1,4})"));

pub static CROSS_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(\d{1,2})x(\d{2,3})\b"));

pub static SEASON: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bS(\d{1,3})\b"));

pub static SEASON_WORD: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:saison|season)[ .-]?(\d{1,3})\b"));

pub static COMPLETE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:complete|int[ée]grale)\b"));

pub static EPISODE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bE(\d{1,4})\b"));

pub static EPISODE_WORD: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:[ée]pisode|ep)[ .-]?(\d{1,4})\b"));

// ── Descriptive tags ────────────────────────────────────────────────

pub static YEAR: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(?:19|20)\d{2}\b"));

pub static SOURCE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:REMUX|WEB[ .-]?DL|WEB[ .-]?RIP|WEB|BLU[ .-]?RAY|BDRIP|BRRIP|HDTV|DVDRIP|HDLIGHT|4KLIGHT|MHD)\b",
    )
});

pub static LANGUAGE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:MULTI|TRUEFRENCH|FRENCH|VFF|VFQ|VF2|VFI|SUBFRENCH)\b")
});

pub static INFO: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\b(?:REPACK|PROPER|UNRATED|UNCUT|LIMITED|INTERNAL)\b")
});

pub static EDITION: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:EXTENDED|REMASTERED|THEATRICAL|CRITERION|DIRECTOR'?S?[ .]CUT|FINAL[ .]CUT)\b",
    )
});

pub static IMAX: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\bIMAX\b"));

pub static THREE_D: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\b3D\b"));

pub static THREE_D_LAYOUT: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(?:H?SBS|H?OU)\b"));

pub static PLATFORM: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"\b(?:NF|AMZN|DSNP|ATVP|HMAX|PCOK|HULU|PMTP|CRAV|ADN|MYCANAL)\b")
});

// ── Title boundaries only ───────────────────────────────────────────

pub static TECHNICAL: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b(?:2160p|1080[pi]|720p|576p|480p|4K|UHD|x26[45]|h[ .]?26[45]|HEVC|AVC|AV1|XviD|DivX|10bits?|HDR10\+?|HDR|DV|DoVi|HLG|AAC|E?AC-?3|DDP?(?:[ .]?[257][ .]?[01])?|DTS(?:-HD)?|TrueHD|Atmos|FLAC|Opus)\b",
    )
});

pub static RESOLUTION_TOKEN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^\d{3,4}[pi]$"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_episode_ignores_dimensions() {
        assert!(!CROSS_EPISODE.is_match("1920x1080"));
        assert!(CROSS_EPISODE.is_match("Show 1x05 720p"));
    }

    #[test]
    fn test_season_requires_no_episode_suffix() {
        assert!(SEASON.is_match("Show.S02.1080p"));
        assert!(!SEASON.is_match("Show.S02E01.1080p"));
    }

    #[test]
    fn test_year_not_inside_resolution() {
        assert!(!YEAR.is_match("Movie.2160p"));
        assert!(YEAR.is_match("Movie.2019.2160p"));
    }

    #[test]
    fn test_technical_tokens() {
        for token in ["x264", "H.265", "DDP5.1", "TrueHD", "HDR10", "DTS-HD", "1080p"] {
            assert!(TECHNICAL.is_match(token), "{token}");
        }
    }
}
