//! Mapping of a technical report onto the attribute vocabulary.
//!
//! Raw format strings are matched by case-insensitive substring so that the
//! many spellings mediainfo produces across versions land on one token.
//! Fields that cannot be read are skipped; normalization never fails.

use crate::report::{TechnicalReport, Track};
use seedforge_common::language::LanguageClass;
use seedforge_common::{
    normalize_language, AttributeBag, ChannelLayout, Resolution, SubtitleKind, SubtitleTrack,
};

/// Advisory language when French and other audio languages are mixed.
pub const ADVISORY_MULTI: &str = "MULTi";
/// Advisory language when every audio track is French.
pub const ADVISORY_FRENCH: &str = "FRENCH";

/// Build a partial attribute bag from a technical report.
///
/// # Example
///
/// ```
/// use seedforge_probe::{normalize_technical_report, TechnicalReport};
/// use seedforge_common::Resolution;
///
/// let json = r#"{"media": {"track": [
///     {"@type": "General", "Format": "Matroska"},
///     {"@type": "Video", "Format": "HEVC", "Width": "3840", "Height": "1600"}
/// ]}}"#;
/// let report = TechnicalReport::from_mediainfo_json(json)?;
/// let bag = normalize_technical_report(&report);
///
/// assert_eq!(bag.container.as_deref(), Some("MKV"));
/// assert_eq!(bag.resolution, Some(Resolution::_2160p));
/// assert_eq!(bag.video_codec.as_deref(), Some("x265"));
/// # Ok::<(), seedforge_probe::Error>(())
/// ```
pub fn normalize_technical_report(report: &TechnicalReport) -> AttributeBag {
    let mut bag = AttributeBag::new();

    if let Some(general) = report.general() {
        bag.container = container(general);
    }

    if let Some(video) = report.video_tracks().next() {
        bag.resolution = resolution(video);
        bag.video_codec = video_codec(video);
        for label in hdr_labels(video) {
            bag.push_hdr(label);
        }
    }

    apply_audio(&mut bag, report);

    bag.subtitles = report.text_tracks().filter_map(subtitle).collect();
    bag.language = advisory_language(&bag.audio_languages).map(str::to_string);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        container = ?bag.container,
        resolution = ?bag.resolution,
        video_codec = ?bag.video_codec,
        hdr = ?bag.hdr,
        audio = ?bag.audio_codecs,
        languages = ?bag.audio_languages,
        "normalized technical report"
    );

    bag
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn lower(value: Option<&str>) -> String {
    value.unwrap_or_default().to_lowercase()
}

fn container(general: &Track) -> Option<String> {
    let format = lower(general.format.as_deref());
    let mapped = if format.contains("matroska") {
        Some("MKV")
    } else if format.contains("mpeg-4") {
        Some("MP4")
    } else if format.contains("avi") {
        Some("AVI")
    } else if format.contains("mpeg-ts") || format.contains("bdav") {
        Some("TS")
    } else if format.contains("webm") {
        Some("WEBM")
    } else {
        None
    };

    mapped.map(str::to_string).or_else(|| {
        non_empty(general.file_extension.as_deref())
            .map(|ext| ext.trim_start_matches('.').to_uppercase())
    })
}

fn resolution(video: &Track) -> Option<Resolution> {
    let width = video.width();
    let height = video.height();
    if width.is_none() && height.is_none() {
        #[cfg(feature = "tracing")]
        tracing::debug!("video track has no readable dimensions");
        return None;
    }
    Resolution::from_dimensions(width.unwrap_or(0), height.unwrap_or(0))
}

fn video_codec(video: &Track) -> Option<String> {
    let library = lower(video.encoder());
    let format = lower(video.format.as_deref());

    if library.contains("x265") || format == "hevc" {
        Some("x265".to_string())
    } else if library.contains("x264") || format == "avc" {
        Some("x264".to_string())
    } else if format.contains("av1") {
        Some("AV1".to_string())
    } else {
        non_empty(video.format.as_deref()).map(str::to_string)
    }
}

/// HDR detections for a video track, in detection order.
fn hdr_labels(video: &Track) -> Vec<&'static str> {
    let mut labels = Vec::new();
    let format = lower(video.hdr_format.as_deref());
    let compat = lower(video.hdr_format_compat.as_deref());
    let transfer = lower(video.transfer_characteristics.as_deref());

    if format.contains("hdr10+") || format.contains("hdr10 plus") || format.contains("2094") {
        labels.push("HDR10+");
    } else if format.contains("hdr10") || format.contains("2086") {
        labels.push("HDR10");
    } else if format.contains("hdr") {
        labels.push("HDR");
    }

    if format.contains("dolby vision") || compat.contains("hdr10") {
        labels.push("DV");
    }

    if transfer.contains("hlg") || transfer.contains("arib std-b67") {
        labels.push("HLG");
    }

    labels
}

fn apply_audio(bag: &mut AttributeBag, report: &TechnicalReport) {
    let mut default_channels = None;
    let mut first_channels = None;

    for track in report.audio_tracks() {
        if let Some(language) = non_empty(track.language.as_deref())
            .and_then(|l| normalize_language(l, track.title.as_deref()))
        {
            if !bag.audio_languages.contains(&language) {
                bag.audio_languages.push(language);
            }
        }

        if let Some(codec) = audio_codec(track) {
            bag.push_audio_codec(&codec);
        }

        match track.channel_count().and_then(ChannelLayout::from_channel_count) {
            Some(layout) => {
                if track.is_default() && default_channels.is_none() {
                    default_channels = Some(layout);
                }
                first_channels.get_or_insert(layout);
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(channels = ?track.channels, "unreadable channel count");
            }
        }
    }

    bag.audio_channels = default_channels.or(first_channels);
}

/// Canonical codec token for an audio track, with an " Atmos" suffix when
/// the track carries Atmos.
fn audio_codec(track: &Track) -> Option<String> {
    let format = lower(track.format.as_deref());
    let commercial = lower(track.commercial_name());
    let features = lower(track.format_additional_features.as_deref());

    let base = if format.contains("e-ac-3") || format.contains("eac3") {
        "EAC3".to_string()
    } else if format.contains("ac-3") || format.contains("ac3") {
        "AC3".to_string()
    } else if format.starts_with("dts") || commercial.contains("dts") {
        dts_variant(&commercial, &features).to_string()
    } else if format.contains("mlp") || format.contains("truehd") {
        "TrueHD".to_string()
    } else if format.contains("aac") {
        "AAC".to_string()
    } else if format.contains("flac") {
        "FLAC".to_string()
    } else if format.contains("opus") {
        "Opus".to_string()
    } else {
        non_empty(track.format.as_deref())?.to_string()
    };

    let atmos = commercial.contains("atmos") || features.split_whitespace().any(|f| f == "joc");
    if atmos {
        Some(format!("{} Atmos", base))
    } else {
        Some(base)
    }
}

fn dts_variant(commercial: &str, features: &str) -> &'static str {
    let feature = |name: &str| features.split_whitespace().any(|f| f == name);

    if commercial.contains("dts:x") || commercial.contains("dts-x") || feature("x") {
        "DTS:X"
    } else if commercial.contains("master audio") || feature("xll") {
        "DTS-HD MA"
    } else if commercial.contains("dts-hd") || feature("xbr") {
        "DTS-HD"
    } else {
        "DTS"
    }
}

fn subtitle(track: &Track) -> Option<SubtitleTrack> {
    let language = non_empty(track.language.as_deref())
        .and_then(|l| normalize_language(l, track.title.as_deref()))?;
    let title = lower(track.title.as_deref());

    let mut sub = SubtitleTrack::new(language);
    sub.forced = track.is_forced() || title.contains("forced") || title.contains("forcé");
    sub.sdh = title.contains("sdh") || title.contains("malentendant");
    sub.full = title.contains("full") || title.contains("complet");
    sub.kind = subtitle_kind(track.format.as_deref());
    Some(sub)
}

fn subtitle_kind(format: Option<&str>) -> Option<SubtitleKind> {
    let format = lower(format);
    const TEXT: &[&str] = &["utf-8", "subrip", "srt", "ass", "ssa", "webvtt", "timed text", "tx3g"];
    const IMAGE: &[&str] = &["pgs", "vobsub", "dvb", "hdmv"];

    if format.is_empty() {
        None
    } else if TEXT.iter().any(|t| format.contains(t)) {
        Some(SubtitleKind::Text)
    } else if IMAGE.iter().any(|t| format.contains(t)) {
        Some(SubtitleKind::Image)
    } else {
        None
    }
}

/// Advisory language from the audio languages, raw or normalized.
pub fn advisory_language(languages: &[String]) -> Option<&'static str> {
    let classes: Vec<LanguageClass> = languages
        .iter()
        .filter_map(|l| normalize_language(l, None))
        .map(|l| LanguageClass::of(&l))
        .collect();
    let french = classes.iter().any(LanguageClass::is_french_family);
    let other = classes.iter().any(|c| !c.is_french_family());

    match (french, other) {
        (true, true) => Some(ADVISORY_MULTI),
        (true, false) => Some(ADVISORY_FRENCH),
        _ => None,
    }
}
