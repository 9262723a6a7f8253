//! Audio codec and audio spec slots.
//!
//! Atmos and DTS:X travel inside the codec token of the attribute bag
//! ("TrueHD Atmos", "DTS:X"); a name carries them in their own slot after
//! the channel layout.

pub const ATMOS: &str = "Atmos";
pub const DTS_X: &str = "DTS-X";

/// Codec bases and audio specs of an item, both deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioSlots {
    pub codecs: Vec<String>,
    pub specs: Vec<String>,
}

impl AudioSlots {
    pub fn codec_slot(&self) -> Option<String> {
        join(&self.codecs)
    }

    pub fn spec_slot(&self) -> Option<String> {
        join(&self.specs)
    }
}

fn join(items: &[String]) -> Option<String> {
    if items.is_empty() {
        None
    } else {
        Some(items.join("."))
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !value.is_empty() && !list.iter().any(|v| v.eq_ignore_ascii_case(value)) {
        list.push(value.to_string());
    }
}

/// Split canonical codec tokens into bases and specs.
pub fn split_audio(codecs: &[String]) -> AudioSlots {
    let mut slots = AudioSlots::default();
    for codec in codecs {
        let codec = codec.trim();
        let (base, spec) = if let Some(base) = strip_suffix_ignore_case(codec, " atmos") {
            (base.trim(), Some(ATMOS))
        } else if codec.eq_ignore_ascii_case("atmos") {
            ("", Some(ATMOS))
        } else if codec.eq_ignore_ascii_case("DTS:X") || codec.eq_ignore_ascii_case("DTS-X") {
            ("DTS", Some(DTS_X))
        } else {
            (codec, None)
        };

        push_unique(&mut slots.codecs, &base.split_whitespace().collect::<Vec<_>>().join("."));
        if let Some(spec) = spec {
            push_unique(&mut slots.specs, spec);
        }
    }
    slots
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    if !s.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = s.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}
