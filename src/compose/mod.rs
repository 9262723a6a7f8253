//! Release name composition.
//!
//! A name is an ordered list of slots joined with ".", followed by
//! `-<group>`. Empty slots are skipped. The slot order depends on the
//! variant: series names carry a season/episode designator after the year.

mod audio;
mod hdr;
mod language;
mod source;
mod title;

pub use audio::{split_audio, AudioSlots};
pub use hdr::hdr_slot;
pub use language::{language_slot, FrenchRegion, RegionPolicy, MULTI, VOSTFR};
pub use source::source_slot;
pub use title::{dotted, normalize_title};

use crate::classify::Variant;
use crate::config::Config;
use seedforge_common::{AttributeBag, DEFAULT_RELEASE_GROUP};

/// Knobs for [`NameComposer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Group appended when the bag has none.
    pub default_group: String,
    pub region: RegionPolicy,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            default_group: DEFAULT_RELEASE_GROUP.to_string(),
            region: RegionPolicy::default(),
        }
    }
}

impl From<&Config> for ComposeOptions {
    fn from(config: &Config) -> Self {
        Self {
            default_group: config.naming.default_group.clone(),
            region: RegionPolicy::from(&config.language),
        }
    }
}

/// Composes canonical release names.
#[derive(Debug, Clone, Default)]
pub struct NameComposer {
    options: ComposeOptions,
}

impl NameComposer {
    pub fn new(options: ComposeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ComposeOptions {
        &self.options
    }

    /// Compose the name of one item.
    ///
    /// # Example
    ///
    /// ```
    /// use seedforge::classify::Variant;
    /// use seedforge::compose::NameComposer;
    /// use seedforge_common::{AttributeBag, Resolution, Source};
    ///
    /// let mut bag = AttributeBag::with_title("Example Movie");
    /// bag.year = Some("2019".into());
    /// bag.resolution = Some(Resolution::_1080p);
    /// bag.source = Some(Source::BluRay);
    /// bag.video_codec = Some("x264".into());
    /// bag.release_group = Some("GROUP".into());
    ///
    /// let name = NameComposer::default().compose(&Variant::Movie, &bag);
    /// assert_eq!(name, "Example.Movie.2019.1080p.BluRay.x264-GROUP");
    /// ```
    pub fn compose(&self, variant: &Variant, bag: &AttributeBag) -> String {
        let audio = split_audio(&bag.audio_codecs);

        let mut slots: Vec<Option<String>> = vec![
            bag.title.as_deref().map(normalize_title),
            bag.three_d.then(|| "3D".to_string()),
            bag.three_d
                .then(|| bag.three_d_layout.as_deref().map(str::to_uppercase))
                .flatten(),
            bag.year.clone(),
        ];
        if variant.is_series() {
            slots.push(variant.designator());
        }
        slots.extend([
            join_nonempty(&bag.info),
            bag.edition.as_deref().map(dotted),
            bag.imax.then(|| "IMAX".to_string()),
            language_slot(bag, &self.options.region),
            join_nonempty(
                &bag.secondary_languages
                    .iter()
                    .map(|l| l.to_uppercase())
                    .collect::<Vec<_>>(),
            ),
            hdr_slot(&bag.hdr),
            bag.resolution.map(|r| r.to_string()),
            bag.platform.clone(),
            source_slot(bag),
            audio.codec_slot(),
            bag.audio_channels.map(|c| c.to_string()),
            audio.spec_slot(),
            bag.video_codec.clone(),
        ]);

        let body = slots
            .iter()
            .flatten()
            .map(|slot| sanitize(slot))
            .filter(|slot| !slot.is_empty())
            .collect::<Vec<_>>()
            .join(".");

        let group = bag
            .release_group
            .as_deref()
            .map(sanitize)
            .filter(|g| !g.is_empty())
            .or_else(|| Some(sanitize(&self.options.default_group)).filter(|g| !g.is_empty()))
            .unwrap_or_else(|| DEFAULT_RELEASE_GROUP.to_string());

        format!("{}-{}", body, group)
    }
}

/// Compose a name with default options.
pub fn compose_name(variant: &Variant, bag: &AttributeBag) -> String {
    NameComposer::default().compose(variant, bag)
}

fn join_nonempty(items: &[String]) -> Option<String> {
    let parts: Vec<&str> = items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("."))
    }
}

/// Whitespace to ".", no repeated or edge dots.
fn sanitize(slot: &str) -> String {
    slot.split(|c: char| c.is_whitespace() || c == '.')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}
