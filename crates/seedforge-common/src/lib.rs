//! Seedforge-Common: the attribute vocabulary shared by every seedforge crate.
//!
//! - **Attribute Bag**: the merged record of release attributes for one item
//! - **Vocabulary Types**: resolution, source, channel layout, season designators
//! - **Languages**: normalization of track languages into naming-friendly labels
//! - **Text Utilities**: diacritic stripping and case-insensitive comparisons
//! - **Path Utilities**: video / ebook / game detection by extension
//! - **Error Handling**: common error type and result alias
//!
//! # Examples
//!
//! ```
//! use seedforge_common::{AttributeBag, Resolution, Source};
//!
//! let mut bag = AttributeBag::with_title("Example Movie");
//! bag.resolution = Some(Resolution::_1080p);
//! bag.source = Some(Source::BluRay);
//!
//! assert_eq!(bag.release_group_or_default(), "NoTag");
//! ```

pub mod analysis;
pub mod attributes;
pub mod error;
pub mod language;
pub mod paths;
pub mod text;
pub mod types;

pub use analysis::DirectoryAnalysis;
pub use attributes::{AttributeBag, DEFAULT_RELEASE_GROUP};
pub use error::{Error, Result};
pub use language::{normalize_language, LanguageClass};
pub use types::*;
