//! # seedforge-probe
//!
//! Technical reports for media files and their normalization into the
//! seedforge attribute vocabulary.
//!
//! - [`TechnicalReport`] models the `mediainfo --Output=JSON` document
//! - [`normalize_technical_report`] maps it onto an [`AttributeBag`]
//! - [`MediaInfoRunner`] produces a report by running `mediainfo`
//!
//! ## Features
//!
//! - `tracing` (default) - Enable tracing support
//!
//! ## Example
//!
//! ```no_run
//! use seedforge_probe::{normalize_technical_report, probe_with_mediainfo};
//!
//! let report = probe_with_mediainfo("/path/to/video.mkv".as_ref())?;
//! let bag = normalize_technical_report(&report);
//! println!("Resolution: {:?}", bag.resolution);
//! # Ok::<(), seedforge_probe::Error>(())
//! ```
//!
//! [`AttributeBag`]: seedforge_common::AttributeBag

mod error;
pub mod mediainfo;
pub mod normalize;
pub mod report;
pub mod tools;

pub use error::{Error, Result};
pub use mediainfo::{load_report, probe_with_mediainfo, MediaInfoRunner, MEDIAINFO};
pub use normalize::normalize_technical_report;
pub use report::{TechnicalReport, Track, TrackKind};
pub use tools::{check_tool, require_tool, ToolInfo};
