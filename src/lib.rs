//! Seedforge - release naming and tag inference for tracker uploads
//!
//! The engine turns a release name, an optional `mediainfo` report and an
//! optional directory analysis into a canonical release name and a set of
//! taxonomy tag ids.
//!
//! ```
//! use seedforge::classify::classify_variant;
//! use seedforge::compose::compose_name;
//! use seedforge_common::Resolution;
//! use seedforge_parser::parse_name;
//!
//! let mut bag = parse_name("Example.Movie.2019.1080p.BluRay.x264-GROUP").attributes;
//! bag.resolution = Some(Resolution::_1080p);
//! bag.video_codec = Some("x264".into());
//!
//! let variant = classify_variant("Example.Movie.2019.1080p.BluRay.x264-GROUP", &bag, None);
//! assert_eq!(compose_name(&variant, &bag), "Example.Movie.2019.1080p.BluRay.x264-GROUP");
//! ```

pub mod classify;
pub mod compose;
pub mod config;
pub mod pipeline;
pub mod probe;
pub mod scanner;
pub mod tags;
