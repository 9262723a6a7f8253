//! Path utilities for detecting file kinds by extension.
//!
//! Video files feed the naming pipeline; ebook and game files are recognized
//! so the classifier can route them away from it.

use std::path::Path;

/// Supported video file extensions.
const VIDEO_EXTENSIONS: &[&str] = &["mkv", "mp4", "avi", "wmv", "m4v"];

/// Supported ebook file extensions.
const EBOOK_EXTENSIONS: &[&str] = &["epub", "pdf", "mobi", "azw3", "cbz", "cbr", "djvu"];

/// Supported game file extensions.
const GAME_EXTENSIONS: &[&str] = &["iso", "nsp", "xci", "pkg", "zip", "rar", "7z"];

fn has_extension(path: &Path, list: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| list.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Check if a path has a video file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use seedforge_common::paths::is_video_file;
///
/// assert!(is_video_file(Path::new("movie.mkv")));
/// assert!(is_video_file(Path::new("/path/to/video.MP4")));
/// assert!(!is_video_file(Path::new("book.epub")));
/// ```
pub fn is_video_file(path: &Path) -> bool {
    has_extension(path, VIDEO_EXTENSIONS)
}

/// Check if a path has an ebook file extension.
pub fn is_ebook_file(path: &Path) -> bool {
    has_extension(path, EBOOK_EXTENSIONS)
}

/// Check if a path has a game file extension.
pub fn is_game_file(path: &Path) -> bool {
    has_extension(path, GAME_EXTENSIONS)
}

/// Check if a path is any kind of media the tool can prepare.
pub fn is_media_file(path: &Path) -> bool {
    is_video_file(path) || is_ebook_file(path) || is_game_file(path)
}

/// Strip a trailing known media extension from a file name.
///
/// ```
/// use seedforge_common::paths::strip_media_extension;
///
/// assert_eq!(strip_media_extension("Movie.2019.mkv"), "Movie.2019");
/// assert_eq!(strip_media_extension("Movie.2019"), "Movie.2019");
/// ```
pub fn strip_media_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext))
            if is_media_file(Path::new(&format!("x.{}", ext))) && !stem.is_empty() =>
        {
            stem
        }
        _ => name,
    }
}

/// Get the list of video file extensions.
#[must_use]
pub fn video_extensions() -> &'static [&'static str] {
    VIDEO_EXTENSIONS
}
