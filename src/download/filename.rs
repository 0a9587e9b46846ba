//! Local filename derivation and collision handling.
//!
//! Filenames are taken from the last path segment of a URL and sanitized so
//! they are always safe to create in the download directory. Collisions with
//! existing files are resolved with a `filename.N` numbering scheme.
//!
//! # Examples
//!
//! ```rust
//! use multiget::download::filename::get_filename;
//!
//! assert_eq!(get_filename("https://example.com/archive.zip"), "archive.zip");
//! assert_eq!(get_filename("https://example.com/"), "index.html");
//! assert_eq!(get_filename("https://example.com/?q=1"), "_q_1");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Filename used when none can be extracted from the URL.
pub const DEFAULT_FILENAME: &str = "index.html";

/// Replacement for every character not allowed in a filename.
pub const FILENAME_SUBSTITUTION: &str = "_";

// The repeated group captures its last iteration, i.e. the last path segment.
static URL_SEGMENTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9A-Za-z_]+://[^/]+(?:/([^/]*))*").expect("URL pattern is valid")
});

static ILLEGAL_FILENAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\pL\-.0-9]").expect("filename pattern is valid"));

/// Returns a sanitized filename for the URL.
///
/// The last `/`-delimited segment after `scheme://host` is used verbatim,
/// without percent decoding or query stripping. Empty, `.` and `..` segments,
/// and URLs without any segment, fall back to [`DEFAULT_FILENAME`].
pub fn get_filename(url: &str) -> String {
    let segment = URL_SEGMENTS
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|segment| segment.as_str())
        .filter(|segment| !matches!(*segment, "" | "." | ".."));

    match segment {
        Some(segment) => sanitize_filename(segment),
        None => DEFAULT_FILENAME.to_string(),
    }
}

/// Replaces every character that is not a Unicode letter, `-`, `.` or an
/// ASCII digit with [`FILENAME_SUBSTITUTION`].
pub fn sanitize_filename(filename: &str) -> String {
    ILLEGAL_FILENAME_CHARS
        .replace_all(filename, FILENAME_SUBSTITUTION)
        .into_owned()
}

/// Returns `filename` if it is free in `directory`, otherwise the first free
/// `filename.N` with `N` counting up from 1.
///
/// The check is advisory: nothing is reserved on disk, so another process may
/// claim the name before it is used. When the filesystem cannot tell whether a
/// candidate exists (unreadable or missing directory, name too long), probing
/// stops and that candidate is returned; creating the file then reports the
/// actual error.
pub fn get_unique_filename(directory: &Path, filename: &str) -> String {
    get_unique_filename_excluding(directory, filename, &HashSet::new())
}

/// Same as [`get_unique_filename`], but names in `claimed` are also treated
/// as taken.
pub fn get_unique_filename_excluding(
    directory: &Path,
    filename: &str,
    claimed: &HashSet<String>,
) -> String {
    let mut candidate = filename.to_string();
    let mut postfix = 1u64;
    loop {
        if !claimed.contains(&candidate) {
            match directory.join(&candidate).try_exists() {
                Ok(false) => return candidate,
                Ok(true) => {}
                Err(e) => {
                    debug!(candidate, error = %e, "Cannot probe filename, using it as is");
                    return candidate;
                }
            }
        }
        candidate = format!("{}.{}", filename, postfix);
        postfix += 1;
    }
}
