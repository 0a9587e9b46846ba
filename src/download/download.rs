//! Represents a file to be downloaded.

use super::filename::{get_filename, get_unique_filename_excluding};

use std::collections::HashSet;
use std::path::Path;

/// Represents a file to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// URL of the file to download.
    pub url: String,
    /// File name used to save the file on disk.
    pub filename: String,
}

impl Download {
    /// Creates a new [`Download`].
    ///
    /// When using [`Download::from`], the file name is extracted from the
    /// URL instead.
    pub fn new(url: &str, filename: &str) -> Self {
        Self {
            url: String::from(url),
            filename: String::from(filename),
        }
    }

    /// Builds one download per URL with a filename that is free in
    /// `directory` and not used by an earlier URL of the same batch.
    ///
    /// URLs are expected to be unique already.
    pub fn resolve_all<S: AsRef<str>>(urls: &[S], directory: &Path) -> Vec<Download> {
        let mut claimed = HashSet::with_capacity(urls.len());
        urls.iter()
            .map(|url| {
                let url = url.as_ref();
                let filename =
                    get_unique_filename_excluding(directory, &get_filename(url), &claimed);
                claimed.insert(filename.clone());
                Download::new(url, &filename)
            })
            .collect()
    }
}

impl From<&str> for Download {
    fn from(url: &str) -> Self {
        Download::new(url, &get_filename(url))
    }
}
