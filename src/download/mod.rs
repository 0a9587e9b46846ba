//! Download module containing per-job data and filename handling.
//!
//! # Overview
//!
//! - [`download`] - The [`Download`] job description (URL and local filename)
//! - [`filename`] - Filename extraction, sanitization and collision handling
//! - [`summary`] - How a job ended, sent over its completion channel
//!
//! # Examples
//!
//! ```rust
//! use multiget::download::Download;
//!
//! let download = Download::from("https://example.com/file.zip");
//! assert_eq!(download.filename, "file.zip");
//! ```

pub mod download;
pub mod filename;
pub mod summary;

pub use download::Download;
pub use filename::{get_filename, get_unique_filename, sanitize_filename, DEFAULT_FILENAME};
pub use summary::{Status, Summary};
