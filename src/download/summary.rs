//! Download summary functionality.
//!
//! This module contains the [`Summary`] struct and [`Status`] enum describing
//! how a single job ended. A summary is what each download task sends over its
//! completion channel, exactly once.
//!
//! # Examples
//!
//! ```rust
//! use multiget::download::{Download, Status, Summary};
//!
//! let download = Download::from("https://example.com/file.zip");
//! let summary = Summary::new(download, 1024, 1024).with_status(Status::Success);
//! assert!(summary.is_success());
//!
//! let failed = summary.fail("connection reset");
//! assert_eq!(failed.status(), &Status::Fail("connection reset".into()));
//! ```

use super::download::Download;

/// Download status enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Download failed with error message
    Fail(String),
    /// Download not yet started
    NotStarted,
    /// Download completed successfully
    Success,
}

/// Represents a [`Download`] summary.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Downloaded item.
    download: Download,
    /// Bytes received from the stream.
    size: u64,
    /// Content length declared by the transport, 0 when unknown.
    content_length: u64,
    /// Status.
    status: Status,
}

impl Summary {
    /// Create a new [`Summary`] in the [`Status::NotStarted`] state.
    pub fn new(download: Download, size: u64, content_length: u64) -> Self {
        Self {
            download,
            size,
            content_length,
            status: Status::NotStarted,
        }
    }

    /// Attach a status to a download summary.
    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Get the summary's status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Get the summary's download.
    pub fn download(&self) -> &Download {
        &self.download
    }

    /// Get the number of bytes received.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get the declared content length.
    pub fn content_length(&self) -> u64 {
        self.content_length
    }

    /// Whether the job ended successfully. This is the completion signal.
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Mark the download as failed.
    pub fn fail(self, msg: impl std::fmt::Display) -> Self {
        Self {
            status: Status::Fail(format!("{}", msg)),
            ..self
        }
    }
}
