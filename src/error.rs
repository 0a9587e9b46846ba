//! Error handling for the multiget library.
//!
//! This module provides the error type shared by the transport, the download
//! tasks and the orchestrator. Job-local failures are rendered into the error
//! sink and into the job's [`Summary`](crate::Summary); only failures that
//! prevent the whole batch from starting are returned to the caller.

use std::io;
use thiserror::Error;

/// Errors that can happen when using multiget.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O Error.
    ///
    /// Raised while staging, writing or reading files during a download.
    #[error("{source}")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    ///
    /// Covers network failures, non-success HTTP statuses and body errors.
    #[error("{source}")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error from the HTTP middleware stack.
    #[error("{source}")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },

    /// A blocking filesystem task did not complete.
    #[error("{source}")]
    Join {
        #[from]
        source: tokio::task::JoinError,
    },
}

/// Result type alias for operations that can fail with a multiget error.
pub type Result<T> = std::result::Result<T, Error>;
