//! multiget downloads several files over HTTP(S) concurrently and shows a
//! live table with the downloaded percentage of every file.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use multiget::{DownloaderBuilder, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let downloader = DownloaderBuilder::new().build();
//! downloader
//!     .download(&[
//!         "https://github.com/seanmonstar/reqwest/archive/refs/tags/v0.11.9.zip",
//!         "https://example.com/",
//!     ])
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! prints something like:
//!
//! ```text
//! v0.11.9.zip index.html
//!          0%       100%
//!         37%       100%
//! ```
//!
//! # Module Organization
//!
//! - [`download`] - The per-job `Download`, its `Summary`, and filename resolution
//! - [`downloader`] - The `Downloader` orchestrator, its builder and the chunk pacing
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`http`] - The `WebGetter` transport and its reqwest implementation
//! - [`printer`] - The console output sink
//! - [`progress`] - Shared progress registry and the status table
//! - [`utils`] - Shared utility functions

pub mod download;
pub mod downloader;
pub mod error;
pub mod http;
pub mod printer;
pub mod progress;
pub mod utils;

pub use download::{get_filename, get_unique_filename, Download, Status, Summary};
pub use downloader::{Downloader, DownloaderBuilder};
pub use error::{Error, Result};
pub use http::{create_http_client, HttpClientConfig, HttpWebGetter, WebGetter};
pub use printer::{Printer, StdPrinter};
pub use progress::{ProgressRegistry, StatusTable, StatusTableLayout};
pub use utils::content_length::get_content_length;
