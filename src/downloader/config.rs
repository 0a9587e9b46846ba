//! Configuration structures and defaults for the downloader.
//!
//! # Examples
//!
//! ```rust
//! use multiget::downloader::DownloadCallback;
//! use multiget::download::{Status, Summary};
//!
//! let callback: DownloadCallback = Box::new(|summary: &Summary| {
//!     match summary.status() {
//!         Status::Success => println!("Downloaded: {}", summary.download().filename),
//!         Status::Fail(msg) => println!("Failed: {} - {}", summary.download().filename, msg),
//!         Status::NotStarted => {}
//!     }
//! });
//! ```

use crate::download::Summary;
use crate::http::WebGetter;
use crate::printer::{Printer, StdPrinter};

use reqwest::header::HeaderMap;
use std::env::current_dir;
use std::sync::Arc;
use std::time::Duration;

/// Chunk size in bytes before the first speed measurement.
pub const INITIAL_CHUNK_SIZE: u64 = 10 * 1024;

/// Number of chunks aimed for per second of measured throughput.
pub const CHUNKS_PER_SECOND: u64 = 2;

/// Interval between two status table rows.
pub const TABLE_UPDATE_INTERVAL: Duration = Duration::from_secs(1);

/// Callback type for download completion events
pub type DownloadCallback = Box<dyn Fn(&Summary) + Send + Sync>;

/// Configuration structure for the downloader
#[derive(Clone)]
pub struct DownloaderConfig {
    /// Directory where to store the downloaded files.
    pub directory: std::path::PathBuf,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Optional proxy for the default HTTP transport.
    pub proxy: Option<reqwest::Proxy>,
    /// Chunk size used until the first throughput sample.
    pub initial_chunk_size: u64,
    /// Target number of chunks per second of throughput.
    pub chunks_per_second: u64,
    /// Interval between status table rows.
    pub tick_interval: Duration,
    /// Transport. The HTTP transport is built from `headers` and `proxy` when unset.
    pub web_getter: Option<Arc<dyn WebGetter>>,
    /// Output sink for the table and error messages.
    pub printer: Arc<dyn Printer>,
    /// Callback for when each download completes.
    pub on_complete: Option<Arc<DownloadCallback>>,
}

impl std::fmt::Debug for DownloaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloaderConfig")
            .field("directory", &self.directory)
            .field("headers", &self.headers)
            .field("proxy", &self.proxy)
            .field("initial_chunk_size", &self.initial_chunk_size)
            .field("chunks_per_second", &self.chunks_per_second)
            .field("tick_interval", &self.tick_interval)
            .field("web_getter", &self.web_getter.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default(),
            headers: None,
            proxy: None,
            initial_chunk_size: INITIAL_CHUNK_SIZE,
            chunks_per_second: CHUNKS_PER_SECOND,
            tick_interval: TABLE_UPDATE_INTERVAL,
            web_getter: None,
            printer: Arc::new(StdPrinter),
            on_complete: None,
        }
    }
}
