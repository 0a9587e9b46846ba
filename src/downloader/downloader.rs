//! Core downloader implementation with the status polling loop.
//!
//! # Examples
//!
//! ```rust,no_run
//! use multiget::downloader::DownloaderBuilder;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = DownloaderBuilder::new()
//!     .directory(PathBuf::from("./downloads"))
//!     .build();
//!
//! let summaries = downloader
//!     .download(&[
//!         "https://example.com/file1.zip",
//!         "https://example.com/file2.pdf",
//!     ])
//!     .await?;
//! for summary in summaries {
//!     println!("{}: {:?}", summary.download().filename, summary.status());
//! }
//! # Ok(())
//! # }
//! ```

use super::config::DownloaderConfig;
use super::task::DownloadTask;
use crate::download::{Download, Summary};
use crate::error::Result;
use crate::http::{HttpClientConfig, HttpWebGetter, WebGetter};
use crate::progress::{ProgressRegistry, StatusTable};

use reqwest::header::HeaderMap;
use std::collections::HashSet;
use std::fmt;
use std::fmt::Debug;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, warn};

/// Represents the download controller.
///
/// A downloader can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use multiget::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().build();
/// # }
/// ```
#[derive(Clone)]
pub struct Downloader {
    config: DownloaderConfig,
}

impl Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish()
    }
}

impl Downloader {
    /// Creates a new Downloader with the given configuration.
    pub(crate) fn new(config: DownloaderConfig) -> Self {
        Self { config }
    }

    /// Gets the directory where files will be downloaded.
    pub fn directory(&self) -> &PathBuf {
        &self.config.directory
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Gets the chunk size used before the first throughput measurement.
    pub fn initial_chunk_size(&self) -> u64 {
        self.config.initial_chunk_size
    }

    /// Gets the number of chunks per second the pacing aims for.
    pub fn chunks_per_second(&self) -> u64 {
        self.config.chunks_per_second
    }

    /// Gets the interval between two status table rows.
    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval
    }

    /// Downloads every distinct URL concurrently while printing the status
    /// table, and returns one summary per distinct URL in input order.
    ///
    /// Individual download failures end up in the summaries and on the error
    /// output; only a failure to set up the HTTP transport or to resolve the
    /// filenames is returned.
    pub async fn download<S: AsRef<str>>(&self, urls: &[S]) -> Result<Vec<Summary>> {
        let web_getter = self.web_getter()?;
        let urls = dedup_urls(urls);
        let registry = ProgressRegistry::new();

        let directory = self.config.directory.clone();
        let downloads =
            tokio::task::spawn_blocking(move || Download::resolve_all(&urls, &directory)).await?;
        let table = StatusTable::initialize(&downloads, self.config.printer.clone());

        let task = DownloadTask {
            web_getter,
            printer: self.config.printer.clone(),
            registry: registry.clone(),
            directory: self.config.directory.clone(),
            initial_chunk_size: self.config.initial_chunk_size,
            chunks_per_second: self.config.chunks_per_second,
            on_complete: self.config.on_complete.clone(),
        };

        debug!("Starting {} downloads", downloads.len());
        let mut pending = Vec::with_capacity(downloads.len());
        for download in &downloads {
            let (done, finished) = oneshot::channel();
            tokio::spawn(task.clone().run(download.clone(), done));
            pending.push(Some(finished));
        }

        let mut summaries: Vec<Option<Summary>> = vec![None; downloads.len()];
        let mut finished_downloads = 0;
        while finished_downloads < downloads.len() {
            tokio::time::sleep(self.config.tick_interval).await;

            for (i, slot) in pending.iter_mut().enumerate() {
                let Some(finished) = slot else { continue };
                let summary = match finished.try_recv() {
                    Ok(summary) => summary,
                    Err(TryRecvError::Empty) => continue,
                    Err(TryRecvError::Closed) => {
                        warn!("Download of {} ended without a result", downloads[i].url);
                        Summary::new(downloads[i].clone(), 0, 0)
                            .fail("the download task stopped unexpectedly")
                    }
                };
                *slot = None;
                summaries[i] = Some(summary);
                finished_downloads += 1;
            }

            table.print_row(&registry);
        }

        Ok(summaries.into_iter().flatten().collect())
    }

    /// The configured transport, or an HTTP one built from the config.
    fn web_getter(&self) -> Result<Arc<dyn WebGetter>> {
        if let Some(ref web_getter) = self.config.web_getter {
            return Ok(web_getter.clone());
        }

        let config = HttpClientConfig {
            proxy: self.config.proxy.clone(),
            headers: self.config.headers.clone(),
        };
        let web_getter: Arc<dyn WebGetter> = Arc::new(HttpWebGetter::new(config)?);
        Ok(web_getter)
    }
}

/// Removes repeated URLs, keeping the first occurrence of each.
pub fn dedup_urls<S: AsRef<str>>(urls: &[S]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(urls.len());
    urls.iter()
        .map(|url| url.as_ref())
        .filter(|url| seen.insert(*url))
        .map(String::from)
        .collect()
}
