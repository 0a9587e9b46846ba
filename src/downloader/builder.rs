//! Builder pattern implementation for creating Downloader instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use multiget::downloader::DownloaderBuilder;
//! use std::path::PathBuf;
//!
//! let downloader = DownloaderBuilder::new()
//!     .directory(PathBuf::from("./downloads"))
//!     .build();
//! ```
//!
//! ## Callbacks and Headers
//!
//! ```rust
//! use multiget::downloader::DownloaderBuilder;
//! use reqwest::header::{HeaderMap, USER_AGENT};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut headers = HeaderMap::new();
//! headers.insert(USER_AGENT, "MyApp/1.0".parse()?);
//!
//! let downloader = DownloaderBuilder::new()
//!     .headers(headers)
//!     .on_complete(|summary| {
//!         if !summary.is_success() {
//!             eprintln!("{} did not complete", summary.download().url);
//!         }
//!     })
//!     .build();
//! # Ok(())
//! # }
//! ```

use super::{config::DownloaderConfig, downloader::Downloader};
use crate::download::Summary;
use crate::http::WebGetter;
use crate::printer::Printer;

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::{path::PathBuf, sync::Arc, time::Duration};

/// A builder used to create a [`Downloader`].
///
/// ```rust
/// # fn main()  {
/// use multiget::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().directory("downloads".into()).build();
/// # }
/// ```
#[derive(Default)]
pub struct DownloaderBuilder {
    config: DownloaderConfig,
}

impl DownloaderBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        DownloaderBuilder::default()
    }

    /// Sets the directory where to store the downloads.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Routes the default HTTP transport through a proxy.
    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Set the chunk size used before the first throughput measurement.
    pub fn initial_chunk_size(mut self, initial_chunk_size: u64) -> Self {
        self.config.initial_chunk_size = initial_chunk_size;
        self
    }

    /// Set how many chunks per second of throughput the pacing aims for.
    pub fn chunks_per_second(mut self, chunks_per_second: u64) -> Self {
        self.config.chunks_per_second = chunks_per_second;
        self
    }

    /// Set the interval between two status table rows.
    pub fn tick_interval(mut self, tick_interval: Duration) -> Self {
        self.config.tick_interval = tick_interval;
        self
    }

    /// Replace the HTTP transport.
    ///
    /// Headers and proxy settings only apply to the default transport.
    pub fn web_getter<G>(mut self, web_getter: G) -> Self
    where
        G: WebGetter + 'static,
    {
        self.config.web_getter = Some(Arc::new(web_getter));
        self
    }

    /// Replace the console output sink.
    pub fn printer<P>(mut self, printer: P) -> Self
    where
        P: Printer + 'static,
    {
        self.config.printer = Arc::new(printer);
        self
    }

    /// Set callback for when each download completes.
    ///
    /// The callback runs on the download's own task, right before it signals
    /// completion, whether the download succeeded or not.
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Summary) + Send + Sync + 'static,
    {
        self.config.on_complete = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Helper method to get or create a new HeaderMap.
    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// You can call `.headers()` multiple times and all `HeaderMap` will be
    /// merged into a single one.
    ///
    /// # Example
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue, HeaderMap};
    /// use multiget::downloader::DownloaderBuilder;
    ///
    /// let ua = HeaderValue::from_str("curl/7.87").expect("Invalid UA");
    ///
    /// let builder = DownloaderBuilder::new()
    ///     .headers(HeaderMap::from_iter([(header::USER_AGENT, ua)]))
    ///     .build();
    /// ```
    ///
    /// See also [`header()`].
    ///
    /// [`header()`]: DownloaderBuilder::header
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add the http header
    ///
    /// See also [`headers()`].
    ///
    /// [`headers()`]: DownloaderBuilder::headers
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`Downloader`] with the specified options.
    pub fn build(self) -> Downloader {
        Downloader::new(self.config)
    }
}
