//! Downloader module containing the orchestrator, its builder and configuration.
//!
//! # Overview
//!
//! - `downloader` - The [`Downloader`] polling loop driving one task per URL
//! - `builder` - [`DownloaderBuilder`] for configuring a downloader
//! - `config` - Configuration structure, tuning constants and callback type
//! - `task` - A single URL's transfer
//! - [`pacer`] - Throughput-based chunk sizing used by each transfer
//!
//! # Examples
//!
//! ```rust,no_run
//! use multiget::downloader::DownloaderBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = DownloaderBuilder::new().build();
//! let summaries = downloader
//!     .download(&["https://example.com/file1.zip", "https://example.com/file1.zip"])
//!     .await?;
//!
//! // Repeated URLs are downloaded once.
//! assert_eq!(summaries.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod downloader;
pub mod pacer;
pub(crate) mod task;

pub use builder::DownloaderBuilder;
pub use config::{
    DownloadCallback, DownloaderConfig, CHUNKS_PER_SECOND, INITIAL_CHUNK_SIZE,
    TABLE_UPDATE_INTERVAL,
};
pub use downloader::{dedup_urls, Downloader};
pub use pacer::ChunkPacer;
