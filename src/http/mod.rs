//! HTTP module containing the transport used by the downloader.
//!
//! # Overview
//!
//! - [`client`] - HTTP client creation and middleware configuration
//! - [`getter`] - The [`WebGetter`] transport seam and its HTTP implementation
//!
//! # Examples
//!
//! ```rust,no_run
//! use multiget::http::{HttpClientConfig, HttpWebGetter, WebGetter};
//! use tokio::io::AsyncReadExt;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let getter = HttpWebGetter::new(HttpClientConfig::default())?;
//! let mut fetched = getter.get("https://httpbin.org/bytes/16").await?;
//!
//! let mut bytes = Vec::new();
//! fetched.body.read_to_end(&mut bytes).await?;
//! println!("{} of {} bytes", bytes.len(), fetched.content_length);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod getter;

pub use client::{create_http_client, HttpClientConfig};
pub use getter::{Body, Fetched, HttpWebGetter, WebGetter};
