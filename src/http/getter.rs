//! Transport abstraction and its HTTP implementation.

use super::client::{create_http_client, HttpClientConfig};
use crate::error::Result;
use crate::utils::content_length::get_content_length;

use futures::future::BoxFuture;
use futures::TryStreamExt;
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::io;
use tokio::io::AsyncRead;
use tokio_util::io::StreamReader;
use tracing::debug;

/// Readable body of a transfer. Dropping it closes the underlying stream.
pub type Body = Box<dyn AsyncRead + Send + Unpin>;

/// An opened transfer.
pub struct Fetched {
    /// The byte stream.
    pub body: Body,
    /// Declared size in bytes. 0 means unknown or empty.
    pub content_length: u64,
}

impl fmt::Debug for Fetched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fetched")
            .field("content_length", &self.content_length)
            .finish_non_exhaustive()
    }
}

/// Provides a data stream for a URL.
pub trait WebGetter: Send + Sync {
    /// Opens the transfer for `url`.
    ///
    /// Any failure to establish the transfer (network, DNS, HTTP status) is
    /// reported as an error.
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Fetched>>;
}

/// [`WebGetter`] backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpWebGetter {
    client: ClientWithMiddleware,
}

impl HttpWebGetter {
    /// Creates a getter with a client built from `config`.
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        Ok(Self::with_client(create_http_client(config)?))
    }

    /// Creates a getter around an existing client.
    pub fn with_client(client: ClientWithMiddleware) -> Self {
        Self { client }
    }
}

impl WebGetter for HttpWebGetter {
    fn get<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Fetched>> {
        Box::pin(async move {
            debug!("Fetching {}", url);
            let response = self.client.get(url).send().await?.error_for_status()?;
            let content_length = get_content_length(response.headers());

            let stream = response.bytes_stream().map_err(io::Error::other);
            let body: Body = Box::new(StreamReader::new(Box::pin(stream)));

            Ok(Fetched {
                body,
                content_length,
            })
        })
    }
}
