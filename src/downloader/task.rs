//! A single URL's transfer, from registration to the final rename.

use super::config::DownloadCallback;
use super::pacer::ChunkPacer;
use crate::download::{Download, Status, Summary};
use crate::http::{Body, WebGetter};
use crate::printer::Printer;
use crate::progress::ProgressRegistry;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Size of the buffer a chunk is copied through.
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Everything a download task shares with its siblings.
#[derive(Clone)]
pub(crate) struct DownloadTask {
    pub(crate) web_getter: Arc<dyn WebGetter>,
    pub(crate) printer: Arc<dyn Printer>,
    pub(crate) registry: ProgressRegistry,
    pub(crate) directory: PathBuf,
    pub(crate) initial_chunk_size: u64,
    pub(crate) chunks_per_second: u64,
    pub(crate) on_complete: Option<Arc<DownloadCallback>>,
}

/// How copying a chunk ended.
#[derive(Debug)]
enum ChunkEnd {
    /// The chunk was filled, more data may follow.
    Filled,
    /// The stream has no more data.
    Eof,
    /// Reading the stream failed.
    ReadFailed(io::Error),
    /// Writing the file failed.
    WriteFailed(io::Error),
}

/// Runs a blocking filesystem call off the async workers.
async fn blocking<T, F>(f: F) -> io::Result<T>
where
    F: FnOnce() -> io::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(io::Error::other)?
}

impl DownloadTask {
    /// Downloads `download` and signals its summary on `done`.
    ///
    /// Exactly one summary is sent, whatever step fails.
    pub(crate) async fn run(self, download: Download, done: oneshot::Sender<Summary>) {
        let summary = self.fetch(&download).await;

        if let Some(ref callback) = self.on_complete {
            callback(&summary);
        }

        // The receiver only goes away if the orchestrator itself is gone.
        let _ = done.send(summary);
    }

    /// Fetches the file and writes it to disk.
    async fn fetch(&self, download: &Download) -> Summary {
        let url = download.url.as_str();
        let summary = Summary::new(download.clone(), 0, 0);

        self.registry.set(url, 0);

        debug!("Staging temporary file for {}", download.filename);
        let prefix = download.filename.clone();
        let directory = self.directory.clone();
        let staged = match blocking(move || {
            tempfile::Builder::new()
                .prefix(&prefix)
                .tempfile_in(&directory)
        })
        .await
        {
            Ok(staged) => staged,
            Err(e) => {
                self.printer.eprint(format_args!(
                    "Unable to create temporary file {}: {}\n",
                    download.filename, e
                ));
                return summary.fail(e);
            }
        };
        let (file, temp_path) = staged.into_parts();
        let mut file = tokio::fs::File::from_std(file);

        let fetched = match self.web_getter.get(url).await {
            Ok(fetched) => fetched,
            Err(e) => {
                self.printer
                    .eprint(format_args!("Unable to download URL {}: {}\n", url, e));
                return summary.fail(e);
            }
        };
        let content_length = fetched.content_length;
        let mut body = fetched.body;

        if content_length == 0 {
            self.registry.set(url, 100);
        }

        let (received, end) = self
            .transfer(url, &mut body, &mut file, content_length)
            .await;
        drop(body);

        let destination = self.directory.join(&download.filename);
        if let Err(e) = file.flush().await {
            self.printer.eprint(format_args!(
                "Unable to write {}: {}\n",
                temp_path.display(),
                e
            ));
            return Summary::new(download.clone(), received, content_length).fail(e);
        }
        drop(file.into_std().await);

        debug!("Renaming {} to {}", temp_path.display(), destination.display());
        let temp_display = temp_path.display().to_string();
        let target = destination.clone();
        // A failed persist hands the temp path back; dropping it removes the file.
        if let Err(e) = blocking(move || temp_path.persist(&target).map_err(|e| e.error)).await {
            self.printer.eprint(format_args!(
                "Unable to rename {} to {}: {}\n",
                temp_display,
                destination.display(),
                e
            ));
            return Summary::new(download.clone(), received, content_length).fail(e);
        }

        settle(Summary::new(download.clone(), received, content_length), end)
    }

    /// Copies the stream into `file` in adaptively sized chunks.
    ///
    /// Returns the number of bytes copied and how the last chunk ended, which
    /// is never [`ChunkEnd::Filled`].
    async fn transfer(
        &self,
        url: &str,
        body: &mut Body,
        file: &mut tokio::fs::File,
        content_length: u64,
    ) -> (u64, ChunkEnd) {
        let mut pacer = ChunkPacer::new(self.initial_chunk_size, self.chunks_per_second);
        let mut buf = vec![0u8; COPY_BUFFER_SIZE];
        let mut received: u64 = 0;

        debug!("Retrieving chunks...");
        loop {
            let (copied, end) = copy_chunk(body, file, pacer.chunk_len(), &mut buf).await;
            received += copied;

            if content_length > 0 {
                let percent = (received.saturating_mul(100) / content_length).min(100);
                self.registry.set(url, percent as u8);
            }

            if let Some(chunk_len) = pacer.record(copied) {
                debug!(url, chunk_len, "Chunk size adjusted");
            }

            match end {
                ChunkEnd::Filled => continue,
                ChunkEnd::Eof => return (received, ChunkEnd::Eof),
                ChunkEnd::ReadFailed(e) => {
                    warn!(url, error = %e, "Stream read failed");
                    return (received, ChunkEnd::ReadFailed(e));
                }
                ChunkEnd::WriteFailed(e) => {
                    warn!(url, error = %e, "File write failed");
                    return (received, ChunkEnd::WriteFailed(e));
                }
            }
        }
    }
}

/// Copies up to `limit` bytes from `reader` to `writer` through `buf`.
///
/// The byte count is reported even when the copy stops on an error.
async fn copy_chunk<R, W>(
    reader: &mut R,
    writer: &mut W,
    limit: u64,
    buf: &mut [u8],
) -> (u64, ChunkEnd)
where
    R: AsyncRead + Unpin + ?Sized,
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut copied: u64 = 0;
    while copied < limit {
        let want = buf.len().min((limit - copied).try_into().unwrap_or(usize::MAX));
        let n = match reader.read(&mut buf[..want]).await {
            Ok(0) => return (copied, ChunkEnd::Eof),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return (copied, ChunkEnd::ReadFailed(e)),
        };
        if let Err(e) = writer.write_all(&buf[..n]).await {
            return (copied, ChunkEnd::WriteFailed(e));
        }
        copied += n as u64;
    }
    (copied, ChunkEnd::Filled)
}

/// Decides how a job that reached its destination ended.
///
/// A file that could not be written is always a failure. Otherwise the job
/// succeeds when the declared length arrived, or when no length was declared.
fn settle(summary: Summary, end: ChunkEnd) -> Summary {
    let (received, content_length) = (summary.size(), summary.content_length());
    match end {
        ChunkEnd::WriteFailed(e) => summary.fail(e),
        _ if content_length == 0 || received == content_length => {
            summary.with_status(Status::Success)
        }
        ChunkEnd::ReadFailed(e) => summary.fail(e),
        ChunkEnd::Filled | ChunkEnd::Eof => summary.fail(format!(
            "received {} of {} bytes",
            received, content_length
        )),
    }
}
