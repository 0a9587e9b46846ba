#![allow(dead_code)]

use futures::future::BoxFuture;
use multiget::http::{Body, Fetched, HttpWebGetter, WebGetter};
use multiget::{DownloaderBuilder, Error, Printer};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;
use tempfile::TempDir;
use tokio::io::{AsyncRead, ReadBuf};

// Common test constants
pub const TEST_URL: &str = "http://example.com/test.out";
pub const TEST_TICK: Duration = Duration::from_millis(10);

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a file with the given content
pub fn create_temp_file(dir: &Path, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, content).expect("Failed to write temporary file");
    file_path
}

/// Creates a directory entry so that `name` is taken in `dir`
pub fn occupy(dir: &Path, name: &str) {
    fs::create_dir(dir.join(name)).expect("Failed to create directory");
}

/// Creates test content of roughly `size` bytes made of numbered lines
pub fn create_test_content(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size + 8);
    let mut line = 0;
    while data.len() < size {
        data.extend_from_slice(format!("{:7}\n", line).as_bytes());
        line += 1;
    }
    data
}

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Files in `dir`, sorted by name
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| {
            entry
                .expect("Failed to read entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

// === Printer ===

/// Printer collecting everything in memory.
#[derive(Debug, Clone, Default)]
pub struct BufferPrinter {
    stdout: Arc<Mutex<String>>,
    stderr: Arc<Mutex<String>>,
}

impl BufferPrinter {
    pub fn stdout(&self) -> String {
        self.stdout.lock().unwrap().clone()
    }

    pub fn stderr(&self) -> String {
        self.stderr.lock().unwrap().clone()
    }

    pub fn stdout_lines(&self) -> Vec<String> {
        self.stdout().lines().map(String::from).collect()
    }
}

impl Printer for BufferPrinter {
    fn print(&self, args: fmt::Arguments<'_>) {
        self.stdout.lock().unwrap().push_str(&args.to_string());
    }

    fn eprint(&self, args: fmt::Arguments<'_>) {
        self.stderr.lock().unwrap().push_str(&args.to_string());
    }
}

// === Transports ===

/// Serves fixed bytes for every URL, declaring `content_length`.
#[derive(Debug, Clone)]
pub struct MockWebGetter {
    pub data: Vec<u8>,
    pub content_length: u64,
}

impl MockWebGetter {
    /// Serves `data` with an accurate content length.
    pub fn new(data: Vec<u8>) -> Self {
        let content_length = data.len() as u64;
        Self {
            data,
            content_length,
        }
    }

    /// Serves `data` while declaring `content_length`.
    pub fn with_content_length(data: Vec<u8>, content_length: u64) -> Self {
        Self {
            data,
            content_length,
        }
    }
}

impl WebGetter for MockWebGetter {
    fn get<'a>(&'a self, _url: &'a str) -> BoxFuture<'a, Result<Fetched, Error>> {
        Box::pin(async move {
            let body: Body = Box::new(io::Cursor::new(self.data.clone()));
            Ok(Fetched {
                body,
                content_length: self.content_length,
            })
        })
    }
}

/// Fails every request.
#[derive(Debug, Clone, Default)]
pub struct FailingWebGetter;

impl WebGetter for FailingWebGetter {
    fn get<'a>(&'a self, _url: &'a str) -> BoxFuture<'a, Result<Fetched, Error>> {
        Box::pin(async move {
            Err(Error::from(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        })
    }
}

/// Serves `data` and then fails the read instead of reporting end-of-data.
#[derive(Debug, Clone)]
pub struct BrokenStreamWebGetter {
    pub data: Vec<u8>,
    pub content_length: u64,
}

impl WebGetter for BrokenStreamWebGetter {
    fn get<'a>(&'a self, _url: &'a str) -> BoxFuture<'a, Result<Fetched, Error>> {
        Box::pin(async move {
            let body: Body = Box::new(BrokenReader {
                data: io::Cursor::new(self.data.clone()),
            });
            Ok(Fetched {
                body,
                content_length: self.content_length,
            })
        })
    }
}

struct BrokenReader {
    data: io::Cursor<Vec<u8>>,
}

impl AsyncRead for BrokenReader {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let before = buf.filled().len();
        match Pin::new(&mut self.data).poll_read(cx, buf) {
            Poll::Ready(Ok(())) if buf.filled().len() == before => Poll::Ready(Err(
                io::Error::new(io::ErrorKind::ConnectionReset, "connection reset"),
            )),
            other => other,
        }
    }
}

// === Downloader Builder Helpers ===

/// Creates a downloader builder writing into `dir`, ticking fast, printing
/// into `printer`
pub fn create_test_downloader_builder(dir: &Path, printer: &BufferPrinter) -> DownloaderBuilder {
    DownloaderBuilder::new()
        .directory(dir.to_path_buf())
        .tick_interval(TEST_TICK)
        .printer(printer.clone())
}

// === Local HTTP server ===

/// Serves one canned HTTP response to every connection on a local port.
///
/// Returns the base URL, e.g. `http://127.0.0.1:41234`.
pub async fn serve_response(response: Vec<u8>) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind local listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    let response = Arc::new(response);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let response = response.clone();
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let _ = socket.write_all(&response).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}

/// Builds a `200 OK` response declaring the body's length.
pub fn ok_response(body: &[u8]) -> Vec<u8> {
    let mut response = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(body);
    response
}

/// Builds a `200 OK` response without a `Content-Length` header.
pub fn unsized_response(body: &[u8]) -> Vec<u8> {
    let mut response = b"HTTP/1.1 200 OK\r\nConnection: close\r\n\r\n".to_vec();
    response.extend_from_slice(body);
    response
}

/// Builds a response with the given status line and an empty body.
pub fn status_response(status: &str) -> Vec<u8> {
    format!(
        "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        status
    )
    .into_bytes()
}

/// A local URL nothing listens on.
pub async fn refused_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind local listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    format!("http://{}/refused.bin", addr)
}

/// HTTP transport that ignores any system proxy, for the local server.
pub fn local_web_getter() -> HttpWebGetter {
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build HTTP client");
    HttpWebGetter::with_client(reqwest_middleware::ClientBuilder::new(client).build())
}
