//! multiget command line: downloads every URL given as argument into the
//! current directory (or `--dir`) and prints the percentage table.

use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use multiget::DownloaderBuilder;
use reqwest::header::{HeaderName, HeaderValue};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "multiget",
    version,
    about = "Download files over HTTP concurrently with a live percentage table"
)]
struct Cli {
    /// URLs to download. Repeated URLs are downloaded once.
    #[arg(required = true, value_name = "URL")]
    urls: Vec<String>,

    /// Directory to save the files in (defaults to the current directory)
    #[arg(short = 'd', long = "dir")]
    directory: Option<PathBuf>,

    /// Extra request header, as `Name: value`. May be repeated.
    #[arg(short = 'H', long = "header", value_name = "HEADER")]
    headers: Vec<String>,
}

fn parse_header(header: &str) -> Result<(HeaderName, HeaderValue)> {
    let (name, value) = header
        .split_once(':')
        .ok_or_else(|| eyre!("header {:?} is not in `Name: value` form", header))?;
    let name = HeaderName::from_bytes(name.trim().as_bytes())
        .wrap_err_with(|| format!("invalid header name in {:?}", header))?;
    let value = HeaderValue::from_str(value.trim())
        .wrap_err_with(|| format!("invalid header value in {:?}", header))?;
    Ok((name, value))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so they never mix with the table on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut builder = DownloaderBuilder::new();
    if let Some(directory) = cli.directory {
        builder = builder.directory(directory);
    }
    for header in &cli.headers {
        let (name, value) = parse_header(header)?;
        builder = builder.header(name, value);
    }

    // Individual failures are already reported on stderr.
    builder.build().download(&cli.urls).await?;

    Ok(())
}
