//! Content length extraction utilities.

use reqwest::header::{HeaderMap, CONTENT_LENGTH};

/// Extract the declared content length from response headers.
///
/// Returns 0 when the `Content-Length` header is missing or is not a valid
/// number, which the downloader treats as "unknown".
///
/// # Example
///
/// ```rust
/// use multiget::utils::get_content_length;
/// use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH};
///
/// let mut headers = HeaderMap::new();
/// assert_eq!(get_content_length(&headers), 0);
///
/// headers.insert(CONTENT_LENGTH, HeaderValue::from_static("2048"));
/// assert_eq!(get_content_length(&headers), 2048);
/// ```
pub fn get_content_length(headers: &HeaderMap) -> u64 {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_content_length)
        .unwrap_or(0)
}

/// Parse a `Content-Length` header value.
///
/// # Example
///
/// ```rust
/// use multiget::utils::parse_content_length;
///
/// assert_eq!(parse_content_length(" 1024 "), Some(1024));
/// assert_eq!(parse_content_length("-1"), None);
/// ```
pub fn parse_content_length(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}
