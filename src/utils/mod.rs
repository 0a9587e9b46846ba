//! Shared utility functions.
//!
//! # Overview
//!
//! - [`content_length`] - Content length extraction from HTTP headers

pub mod content_length;

pub use content_length::{get_content_length, parse_content_length};
