//! Progress module containing progress tracking and display.
//!
//! # Overview
//!
//! - `registry` - Shared per-URL percentages written by the download tasks
//! - `table` - The console table that renders those percentages every tick
//!
//! # Examples
//!
//! ```rust
//! use multiget::progress::ProgressRegistry;
//!
//! let registry = ProgressRegistry::new();
//! registry.set("https://example.com/file.zip", 42);
//! assert_eq!(registry.snapshot()["https://example.com/file.zip"], 42);
//! ```

pub(crate) mod registry;
pub(crate) mod table;

pub use registry::ProgressRegistry;
pub use table::{StatusTable, StatusTableLayout};
