//! Shared per-URL download percentages.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Thread-safe mapping from URL to the downloaded percentage (0-100).
///
/// Clones share the same underlying map. Writers only ever touch their own
/// URL; readers get a copy so they never observe a map mid-update.
#[derive(Debug, Clone, Default)]
pub struct ProgressRegistry {
    percentages: Arc<RwLock<HashMap<String, u8>>>,
}

impl ProgressRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or updates the percentage for `url`.
    pub fn set(&self, url: &str, percent: u8) {
        // Entries are plain integers, a poisoned lock cannot hold a torn value.
        let mut percentages = self
            .percentages
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        percentages.insert(url.to_string(), percent);
    }

    /// Returns a copy of all percentages.
    pub fn snapshot(&self) -> HashMap<String, u8> {
        self.percentages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
