//! Named Result Cache
//!
//! Maps a caller-chosen key to a previously computed count.

use std::collections::HashMap;

use parking_lot::RwLock;

// == Result Cache ==
/// Thread-safe store of named counts.
///
/// The cache trusts its callers: reusing a key for a different query returns
/// the stale count.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: RwLock<HashMap<String, usize>>,
}

impl ResultCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the count stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<usize> {
        self.entries.read().get(key).copied()
    }

    /// Stores `count` under `key`, replacing any previous value.
    pub fn insert(&self, key: &str, count: usize) {
        self.entries.write().insert(key.to_owned(), count);
    }

    /// Removes every entry and returns how many there were.
    pub fn clear(&self) -> usize {
        let mut entries = self.entries.write();
        let removed = entries.len();
        entries.clear();
        removed
    }

    /// Returns the number of stored counts.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if no counts are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
