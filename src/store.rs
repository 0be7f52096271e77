//! In-memory key-value store.
//!
//! A string-to-string map behind an RwLock so that concurrent connection
//! threads observe each PUT/GET/DELETE atomically. Contents live exactly as
//! long as the owning process; there is no persistence.

use std::collections::HashMap;

use parking_lot::RwLock;

/// Shared map of string keys to string values.
///
/// Keys are unique. PUT inserts or overwrites, DELETE removes; no ordering
/// is exposed.
#[derive(Debug, Default)]
pub struct Store {
    entries: RwLock<HashMap<String, String>>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a key. Returns the previous value if the key
    /// already existed.
    pub fn put(&self, key: String, value: String) -> Option<String> {
        self.entries.write().insert(key, value)
    }

    /// Look up a key, cloning the stored value.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    /// Remove a key. Returns the removed value if the key existed.
    pub fn delete(&self, key: &str) -> Option<String> {
        self.entries.write().remove(key)
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
