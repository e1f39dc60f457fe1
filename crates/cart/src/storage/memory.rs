//! In-memory state storage.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::{StateStore, StorageError};

/// An in-memory [`StateStore`] backed by a shared map.
///
/// Clones share the same underlying entries, which lets a test hand a
/// handle to a [`crate::Cart`](crate::store::Cart) and later inspect what
/// was persisted, or reload a second cart from the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
