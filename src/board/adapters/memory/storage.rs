//! In-memory key-value storage for tests and embedded use.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::ports::{KeyValueStorage, StorageError, StorageResult};

/// Thread-safe in-memory storage. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    state: Arc<RwLock<InMemoryStorageState>>,
}

#[derive(Debug, Default)]
struct InMemoryStorageState {
    items: HashMap<String, String>,
    reject_writes: bool,
}

impl InMemoryStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent writes fail (or succeed again), simulating a full
    /// or unavailable backend.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when lock acquisition fails.
    pub fn set_reject_writes(&self, reject: bool) -> StorageResult<()> {
        let mut state = self.state.write().map_err(|err| {
            StorageError::backend(std::io::Error::other(err.to_string()))
        })?;
        state.reject_writes = reject;
        Ok(())
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let state = self.state.read().map_err(|err| {
            StorageError::backend(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut state = self.state.write().map_err(|err| {
            StorageError::backend(std::io::Error::other(err.to_string()))
        })?;
        if state.reject_writes {
            return Err(StorageError::backend(std::io::Error::other(
                "storage quota exceeded",
            )));
        }
        state.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        let mut state = self.state.write().map_err(|err| {
            StorageError::backend(std::io::Error::other(err.to_string()))
        })?;
        state.items.remove(key);
        Ok(())
    }
}
