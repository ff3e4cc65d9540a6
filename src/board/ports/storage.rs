//! Key-value storage port, the persistence analogue of browser local
//! storage.

use std::sync::Arc;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// String-keyed document storage with whole-value writes.
///
/// Each `set_item` replaces the stored value in one step; readers never
/// observe a partially written document.
pub trait KeyValueStorage: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when nothing is stored under the key.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the backend cannot be read.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidKey`] for keys the backend cannot
    /// represent or [`StorageError::Backend`] when the write fails.
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes the value stored under `key`. Absent keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Backend`] when the removal fails.
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

/// Errors returned by storage adapters.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The key cannot be used with this backend.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// Backend failure.
    #[error("storage backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
