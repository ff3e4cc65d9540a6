//! Service-level errors and JSON document helpers shared by board services.

use crate::board::{
    domain::BoardDomainError,
    ports::{KeyValueStorage, StorageError},
};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Service-level errors for board and team operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Domain validation or lookup failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The document stored under a key could not be decoded.
    #[error("stored document '{key}' is malformed: {source}")]
    CorruptDocument {
        /// Storage key holding the document.
        key: String,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// A document could not be encoded for storage.
    #[error("failed to encode document '{key}': {source}")]
    Encode {
        /// Storage key the document was destined for.
        key: String,
        /// Encoding failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

pub(super) fn load_document<T, S>(storage: &S, key: &str) -> BoardServiceResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStorage + ?Sized,
{
    let Some(raw) = storage.get_item(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| BoardServiceError::CorruptDocument {
            key: key.to_owned(),
            source,
        })
}

pub(super) fn save_document<T, S>(storage: &S, key: &str, document: &T) -> BoardServiceResult<()>
where
    T: Serialize,
    S: KeyValueStorage + ?Sized,
{
    let encoded = serde_json::to_string(document).map_err(|source| BoardServiceError::Encode {
        key: key.to_owned(),
        source,
    })?;
    storage.set_item(key, &encoded)?;
    Ok(())
}
