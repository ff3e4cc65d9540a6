//! Port contracts for board persistence.

pub mod storage;

pub use storage::{KeyValueStorage, StorageError, StorageResult};
