//! In-memory adapters.

mod storage;

pub use storage::InMemoryStorage;
