//! Filesystem adapters.

mod storage;

pub use storage::FileStorage;
