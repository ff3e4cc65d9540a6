//! Adapter implementations for board storage ports.

pub mod fs;
pub mod memory;
