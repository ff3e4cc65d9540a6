//! Connector adapters.

mod fixtures;
mod mock;

pub use mock::MockConnector;
