//! Third-party CRM integrations.
//!
//! Connectors are simulated: each returns canned records after an
//! artificial delay. Syncing maps those records onto leads with a
//! per-provider [`FieldMapping`] and imports them into the board.
//!
//! [`FieldMapping`]: crate::import::FieldMapping

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
