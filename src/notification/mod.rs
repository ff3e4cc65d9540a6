//! User-facing notifications ("toasts").
//!
//! Services that need to surface outcomes receive a [`ports::Notifier`]
//! explicitly instead of reaching for a global.

pub mod adapters;
pub mod domain;
pub mod ports;
