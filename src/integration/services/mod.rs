//! Application services for CRM integrations.

mod sync;

pub use sync::{IntegrationError, IntegrationResult, IntegrationService};
