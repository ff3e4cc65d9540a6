//! Domain model for CRM integrations.

mod provider;
mod status;

pub use provider::{CrmProvider, ParseCrmProviderError};
pub use status::{ConnectionStatus, SyncSummary};
