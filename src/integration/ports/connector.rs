//! Connector port for fetching lead records from an external CRM.

use crate::import::JsonRecord;
use crate::integration::domain::CrmProvider;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for connector operations.
pub type ConnectorResult<T> = Result<T, ConnectorError>;

/// Access to one external CRM.
#[async_trait]
pub trait CrmConnector: Send + Sync {
    /// Returns the provider this connector talks to.
    fn provider(&self) -> CrmProvider;

    /// Establishes (or verifies) the connection.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError`] when the provider cannot be reached or
    /// rejects the credentials.
    async fn connect(&self) -> ConnectorResult<()>;

    /// Fetches lead records as raw key/value objects.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError`] when the records cannot be retrieved.
    async fn fetch_records(&self) -> ConnectorResult<Vec<JsonRecord>>;
}

/// Errors returned by connector adapters.
#[derive(Debug, Clone, Error)]
pub enum ConnectorError {
    /// The provider could not be reached.
    #[error("{provider} is unreachable: {reason}")]
    Unreachable {
        /// Provider that failed.
        provider: CrmProvider,
        /// Failure description.
        reason: String,
    },
}
