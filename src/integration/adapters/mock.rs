//! Simulated connectors returning fixture records after a delay.

use super::fixtures;
use crate::import::JsonRecord;
use crate::integration::{
    domain::CrmProvider,
    ports::{ConnectorError, ConnectorResult, CrmConnector},
};
use async_trait::async_trait;
use std::time::Duration;

/// Connector that serves canned records for one provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockConnector {
    provider: CrmProvider,
    latency: Duration,
    failure: Option<String>,
}

impl MockConnector {
    /// Creates a connector that succeeds after `latency`.
    #[must_use]
    pub const fn new(provider: CrmProvider, latency: Duration) -> Self {
        Self {
            provider,
            latency,
            failure: None,
        }
    }

    /// Makes every call fail with `reason` after the usual delay.
    #[must_use]
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    async fn simulate_round_trip(&self) -> ConnectorResult<()> {
        tokio::time::sleep(self.latency).await;
        match &self.failure {
            Some(reason) => Err(ConnectorError::Unreachable {
                provider: self.provider,
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CrmConnector for MockConnector {
    fn provider(&self) -> CrmProvider {
        self.provider
    }

    async fn connect(&self) -> ConnectorResult<()> {
        self.simulate_round_trip().await
    }

    async fn fetch_records(&self) -> ConnectorResult<Vec<JsonRecord>> {
        self.simulate_round_trip().await?;
        Ok(fixtures::records(self.provider))
    }
}
