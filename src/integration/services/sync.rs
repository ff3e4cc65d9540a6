//! Connection tracking and lead sync orchestration.

use crate::board::{
    ports::KeyValueStorage,
    services::{BoardServiceError, BoardStore},
};
use crate::import::FieldMapping;
use crate::integration::{
    domain::{ConnectionStatus, CrmProvider, SyncSummary},
    ports::{ConnectorError, CrmConnector},
};
use crate::notification::{domain::Notification, ports::Notifier};
use mockable::Clock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for integration operations.
#[derive(Debug, Error)]
pub enum IntegrationError {
    /// No connector is registered for the provider.
    #[error("no connector registered for {0}")]
    UnknownProvider(CrmProvider),

    /// The provider must be connected before syncing.
    #[error("{0} is not connected")]
    NotConnected(CrmProvider),

    /// The connector failed.
    #[error(transparent)]
    Connector(#[from] ConnectorError),

    /// The board rejected the imported leads.
    #[error(transparent)]
    Store(#[from] BoardServiceError),
}

/// Result type for integration service operations.
pub type IntegrationResult<T> = Result<T, IntegrationError>;

/// Tracks provider connections and syncs their records into a board.
///
/// Failures are reported once through the notifier and recorded as
/// [`ConnectionStatus::Failed`]; nothing is retried.
pub struct IntegrationService<N>
where
    N: Notifier,
{
    connectors: HashMap<CrmProvider, Arc<dyn CrmConnector>>,
    statuses: HashMap<CrmProvider, ConnectionStatus>,
    notifier: Arc<N>,
}

impl<N> IntegrationService<N>
where
    N: Notifier,
{
    /// Creates a service with no connectors.
    #[must_use]
    pub fn new(notifier: Arc<N>) -> Self {
        Self {
            connectors: HashMap::new(),
            statuses: HashMap::new(),
            notifier,
        }
    }

    /// Registers a connector, replacing any connector for the same
    /// provider. The provider starts disconnected.
    pub fn register(&mut self, connector: Arc<dyn CrmConnector>) {
        let provider = connector.provider();
        self.connectors.insert(provider, connector);
        self.statuses.insert(provider, ConnectionStatus::Disconnected);
    }

    /// Returns the registered providers in canonical order.
    #[must_use]
    pub fn providers(&self) -> Vec<CrmProvider> {
        CrmProvider::ALL
            .into_iter()
            .filter(|provider| self.connectors.contains_key(provider))
            .collect()
    }

    /// Returns the connection status of a provider.
    #[must_use]
    pub fn status(&self, provider: CrmProvider) -> ConnectionStatus {
        self.statuses.get(&provider).cloned().unwrap_or_default()
    }

    /// Connects to a provider.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationError::UnknownProvider`] when no connector is
    /// registered and [`IntegrationError::Connector`] when the attempt
    /// fails.
    pub async fn connect(&mut self, provider: CrmProvider) -> IntegrationResult<()> {
        let connector = self.connector(provider)?;
        self.statuses.insert(provider, ConnectionStatus::Connecting);
        match connector.connect().await {
            Ok(()) => {
                self.statuses.insert(provider, ConnectionStatus::Connected);
                info!(%provider, "provider connected");
                self.notifier.notify(Notification::success(
                    format!("{provider} connected"),
                    "Ready to sync leads.",
                ));
                Ok(())
            }
            Err(err) => Err(self.record_failure(provider, "Connection failed", err)),
        }
    }

    /// Marks a provider as disconnected.
    pub fn disconnect(&mut self, provider: CrmProvider) {
        if self.connectors.contains_key(&provider) {
            self.statuses.insert(provider, ConnectionStatus::Disconnected);
            info!(%provider, "provider disconnected");
        }
    }

    /// Fetches the provider's records and imports them into the board.
    ///
    /// `mapping` overrides the provider's default field mapping. Every
    /// imported lead is stamped with the provider as its source.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationError::NotConnected`] unless the provider is
    /// connected, [`IntegrationError::Connector`] when fetching fails and
    /// [`IntegrationError::Store`] when the board cannot persist the import.
    pub async fn sync<S, C>(
        &mut self,
        store: &mut BoardStore<S, C>,
        provider: CrmProvider,
        mapping: Option<&FieldMapping>,
    ) -> IntegrationResult<SyncSummary>
    where
        S: KeyValueStorage,
        C: Clock + Send + Sync,
    {
        let connector = self.connector(provider)?;
        if !self.status(provider).is_connected() {
            return Err(IntegrationError::NotConnected(provider));
        }

        let records = match connector.fetch_records().await {
            Ok(records) => records,
            Err(err) => return Err(self.record_failure(provider, "Sync failed", err)),
        };
        let default_mapping = provider.default_mapping();
        let active_mapping = mapping.unwrap_or(&default_mapping);
        let imported = active_mapping.apply_all(&records).into_iter().map(|mut lead| {
            lead.source = Some(provider.lead_source());
            lead
        });
        let report = match store.import_leads(imported) {
            Ok(report) => report,
            Err(err) => return Err(self.record_failure(provider, "Sync failed", err)),
        };

        let summary = SyncSummary {
            provider,
            fetched: records.len(),
            created: report.created.len(),
            skipped: report.skipped.len(),
        };
        info!(%provider, fetched = summary.fetched, created = summary.created, "provider synced");
        self.notifier.notify(Notification::success(
            format!("{provider} synced"),
            format!("Imported {} of {} records.", summary.created, summary.fetched),
        ));
        Ok(summary)
    }

    fn connector(&self, provider: CrmProvider) -> IntegrationResult<Arc<dyn CrmConnector>> {
        self.connectors
            .get(&provider)
            .cloned()
            .ok_or(IntegrationError::UnknownProvider(provider))
    }

    fn record_failure<E>(&mut self, provider: CrmProvider, title: &str, err: E) -> IntegrationError
    where
        E: fmt::Display + Into<IntegrationError>,
    {
        warn!(%provider, error = %err, "{title}");
        self.statuses.insert(
            provider,
            ConnectionStatus::Failed {
                reason: err.to_string(),
            },
        );
        self.notifier
            .notify(Notification::error(format!("{provider}: {title}"), err.to_string()));
        err.into()
    }
}
