//! Connection state and sync outcomes.

use super::CrmProvider;

/// Connection state of one provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Not connected.
    #[default]
    Disconnected,
    /// A connection attempt is in flight.
    Connecting,
    /// Connected and ready to sync.
    Connected,
    /// The last connect or sync failed. No retry is scheduled.
    Failed {
        /// Failure description shown to the user.
        reason: String,
    },
}

impl ConnectionStatus {
    /// Returns `true` when syncing is allowed.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

/// Result of syncing one provider into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSummary {
    /// Provider that was synced.
    pub provider: CrmProvider,
    /// Records returned by the provider.
    pub fetched: usize,
    /// Leads created on the board.
    pub created: usize,
    /// Records rejected for missing required fields.
    pub skipped: usize,
}
