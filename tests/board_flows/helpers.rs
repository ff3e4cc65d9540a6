//! Shared test helpers for in-memory board flows.

use std::sync::Arc;

use leadboard::board::{
    adapters::memory::InMemoryStorage,
    domain::{LeadId, LeadStatus, NewLead},
    services::{BoardServiceResult, BoardStore, DEFAULT_BOARD_KEY},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Store type used by flow tests.
pub type TestStore = BoardStore<InMemoryStorage, DefaultClock>;

/// Provides a fresh in-memory storage backend for each test.
#[fixture]
pub fn storage() -> Arc<InMemoryStorage> {
    Arc::new(InMemoryStorage::new())
}

/// Opens a board over the given storage.
///
/// # Errors
///
/// Returns an error if the stored board cannot be loaded.
pub fn open(storage: &Arc<InMemoryStorage>) -> BoardServiceResult<TestStore> {
    BoardStore::open(Arc::clone(storage), Arc::new(DefaultClock), DEFAULT_BOARD_KEY)
}

/// Creates `count` leads in a column and returns their identifiers.
///
/// # Errors
///
/// Returns an error if any lead cannot be created.
pub fn seed(
    store: &mut TestStore,
    status: LeadStatus,
    count: usize,
) -> BoardServiceResult<Vec<LeadId>> {
    (0..count)
        .map(|n| {
            store
                .create_lead(NewLead::new(format!("{status} lead {n}"), "Acme").with_status(status))
                .map(|lead| lead.id())
        })
        .collect()
}

/// Returns the identifiers listed in a column.
#[must_use]
pub fn column_ids(store: &TestStore, status: LeadStatus) -> Vec<LeadId> {
    store
        .board()
        .column(status)
        .map(|column| column.lead_ids().to_vec())
        .unwrap_or_default()
}
