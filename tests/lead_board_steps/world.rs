//! Shared world state for lead board BDD scenarios.

use std::sync::Arc;
use std::time::Duration;

use leadboard::board::{
    adapters::memory::InMemoryStorage,
    domain::{Lead, LeadId, LeadStatus},
    services::{BoardStore, DEFAULT_BOARD_KEY},
};
use leadboard::integration::{
    adapters::MockConnector, domain::CrmProvider, services::IntegrationService,
};
use leadboard::notification::adapters::InMemoryNotifier;
use mockable::DefaultClock;
use rstest::fixture;

/// Store type used by the BDD world.
pub type TestStore = BoardStore<InMemoryStorage, DefaultClock>;

/// Scenario world for lead board behaviour tests.
pub struct BoardWorld {
    /// Storage shared by every store opened in the scenario.
    pub storage: Arc<InMemoryStorage>,
    /// The board store under test.
    pub store: TestStore,
    /// Integration service with an instant connector per provider.
    pub integrations: IntegrationService<InMemoryNotifier>,
    /// Error message of the last failed operation.
    pub last_error: Option<String>,
}

impl BoardWorld {
    /// Creates a world with an empty board.
    ///
    /// # Panics
    ///
    /// Panics if an empty in-memory board cannot be opened.
    #[must_use]
    pub fn new() -> Self {
        let storage = Arc::new(InMemoryStorage::new());
        let store = open_store(&storage).expect("open empty board");
        let mut integrations = IntegrationService::new(Arc::new(InMemoryNotifier::new()));
        for provider in CrmProvider::ALL {
            integrations.register(Arc::new(MockConnector::new(provider, Duration::ZERO)));
        }
        Self {
            storage,
            store,
            integrations,
            last_error: None,
        }
    }

    /// Returns the lead with the given name.
    ///
    /// # Errors
    ///
    /// Returns an error when no lead has that name.
    pub fn lead_named(&self, name: &str) -> Result<&Lead, eyre::Report> {
        self.store
            .leads()
            .find(|lead| lead.name() == name)
            .ok_or_else(|| eyre::eyre!("no lead named '{name}'"))
    }

    /// Returns the names listed in a column, in display order.
    #[must_use]
    pub fn column_names(&self, status: LeadStatus) -> Vec<String> {
        self.store
            .leads_in_column(status)
            .iter()
            .map(|lead| lead.name().to_owned())
            .collect()
    }

    /// Returns the identifier of the lead with the given name.
    ///
    /// # Errors
    ///
    /// Returns an error when no lead has that name.
    pub fn lead_id(&self, name: &str) -> Result<LeadId, eyre::Report> {
        self.lead_named(name).map(Lead::id)
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Opens a store over the shared storage.
///
/// # Errors
///
/// Returns an error if the stored board cannot be loaded.
pub fn open_store(storage: &Arc<InMemoryStorage>) -> Result<TestStore, eyre::Report> {
    BoardStore::open(Arc::clone(storage), Arc::new(DefaultClock), DEFAULT_BOARD_KEY)
        .map_err(|err| eyre::eyre!("open board failed: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a column name used in feature files.
///
/// # Errors
///
/// Returns an error for unknown column names.
pub fn parse_column(raw: &str) -> Result<LeadStatus, eyre::Report> {
    LeadStatus::try_from(raw).map_err(|err| eyre::eyre!("{err}"))
}

/// Splits a comma-separated list of names.
#[must_use]
pub fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parses a provider name used in feature files.
///
/// # Errors
///
/// Returns an error for unknown providers.
pub fn parse_provider(raw: &str) -> Result<CrmProvider, eyre::Report> {
    CrmProvider::try_from(raw).map_err(|err| eyre::eyre!("{err}"))
}
