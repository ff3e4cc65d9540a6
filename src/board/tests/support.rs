//! Shared fixtures for board tests.

use std::sync::{Arc, RwLock};

use crate::board::{
    adapters::memory::InMemoryStorage,
    services::{BoardStore, DEFAULT_BOARD_KEY},
};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub(super) struct SteppedClock {
    now: Arc<RwLock<DateTime<Utc>>>,
}

impl SteppedClock {
    pub(super) fn new() -> Self {
        let start = Utc
            .with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
            .single()
            .expect("valid start time");
        Self {
            now: Arc::new(RwLock::new(start)),
        }
    }

    pub(super) fn advance(&self, seconds: i64) {
        let mut now = self.now.write().expect("clock lock");
        *now += Duration::seconds(seconds);
    }
}

impl Clock for SteppedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.read().expect("clock lock")
    }
}

pub(super) type TestStore = BoardStore<InMemoryStorage, SteppedClock>;

pub(super) fn open_store(storage: &Arc<InMemoryStorage>, clock: &SteppedClock) -> TestStore {
    BoardStore::open(Arc::clone(storage), Arc::new(clock.clone()), DEFAULT_BOARD_KEY)
        .expect("open board")
}
