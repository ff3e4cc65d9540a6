//! Application services for board state and team management.

mod error;
mod store;
mod team;

pub use error::{BoardServiceError, BoardServiceResult};
pub use store::{BoardStore, DEFAULT_BOARD_KEY, ImportReport, MoveLead, SkippedRecord};
pub use team::{DEFAULT_TEAM_KEY, TeamDirectory};
