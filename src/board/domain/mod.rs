//! Domain model for the lead board.
//!
//! Leads live in a keyed record store while the board keeps, per pipeline
//! stage, the display order of lead identifiers. A lead's status and the
//! column listing it must always agree.

mod board;
mod error;
mod ids;
mod lead;
mod team;

pub use board::{Board, BoardSnapshot, Column};
pub use error::{BoardDomainError, ParseLeadStatusError};
pub use ids::{LeadId, TeamMemberId};
pub use lead::{ImportedLead, Lead, LeadSource, LeadStatus, NewLead, Priority};
pub use team::{NewTeamMember, TeamMember};
