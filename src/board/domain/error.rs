//! Error types for board domain validation and parsing.

use super::{LeadId, LeadStatus, TeamMemberId};
use thiserror::Error;

/// Errors returned while mutating or validating board state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// No lead with the identifier exists.
    #[error("lead not found: {0}")]
    LeadNotFound(LeadId),

    /// No team member with the identifier exists.
    #[error("team member not found: {0}")]
    TeamMemberNotFound(TeamMemberId),

    /// The lead name is empty after trimming.
    #[error("lead name must not be empty")]
    EmptyLeadName,

    /// The lead company is empty after trimming.
    #[error("lead company must not be empty")]
    EmptyCompany,

    /// The team member name is empty after trimming.
    #[error("team member name must not be empty")]
    EmptyMemberName,

    /// The team member email is empty after trimming.
    #[error("team member email must not be empty")]
    EmptyMemberEmail,

    /// A column index lies outside the column's bounds.
    #[error("index {index} out of bounds for column '{column}' of length {len}")]
    IndexOutOfBounds {
        /// Column the index was applied to.
        column: LeadStatus,
        /// Offending index.
        index: usize,
        /// Column length at the time of the call.
        len: usize,
    },

    /// The lead at the given source position is not the lead being moved.
    #[error("lead {lead_id} is not at index {index} of column '{column}'")]
    LeadPositionMismatch {
        /// Lead the caller asked to move.
        lead_id: LeadId,
        /// Column the caller named as the source.
        column: LeadStatus,
        /// Index the caller named as the source.
        index: usize,
    },

    /// A lead appears in a column other than the one matching its status,
    /// in more than one column, or in none.
    #[error("lead {lead_id} is misplaced: {detail}")]
    InconsistentPlacement {
        /// Lead whose placement is wrong.
        lead_id: LeadId,
        /// What is wrong with the placement.
        detail: String,
    },

    /// A column lists an identifier that has no lead record.
    #[error("column '{column}' lists unknown lead {lead_id}")]
    OrphanedLeadId {
        /// Column containing the identifier.
        column: LeadStatus,
        /// Identifier without a record.
        lead_id: LeadId,
    },

    /// The priority value is unsupported.
    #[error("unsupported priority: {0}")]
    InvalidPriority(String),

    /// The lead source value is unsupported.
    #[error("unsupported lead source: {0}")]
    InvalidLeadSource(String),
}

/// Error returned while parsing lead statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown lead status: {0}")]
pub struct ParseLeadStatusError(pub String);
