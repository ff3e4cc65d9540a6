//! Translation of hover targets into board mutations.

use super::geometry::{SlotRect, resolve_insertion_index};
use crate::board::{
    domain::{Board, LeadId, LeadStatus},
    services::{BoardServiceError, MoveLead},
};
use thiserror::Error;

/// What the pointer is currently over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget<'a> {
    /// The card list of a column.
    Cards {
        /// Column under the pointer.
        column: LeadStatus,
        /// Pointer vertical position.
        pointer_y: i32,
        /// Rendered rectangles of the column's cards in display order.
        slots: &'a [SlotRect],
    },
    /// An empty column or the area past its last card.
    ColumnEnd(LeadStatus),
}

impl HoverTarget<'_> {
    /// Returns the column under the pointer.
    #[must_use]
    pub const fn column(&self) -> LeadStatus {
        match self {
            Self::Cards { column, .. } | Self::ColumnEnd(column) => *column,
        }
    }
}

/// Board mutation resolved from a hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPlan {
    /// Reorder within one column.
    Reorder {
        /// Column being reordered.
        column: LeadStatus,
        /// Current index of the dragged lead.
        from: usize,
        /// Index the lead ends up at.
        to: usize,
    },
    /// Move into another column.
    Move(MoveLead),
}

/// Errors raised while resolving or applying a drag.
#[derive(Debug, Error)]
pub enum DragError {
    /// The dragged lead is not listed in any column.
    #[error("dragged lead {0} is not on the board")]
    LeadNotOnBoard(LeadId),

    /// The supplied card rectangles do not match the column contents.
    #[error("layout for '{column}' has {actual} slots for {expected} leads")]
    StaleLayout {
        /// Column whose layout was supplied.
        column: LeadStatus,
        /// Number of leads in the column.
        expected: usize,
        /// Number of rectangles supplied.
        actual: usize,
    },

    /// The board store rejected the mutation.
    #[error(transparent)]
    Store(#[from] BoardServiceError),
}

/// Resolves the mutation a hover over `target` implies for `lead_id`.
///
/// Returns `None` when the lead would stay where it is.
///
/// # Errors
///
/// Returns [`DragError::LeadNotOnBoard`] when the lead is not in any column
/// and [`DragError::StaleLayout`] when `slots` does not match the column.
pub fn plan_drop(
    board: &Board,
    lead_id: LeadId,
    target: HoverTarget<'_>,
) -> Result<Option<DropPlan>, DragError> {
    let (source, source_index) = board
        .locate(lead_id)
        .ok_or(DragError::LeadNotOnBoard(lead_id))?;
    let destination = target.column();
    let dest_len = board.column(destination).map_or(0, |column| column.len());
    let same_column = source == destination;

    let dest_index = match target {
        HoverTarget::Cards {
            pointer_y, slots, ..
        } => {
            if slots.len() != dest_len {
                return Err(DragError::StaleLayout {
                    column: destination,
                    expected: dest_len,
                    actual: slots.len(),
                });
            }
            let skip = same_column.then_some(source_index);
            resolve_insertion_index(slots, pointer_y, skip)
        }
        HoverTarget::ColumnEnd(_) if same_column => dest_len.saturating_sub(1),
        HoverTarget::ColumnEnd(_) => dest_len,
    };

    if same_column {
        return Ok((dest_index != source_index).then_some(DropPlan::Reorder {
            column: source,
            from: source_index,
            to: dest_index,
        }));
    }

    Ok(Some(DropPlan::Move(MoveLead {
        source,
        destination,
        source_index,
        dest_index,
        lead_id,
    })))
}
