//! Board aggregate: fixed stage columns holding ordered lead identifiers.

use super::{BoardDomainError, Lead, LeadId, LeadStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One pipeline stage and the display order of its leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    id: LeadStatus,
    title: String,
    lead_ids: Vec<LeadId>,
}

impl Column {
    /// Creates an empty column for a stage using its default title.
    #[must_use]
    pub fn new(id: LeadStatus) -> Self {
        Self {
            id,
            title: id.title().to_owned(),
            lead_ids: Vec::new(),
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> LeadStatus {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the lead identifiers in display order.
    #[must_use]
    pub fn lead_ids(&self) -> &[LeadId] {
        &self.lead_ids
    }

    /// Returns the number of leads in the column.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.lead_ids.len()
    }

    /// Returns `true` when the column holds no leads.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lead_ids.is_empty()
    }

    /// Returns the position of a lead within the column.
    #[must_use]
    pub fn position_of(&self, lead_id: LeadId) -> Option<usize> {
        self.lead_ids.iter().position(|id| *id == lead_id)
    }

    pub(crate) fn push(&mut self, lead_id: LeadId) {
        self.lead_ids.push(lead_id);
    }

    /// Removes every occurrence of the identifier. Absent identifiers are
    /// ignored.
    pub(crate) fn remove(&mut self, lead_id: LeadId) {
        self.lead_ids.retain(|id| *id != lead_id);
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Result<LeadId, BoardDomainError> {
        if index >= self.lead_ids.len() {
            return Err(self.out_of_bounds(index));
        }
        Ok(self.lead_ids.remove(index))
    }

    pub(crate) fn insert_at(
        &mut self,
        index: usize,
        lead_id: LeadId,
    ) -> Result<(), BoardDomainError> {
        if index > self.lead_ids.len() {
            return Err(self.out_of_bounds(index));
        }
        self.lead_ids.insert(index, lead_id);
        Ok(())
    }

    const fn out_of_bounds(&self, index: usize) -> BoardDomainError {
        BoardDomainError::IndexOutOfBounds {
            column: self.id,
            index,
            len: self.lead_ids.len(),
        }
    }
}

/// Kanban board: one column per stage plus the stage display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    columns: BTreeMap<LeadStatus, Column>,
    column_order: Vec<LeadStatus>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board with an empty column for every stage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: LeadStatus::ALL
                .iter()
                .map(|status| (*status, Column::new(*status)))
                .collect(),
            column_order: LeadStatus::ALL.to_vec(),
        }
    }

    /// Returns the stage display order.
    #[must_use]
    pub fn column_order(&self) -> &[LeadStatus] {
        &self.column_order
    }

    /// Returns the column for a stage.
    ///
    /// Boards deserialized from a snapshot lacking a column yield `None`.
    #[must_use]
    pub fn column(&self, status: LeadStatus) -> Option<&Column> {
        self.columns.get(&status)
    }

    /// Returns the columns in display order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.column_order
            .iter()
            .filter_map(|status| self.columns.get(status))
    }

    /// Returns the stage and index currently holding a lead.
    #[must_use]
    pub fn locate(&self, lead_id: LeadId) -> Option<(LeadStatus, usize)> {
        self.columns.values().find_map(|column| {
            column
                .position_of(lead_id)
                .map(|index| (column.id(), index))
        })
    }

    /// Checks that every lead sits in exactly the column matching its
    /// status and that no column lists an unknown identifier.
    ///
    /// # Errors
    ///
    /// Returns the first [`BoardDomainError::OrphanedLeadId`] or
    /// [`BoardDomainError::InconsistentPlacement`] found.
    pub fn verify(&self, leads: &BTreeMap<LeadId, Lead>) -> Result<(), BoardDomainError> {
        let mut placements: BTreeMap<LeadId, Vec<LeadStatus>> = BTreeMap::new();
        for column in self.columns.values() {
            for lead_id in column.lead_ids() {
                if !leads.contains_key(lead_id) {
                    return Err(BoardDomainError::OrphanedLeadId {
                        column: column.id(),
                        lead_id: *lead_id,
                    });
                }
                placements.entry(*lead_id).or_default().push(column.id());
            }
        }

        for lead in leads.values() {
            let found = placements.get(&lead.id()).map_or(&[][..], Vec::as_slice);
            match found {
                [status] if *status == lead.status() => {}
                [] => {
                    return Err(misplaced(lead.id(), "not listed in any column".to_owned()));
                }
                [status] => {
                    return Err(misplaced(
                        lead.id(),
                        format!("status '{}' but listed in '{status}'", lead.status()),
                    ));
                }
                many => {
                    return Err(misplaced(
                        lead.id(),
                        format!("listed {} times", many.len()),
                    ));
                }
            }
        }
        Ok(())
    }

    pub(crate) fn column_mut(&mut self, status: LeadStatus) -> &mut Column {
        self.columns
            .entry(status)
            .or_insert_with(|| Column::new(status))
    }
}

const fn misplaced(lead_id: LeadId, detail: String) -> BoardDomainError {
    BoardDomainError::InconsistentPlacement { lead_id, detail }
}

/// The persisted board document: `{ board, leads }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Columns and their ordering.
    pub board: Board,
    /// Lead records keyed by identifier.
    pub leads: BTreeMap<LeadId, Lead>,
}

impl BoardSnapshot {
    /// Checks the placement invariant of the snapshot.
    ///
    /// # Errors
    ///
    /// See [`Board::verify`].
    pub fn verify(&self) -> Result<(), BoardDomainError> {
        self.board.verify(&self.leads)
    }
}
