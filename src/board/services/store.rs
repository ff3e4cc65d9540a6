//! Board store: owns the board snapshot and applies every mutation as one
//! persisted write.

use super::error::{BoardServiceResult, load_document, save_document};
use crate::board::{
    domain::{
        Board, BoardDomainError, BoardSnapshot, ImportedLead, Lead, LeadId, LeadStatus, NewLead,
        TeamMemberId,
    },
    ports::KeyValueStorage,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Storage key used when none is configured.
pub const DEFAULT_BOARD_KEY: &str = "crm-board-state";

/// Request to move a lead from one column position to another.
///
/// `source_index` must point at `lead_id` in the source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveLead {
    /// Column currently holding the lead.
    pub source: LeadStatus,
    /// Column receiving the lead.
    pub destination: LeadStatus,
    /// Current index of the lead in the source column.
    pub source_index: usize,
    /// Insertion index in the destination column.
    pub dest_index: usize,
    /// Lead being moved.
    pub lead_id: LeadId,
}

/// Import record rejected during [`BoardStore::import_leads`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Zero-based position of the record in the input.
    pub position: usize,
    /// Why the record was rejected.
    pub reason: BoardDomainError,
}

/// Outcome of a bulk import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Leads created, in input order.
    pub created: Vec<Lead>,
    /// Records that were not imported.
    pub skipped: Vec<SkippedRecord>,
}

/// Stateful board service.
///
/// Mutations are computed on a copy of the current snapshot, persisted as a
/// single JSON document under the store key and only then made visible. A
/// failed write leaves the in-memory board untouched.
pub struct BoardStore<S, C>
where
    S: KeyValueStorage,
    C: Clock + Send + Sync,
{
    storage: Arc<S>,
    clock: Arc<C>,
    key: String,
    snapshot: BoardSnapshot,
}

impl<S, C> BoardStore<S, C>
where
    S: KeyValueStorage,
    C: Clock + Send + Sync,
{
    /// Opens the board stored under `key`, or an empty board when nothing is
    /// stored yet.
    ///
    /// Stored snapshots are taken verbatim; placement inconsistencies are
    /// logged but do not prevent loading.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardServiceError::Storage`] when the backend cannot
    /// be read or [`super::BoardServiceError::CorruptDocument`] when the
    /// stored JSON does not decode.
    pub fn open(
        storage: Arc<S>,
        clock: Arc<C>,
        key: impl Into<String>,
    ) -> BoardServiceResult<Self> {
        let key = key.into();
        let snapshot = match load_document::<BoardSnapshot, _>(&*storage, &key)? {
            Some(stored) => {
                if let Err(err) = stored.verify() {
                    warn!(%key, error = %err, "stored board is inconsistent");
                }
                debug!(%key, leads = stored.leads.len(), "board loaded");
                stored
            }
            None => {
                debug!(%key, "no stored board, starting empty");
                BoardSnapshot::default()
            }
        };

        Ok(Self {
            storage,
            clock,
            key,
            snapshot,
        })
    }

    /// Returns the storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &BoardSnapshot {
        &self.snapshot
    }

    /// Returns the board columns.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.snapshot.board
    }

    /// Returns all leads ordered by identifier.
    pub fn leads(&self) -> impl Iterator<Item = &Lead> {
        self.snapshot.leads.values()
    }

    /// Returns a lead by identifier.
    #[must_use]
    pub fn lead(&self, lead_id: LeadId) -> Option<&Lead> {
        self.snapshot.leads.get(&lead_id)
    }

    /// Returns a lead by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::LeadNotFound`] when the lead is absent.
    pub fn require_lead(&self, lead_id: LeadId) -> Result<&Lead, BoardDomainError> {
        self.lead(lead_id)
            .ok_or(BoardDomainError::LeadNotFound(lead_id))
    }

    /// Returns the leads of a column in display order.
    ///
    /// Identifiers without a record are skipped.
    #[must_use]
    pub fn leads_in_column(&self, status: LeadStatus) -> Vec<&Lead> {
        self.snapshot
            .board
            .column(status)
            .map(|column| {
                column
                    .lead_ids()
                    .iter()
                    .filter_map(|id| self.snapshot.leads.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the column and index currently holding a lead.
    #[must_use]
    pub fn locate(&self, lead_id: LeadId) -> Option<(LeadStatus, usize)> {
        self.snapshot.board.locate(lead_id)
    }

    /// Returns the number of leads per column in display order.
    #[must_use]
    pub fn column_counts(&self) -> Vec<(LeadStatus, usize)> {
        self.snapshot
            .board
            .columns()
            .map(|column| (column.id(), column.len()))
            .collect()
    }

    /// Creates a lead and appends it to the tail of its status column.
    ///
    /// # Errors
    ///
    /// Returns domain errors for blank required fields and storage errors
    /// when the write fails.
    pub fn create_lead(&mut self, input: NewLead) -> BoardServiceResult<Lead> {
        let lead = Lead::new(input, &*self.clock)?;
        let mut next = self.snapshot.clone();
        append_lead(&mut next, lead.clone());
        self.commit(next)?;
        debug!(lead_id = %lead.id(), status = %lead.status(), "lead created");
        Ok(lead)
    }

    /// Replaces a stored lead.
    ///
    /// The stored creation time is kept and `updated_at` is refreshed. When
    /// the status changes the lead leaves its old column and is appended to
    /// the tail of the new one.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::LeadNotFound`] when no lead has the
    /// record's identifier, domain errors for blank required fields, and
    /// storage errors when the write fails.
    pub fn update_lead(&mut self, mut lead: Lead) -> BoardServiceResult<Lead> {
        lead.validate()?;
        let lead_id = lead.id();
        let previous = self.require_lead(lead_id)?;
        let previous_status = previous.status();
        lead.preserve_created_at(previous.created_at());
        lead.touch(&*self.clock);

        let mut next = self.snapshot.clone();
        if previous_status != lead.status() {
            next.board.column_mut(previous_status).remove(lead_id);
            next.board.column_mut(lead.status()).push(lead_id);
        }
        next.leads.insert(lead_id, lead.clone());
        self.commit(next)?;
        debug!(%lead_id, from = %previous_status, to = %lead.status(), "lead updated");
        Ok(lead)
    }

    /// Assigns a lead to a team member, or clears the assignment.
    ///
    /// The member is not checked for existence.
    ///
    /// # Errors
    ///
    /// See [`Self::update_lead`].
    pub fn assign_lead(
        &mut self,
        lead_id: LeadId,
        member: Option<TeamMemberId>,
    ) -> BoardServiceResult<Lead> {
        let lead = self.require_lead(lead_id)?.clone().with_assigned_to(member);
        self.update_lead(lead)
    }

    /// Deletes a lead and removes it from its column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::LeadNotFound`] when the lead is absent
    /// and storage errors when the write fails.
    pub fn delete_lead(&mut self, lead_id: LeadId) -> BoardServiceResult<Lead> {
        let mut next = self.snapshot.clone();
        let lead = next
            .leads
            .remove(&lead_id)
            .ok_or(BoardDomainError::LeadNotFound(lead_id))?;
        next.board.column_mut(lead.status()).remove(lead_id);
        self.commit(next)?;
        debug!(%lead_id, "lead deleted");
        Ok(lead)
    }

    /// Moves the lead at `source_index` to `dest_index` within one column.
    ///
    /// Both indices must be smaller than the column length.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::IndexOutOfBounds`] for invalid indices and
    /// storage errors when the write fails.
    pub fn reorder_leads_in_column(
        &mut self,
        column: LeadStatus,
        source_index: usize,
        dest_index: usize,
    ) -> BoardServiceResult<()> {
        let mut next = self.snapshot.clone();
        let target = next.board.column_mut(column);
        let len = target.len();
        for index in [source_index, dest_index] {
            if index >= len {
                return Err(BoardDomainError::IndexOutOfBounds { column, index, len }.into());
            }
        }
        if source_index == dest_index {
            return Ok(());
        }

        let lead_id = target.remove_at(source_index)?;
        target.insert_at(dest_index, lead_id)?;
        self.commit(next)?;
        debug!(%column, source_index, dest_index, "column reordered");
        Ok(())
    }

    /// Moves a lead between columns and sets its status to the destination.
    ///
    /// When source and destination are the same column this is a reorder
    /// and `dest_index` must be smaller than the column length.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::IndexOutOfBounds`] for invalid indices,
    /// [`BoardDomainError::LeadPositionMismatch`] when `lead_id` is not at
    /// `source_index`, [`BoardDomainError::LeadNotFound`] when the lead
    /// record is missing, and storage errors when the write fails.
    pub fn move_lead_between_columns(&mut self, request: MoveLead) -> BoardServiceResult<Lead> {
        let MoveLead {
            source,
            destination,
            source_index,
            dest_index,
            lead_id,
        } = request;
        self.check_source_position(source, source_index, lead_id)?;
        let mut lead = self.require_lead(lead_id)?.clone();

        if source == destination {
            self.reorder_leads_in_column(source, source_index, dest_index)?;
            return Ok(lead);
        }

        let mut next = self.snapshot.clone();
        let dest_len = next.board.column_mut(destination).len();
        if dest_index > dest_len {
            return Err(BoardDomainError::IndexOutOfBounds {
                column: destination,
                index: dest_index,
                len: dest_len,
            }
            .into());
        }
        next.board.column_mut(source).remove_at(source_index)?;
        next.board
            .column_mut(destination)
            .insert_at(dest_index, lead_id)?;
        lead.set_status(destination, &*self.clock);
        next.leads.insert(lead_id, lead.clone());
        self.commit(next)?;
        debug!(%lead_id, from = %source, to = %destination, dest_index, "lead moved");
        Ok(lead)
    }

    /// Creates leads from partially specified records, in input order.
    ///
    /// Missing status defaults to `new`, missing notes to an empty string
    /// and missing priority to `medium`. Records without a name or company
    /// are skipped and reported. All accepted records are persisted in one
    /// write.
    ///
    /// # Errors
    ///
    /// Returns storage errors when the write fails; nothing is imported in
    /// that case.
    pub fn import_leads(
        &mut self,
        records: impl IntoIterator<Item = ImportedLead>,
    ) -> BoardServiceResult<ImportReport> {
        let mut report = ImportReport::default();
        let mut next = self.snapshot.clone();
        for (position, record) in records.into_iter().enumerate() {
            match Lead::new(record.into_new_lead(), &*self.clock) {
                Ok(lead) => {
                    append_lead(&mut next, lead.clone());
                    report.created.push(lead);
                }
                Err(reason) => {
                    warn!(position, error = %reason, "skipping import record");
                    report.skipped.push(SkippedRecord { position, reason });
                }
            }
        }

        if !report.created.is_empty() {
            self.commit(next)?;
        }
        info!(
            created = report.created.len(),
            skipped = report.skipped.len(),
            "leads imported"
        );
        Ok(report)
    }

    fn check_source_position(
        &self,
        column: LeadStatus,
        index: usize,
        lead_id: LeadId,
    ) -> Result<(), BoardDomainError> {
        let ids = self
            .snapshot
            .board
            .column(column)
            .map(|found| found.lead_ids())
            .unwrap_or_default();
        match ids.get(index) {
            Some(found) if *found == lead_id => Ok(()),
            Some(_) => Err(BoardDomainError::LeadPositionMismatch {
                lead_id,
                column,
                index,
            }),
            None => Err(BoardDomainError::IndexOutOfBounds {
                column,
                index,
                len: ids.len(),
            }),
        }
    }

    fn commit(&mut self, next: BoardSnapshot) -> BoardServiceResult<()> {
        save_document(&*self.storage, &self.key, &next)?;
        self.snapshot = next;
        Ok(())
    }
}

fn append_lead(snapshot: &mut BoardSnapshot, lead: Lead) {
    snapshot.board.column_mut(lead.status()).push(lead.id());
    snapshot.leads.insert(lead.id(), lead);
}
