//! Team directory service backing lead assignment.

use super::error::{BoardServiceResult, load_document, save_document};
use crate::board::{
    domain::{BoardDomainError, Lead, NewTeamMember, TeamMember, TeamMemberId},
    ports::KeyValueStorage,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::debug;

/// Storage key used when none is configured.
pub const DEFAULT_TEAM_KEY: &str = "crm-team-members";

/// Team members persisted as one JSON array under their own key.
pub struct TeamDirectory<S, C>
where
    S: KeyValueStorage,
    C: Clock + Send + Sync,
{
    storage: Arc<S>,
    clock: Arc<C>,
    key: String,
    members: Vec<TeamMember>,
}

impl<S, C> TeamDirectory<S, C>
where
    S: KeyValueStorage,
    C: Clock + Send + Sync,
{
    /// Opens the directory stored under `key`, or an empty one.
    ///
    /// # Errors
    ///
    /// Returns storage errors or [`super::BoardServiceError::CorruptDocument`]
    /// when the stored JSON does not decode.
    pub fn open(
        storage: Arc<S>,
        clock: Arc<C>,
        key: impl Into<String>,
    ) -> BoardServiceResult<Self> {
        let key = key.into();
        let members = load_document::<Vec<TeamMember>, _>(&*storage, &key)?.unwrap_or_default();
        Ok(Self {
            storage,
            clock,
            key,
            members,
        })
    }

    /// Returns members in the order they were added.
    #[must_use]
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    /// Returns a member by identifier.
    #[must_use]
    pub fn member(&self, member_id: TeamMemberId) -> Option<&TeamMember> {
        self.members.iter().find(|member| member.id() == member_id)
    }

    /// Returns the name of the member a lead is assigned to.
    ///
    /// Unassigned leads and assignments to removed members yield `None`.
    #[must_use]
    pub fn assignee_name(&self, lead: &Lead) -> Option<&str> {
        lead.assigned_to()
            .and_then(|member_id| self.member(member_id))
            .map(TeamMember::name)
    }

    /// Adds a team member.
    ///
    /// # Errors
    ///
    /// Returns domain errors for blank required fields and storage errors
    /// when the write fails.
    pub fn add_member(&mut self, input: NewTeamMember) -> BoardServiceResult<TeamMember> {
        let member = TeamMember::new(input, &*self.clock)?;
        let mut next = self.members.clone();
        next.push(member.clone());
        self.commit(next)?;
        debug!(member_id = %member.id(), "team member added");
        Ok(member)
    }

    /// Removes a team member. Leads assigned to them keep the dangling
    /// reference.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TeamMemberNotFound`] when the member is
    /// absent and storage errors when the write fails.
    pub fn remove_member(&mut self, member_id: TeamMemberId) -> BoardServiceResult<TeamMember> {
        let position = self
            .members
            .iter()
            .position(|member| member.id() == member_id)
            .ok_or(BoardDomainError::TeamMemberNotFound(member_id))?;
        let mut next = self.members.clone();
        let removed = next.remove(position);
        self.commit(next)?;
        debug!(%member_id, "team member removed");
        Ok(removed)
    }

    fn commit(&mut self, next: Vec<TeamMember>) -> BoardServiceResult<()> {
        save_document(&*self.storage, &self.key, &next)?;
        self.members = next;
        Ok(())
    }
}
