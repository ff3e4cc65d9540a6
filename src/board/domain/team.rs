//! Team members that leads can be assigned to.

use super::{BoardDomainError, TeamMemberId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Input for adding a team member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeamMember {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Free-form role, e.g. "Account Executive".
    pub role: String,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
}

impl NewTeamMember {
    /// Creates input with the required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
            avatar_url: None,
        }
    }

    /// Sets the avatar URL.
    #[must_use]
    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }
}

/// A member of the sales team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    id: TeamMemberId,
    name: String,
    email: String,
    role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
}

impl TeamMember {
    /// Creates a team member with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyMemberName`] or
    /// [`BoardDomainError::EmptyMemberEmail`] when a required field is blank.
    pub fn new(input: NewTeamMember, clock: &impl Clock) -> Result<Self, BoardDomainError> {
        let name = input.name.trim().to_owned();
        if name.is_empty() {
            return Err(BoardDomainError::EmptyMemberName);
        }
        let email = input.email.trim().to_owned();
        if email.is_empty() {
            return Err(BoardDomainError::EmptyMemberEmail);
        }

        Ok(Self {
            id: TeamMemberId::new(),
            name,
            email,
            role: input.role.trim().to_owned(),
            avatar_url: input.avatar_url.filter(|url| !url.trim().is_empty()),
            created_at: clock.utc(),
        })
    }

    /// Returns the member identifier.
    #[must_use]
    pub const fn id(&self) -> TeamMemberId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the role.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the avatar URL, if any.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
