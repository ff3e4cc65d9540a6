//! Lead records and the enumerations that classify them.

use super::{BoardDomainError, LeadId, ParseLeadStatusError, TeamMemberId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline stage of a lead. Each status owns exactly one board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    /// Lead has just entered the pipeline.
    New,
    /// Lead has been reached out to.
    Contacted,
    /// Lead has been qualified as a real opportunity.
    Qualified,
    /// Lead converted into a customer.
    Won,
    /// Lead was lost.
    Lost,
}

impl LeadStatus {
    /// Every status in display order.
    pub const ALL: [Self; 5] = [
        Self::New,
        Self::Contacted,
        Self::Qualified,
        Self::Won,
        Self::Lost,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Qualified => "qualified",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }

    /// Returns the default column title for the status.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::Qualified => "Qualified",
            Self::Won => "Won",
            Self::Lost => "Lost",
        }
    }
}

impl TryFrom<&str> for LeadStatus {
    type Error = ParseLeadStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "new" => Ok(Self::New),
            "contacted" => Ok(Self::Contacted),
            "qualified" => Ok(Self::Qualified),
            "won" => Ok(Self::Won),
            "lost" => Ok(Self::Lost),
            _ => Err(ParseLeadStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How urgently a lead should be worked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Low priority.
    Low,
    /// Medium priority.
    #[default]
    Medium,
    /// High priority.
    High,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = BoardDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(BoardDomainError::InvalidPriority(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Channel a lead arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    /// Website form or chat.
    Website,
    /// Referral from an existing contact.
    Referral,
    /// Outbound cold call.
    ColdCall,
    /// Email campaign or inbound email.
    Email,
    /// Social media.
    SocialMedia,
    /// Trade show, meetup or other event.
    Event,
    /// File import.
    Import,
    /// Synced from Salesforce.
    Salesforce,
    /// Synced from `HubSpot`.
    Hubspot,
    /// Synced from Marketo.
    Marketo,
    /// Synced from Airtable.
    Airtable,
    /// Anything else.
    Other,
}

impl LeadSource {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Referral => "referral",
            Self::ColdCall => "cold_call",
            Self::Email => "email",
            Self::SocialMedia => "social_media",
            Self::Event => "event",
            Self::Import => "import",
            Self::Salesforce => "salesforce",
            Self::Hubspot => "hubspot",
            Self::Marketo => "marketo",
            Self::Airtable => "airtable",
            Self::Other => "other",
        }
    }
}

impl TryFrom<&str> for LeadSource {
    type Error = BoardDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "website" | "web" => Ok(Self::Website),
            "referral" => Ok(Self::Referral),
            "cold_call" => Ok(Self::ColdCall),
            "email" => Ok(Self::Email),
            "social_media" | "social" => Ok(Self::SocialMedia),
            "event" => Ok(Self::Event),
            "import" => Ok(Self::Import),
            "salesforce" => Ok(Self::Salesforce),
            "hubspot" => Ok(Self::Hubspot),
            "marketo" => Ok(Self::Marketo),
            "airtable" => Ok(Self::Airtable),
            "other" => Ok(Self::Other),
            _ => Err(BoardDomainError::InvalidLeadSource(value.to_owned())),
        }
    }
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for creating a lead. Identifier and timestamps are assigned by the
/// board store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLead {
    /// Contact name.
    pub name: String,
    /// Company the contact works for.
    pub company: String,
    /// Contact email address.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Lead priority.
    pub priority: Priority,
    /// Free-text notes.
    pub notes: String,
    /// Initial pipeline stage.
    pub status: LeadStatus,
    /// Acquisition channel.
    pub source: Option<LeadSource>,
    /// Assigned team member.
    pub assigned_to: Option<TeamMemberId>,
}

impl NewLead {
    /// Creates input for a `new`, medium-priority lead with no extras.
    #[must_use]
    pub fn new(name: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            company: company.into(),
            email: None,
            phone: None,
            priority: Priority::default(),
            notes: String::new(),
            status: LeadStatus::New,
            source: None,
            assigned_to: None,
        }
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: LeadStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Sets the acquisition channel.
    #[must_use]
    pub const fn with_source(mut self, source: LeadSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Sets the assigned team member.
    #[must_use]
    pub const fn with_assigned_to(mut self, member: TeamMemberId) -> Self {
        self.assigned_to = Some(member);
        self
    }
}

/// Partially specified lead produced by file imports and connector syncs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportedLead {
    /// Contact name.
    pub name: Option<String>,
    /// Company name.
    pub company: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Priority, `medium` when absent.
    pub priority: Option<Priority>,
    /// Notes, empty when absent.
    pub notes: Option<String>,
    /// Pipeline stage, `new` when absent.
    pub status: Option<LeadStatus>,
    /// Acquisition channel.
    pub source: Option<LeadSource>,
}

impl ImportedLead {
    /// Fills defaults and converts the record into creation input.
    #[must_use]
    pub fn into_new_lead(self) -> NewLead {
        NewLead {
            name: self.name.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            email: self.email,
            phone: self.phone,
            priority: self.priority.unwrap_or_default(),
            notes: self.notes.unwrap_or_default(),
            status: self.status.unwrap_or(LeadStatus::New),
            source: self.source,
            assigned_to: None,
        }
    }
}

/// A sales contact tracked through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    id: LeadId,
    name: String,
    company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    priority: Priority,
    #[serde(default)]
    notes: String,
    status: LeadStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<LeadSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    assigned_to: Option<TeamMemberId>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    updated_at: DateTime<Utc>,
}

impl Lead {
    /// Creates a lead with a fresh identifier and matching timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyLeadName`] or
    /// [`BoardDomainError::EmptyCompany`] when a required field is blank.
    pub fn new(input: NewLead, clock: &impl Clock) -> Result<Self, BoardDomainError> {
        let timestamp = clock.utc();
        let lead = Self {
            id: LeadId::new(),
            name: input.name.trim().to_owned(),
            company: input.company.trim().to_owned(),
            email: normalize_optional(input.email),
            phone: normalize_optional(input.phone),
            priority: input.priority,
            notes: input.notes,
            status: input.status,
            source: input.source,
            assigned_to: input.assigned_to,
            created_at: timestamp,
            updated_at: timestamp,
        };
        lead.validate()?;
        Ok(lead)
    }

    /// Checks the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyLeadName`] or
    /// [`BoardDomainError::EmptyCompany`] when a required field is blank.
    pub fn validate(&self) -> Result<(), BoardDomainError> {
        if self.name.trim().is_empty() {
            return Err(BoardDomainError::EmptyLeadName);
        }
        if self.company.trim().is_empty() {
            return Err(BoardDomainError::EmptyCompany);
        }
        Ok(())
    }

    /// Returns the lead identifier.
    #[must_use]
    pub const fn id(&self) -> LeadId {
        self.id
    }

    /// Returns the contact name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the company name.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Returns the email address, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the phone number, if any.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns the pipeline stage, which is also the containing column.
    #[must_use]
    pub const fn status(&self) -> LeadStatus {
        self.status
    }

    /// Returns the acquisition channel, if known.
    #[must_use]
    pub const fn source(&self) -> Option<LeadSource> {
        self.source
    }

    /// Returns the assigned team member, if any. The reference may dangle.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<TeamMemberId> {
        self.assigned_to
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the contact name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into().trim().to_owned();
        self
    }

    /// Replaces the company name.
    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into().trim().to_owned();
        self
    }

    /// Replaces the email address.
    #[must_use]
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = normalize_optional(email);
        self
    }

    /// Replaces the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: Option<String>) -> Self {
        self.phone = normalize_optional(phone);
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Replaces the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Replaces the status. The board store relocates the lead on update.
    #[must_use]
    pub const fn with_status(mut self, status: LeadStatus) -> Self {
        self.status = status;
        self
    }

    /// Replaces the acquisition channel.
    #[must_use]
    pub const fn with_source(mut self, source: Option<LeadSource>) -> Self {
        self.source = source;
        self
    }

    /// Replaces the assigned team member.
    #[must_use]
    pub const fn with_assigned_to(mut self, member: Option<TeamMemberId>) -> Self {
        self.assigned_to = member;
        self
    }

    /// Moves the lead to a new stage and refreshes `updated_at`.
    pub(crate) fn set_status(&mut self, status: LeadStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Keeps the stored creation time when a caller-supplied record
    /// replaces the stored one.
    pub(crate) const fn preserve_created_at(&mut self, created_at: DateTime<Utc>) {
        self.created_at = created_at;
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    pub(crate) fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}
