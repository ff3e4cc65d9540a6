//! Supported CRM providers and their default field mappings.

use crate::board::domain::LeadSource;
use crate::import::{FieldMapping, LeadField};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// External CRM systems leads can be synced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrmProvider {
    /// Salesforce.
    #[serde(rename = "salesforce")]
    Salesforce,
    /// `HubSpot`.
    #[serde(rename = "hubspot")]
    HubSpot,
    /// Marketo.
    #[serde(rename = "marketo")]
    Marketo,
    /// Airtable.
    #[serde(rename = "airtable")]
    Airtable,
}

/// Error returned while parsing provider names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported CRM provider: {0}")]
pub struct ParseCrmProviderError(pub String);

impl CrmProvider {
    /// Every supported provider.
    pub const ALL: [Self; 4] = [Self::Salesforce, Self::HubSpot, Self::Marketo, Self::Airtable];

    /// Returns provider name in canonical storage format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Salesforce => "salesforce",
            Self::HubSpot => "hubspot",
            Self::Marketo => "marketo",
            Self::Airtable => "airtable",
        }
    }

    /// Returns the human-readable provider name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Salesforce => "Salesforce",
            Self::HubSpot => "HubSpot",
            Self::Marketo => "Marketo",
            Self::Airtable => "Airtable",
        }
    }

    /// Returns the lead source stamped on records synced from the provider.
    #[must_use]
    pub const fn lead_source(self) -> LeadSource {
        match self {
            Self::Salesforce => LeadSource::Salesforce,
            Self::HubSpot => LeadSource::Hubspot,
            Self::Marketo => LeadSource::Marketo,
            Self::Airtable => LeadSource::Airtable,
        }
    }

    /// Returns the mapping from the provider's record keys to lead fields.
    #[must_use]
    pub fn default_mapping(self) -> FieldMapping {
        match self {
            Self::Salesforce => FieldMapping::new()
                .with("FirstName", LeadField::Name)
                .with("LastName", LeadField::Name)
                .with("Company", LeadField::Company)
                .with("Email", LeadField::Email)
                .with("Phone", LeadField::Phone)
                .with("Rating", LeadField::Priority)
                .with("Status", LeadField::Status)
                .with("Description", LeadField::Notes),
            Self::HubSpot => FieldMapping::new()
                .with("firstname", LeadField::Name)
                .with("lastname", LeadField::Name)
                .with("company", LeadField::Company)
                .with("email", LeadField::Email)
                .with("phone", LeadField::Phone)
                .with("lifecyclestage", LeadField::Status)
                .with("notes", LeadField::Notes),
            Self::Marketo => FieldMapping::new()
                .with("firstName", LeadField::Name)
                .with("lastName", LeadField::Name)
                .with("company", LeadField::Company)
                .with("email", LeadField::Email)
                .with("phone", LeadField::Phone)
                .with("leadStatus", LeadField::Status)
                .with("priority", LeadField::Priority),
            Self::Airtable => FieldMapping::new()
                .with("Name", LeadField::Name)
                .with("Company", LeadField::Company)
                .with("Email", LeadField::Email)
                .with("Phone", LeadField::Phone)
                .with("Priority", LeadField::Priority)
                .with("Stage", LeadField::Status)
                .with("Notes", LeadField::Notes),
        }
    }
}

impl TryFrom<&str> for CrmProvider {
    type Error = ParseCrmProviderError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|provider| provider.as_str() == normalized)
            .ok_or_else(|| ParseCrmProviderError(value.to_owned()))
    }
}

impl fmt::Display for CrmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
