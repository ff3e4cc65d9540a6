//! Source-field to lead-field mapping for JSON and connector imports.

use super::JsonRecord;
use crate::board::domain::{ImportedLead, LeadSource, LeadStatus, Priority};
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Lead attribute an external field can be mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    /// Contact name. Several sources are joined with spaces.
    Name,
    /// Company name. Several sources are joined with spaces.
    Company,
    /// Email address.
    Email,
    /// Phone number.
    Phone,
    /// Priority, coerced with [`coerce_priority`].
    Priority,
    /// Notes. Several sources are joined with newlines.
    Notes,
    /// Pipeline stage, coerced with [`coerce_status`].
    Status,
    /// Acquisition channel, coerced with [`coerce_source`].
    Source,
}

impl LeadField {
    /// Every mappable field.
    pub const ALL: [Self; 8] = [
        Self::Name,
        Self::Company,
        Self::Email,
        Self::Phone,
        Self::Priority,
        Self::Notes,
        Self::Status,
        Self::Source,
    ];

    /// Returns the field name as used in lead documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Company => "company",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Priority => "priority",
            Self::Notes => "notes",
            Self::Status => "status",
            Self::Source => "source",
        }
    }

    const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Name => &[
                "name",
                "fullname",
                "contactname",
                "leadname",
                "firstname",
                "lastname",
            ],
            Self::Company => &[
                "company",
                "companyname",
                "organization",
                "organisation",
                "account",
                "accountname",
            ],
            Self::Email => &["email", "emailaddress", "mail"],
            Self::Phone => &["phone", "phonenumber", "mobile", "mobilephone", "telephone"],
            Self::Priority => &["priority", "rating", "leadrating"],
            Self::Notes => &["notes", "note", "description", "comments"],
            Self::Status => &["status", "leadstatus", "stage", "lifecyclestage"],
            Self::Source => &["source", "leadsource", "origin"],
        }
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned while parsing lead field names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown lead field: {0}")]
pub struct ParseLeadFieldError(pub String);

impl TryFrom<&str> for LeadField {
    type Error = ParseLeadFieldError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| ParseLeadFieldError(value.to_owned()))
    }
}

/// One source key feeding one lead field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    /// Key in the external record.
    pub source: String,
    /// Lead field receiving the value.
    pub target: LeadField,
}

/// Ordered correspondence between external keys and lead fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMapping {
    entries: Vec<MappingEntry>,
}

impl FieldMapping {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry. Duplicate entries are ignored.
    #[must_use]
    pub fn with(mut self, source: impl Into<String>, target: LeadField) -> Self {
        self.map(source, target);
        self
    }

    /// Adds an entry. Duplicate entries are ignored.
    pub fn map(&mut self, source: impl Into<String>, target: LeadField) {
        let entry = MappingEntry {
            source: source.into(),
            target,
        };
        if !self.entries.contains(&entry) {
            self.entries.push(entry);
        }
    }

    /// Removes every entry reading from `source`.
    pub fn unmap(&mut self, source: &str) {
        self.entries.retain(|entry| entry.source != source);
    }

    /// Returns the entries in application order.
    #[must_use]
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    /// Returns `true` when nothing is mapped.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Proposes a mapping by comparing normalized keys with known aliases.
    ///
    /// Keys are lowercased and stripped of separators before matching, so
    /// `Email_Address` and `emailAddress` both map to [`LeadField::Email`].
    /// Unrecognised keys are left unmapped.
    #[must_use]
    pub fn suggest<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let mut mapping = Self::new();
        for key in keys {
            let normalized = normalize_key(key);
            let target = LeadField::ALL
                .into_iter()
                .find(|field| field.aliases().contains(&normalized.as_str()));
            if let Some(field) = target {
                mapping.map(key, field);
            }
        }
        mapping
    }

    /// Converts one external record into an import record.
    ///
    /// Missing keys, nulls, empty strings, arrays and objects count as
    /// missing values; numbers and booleans are stringified. Enumerated
    /// fields that cannot be coerced are left missing.
    #[must_use]
    pub fn apply(&self, record: &JsonRecord) -> ImportedLead {
        let mut lead = ImportedLead::default();
        for entry in &self.entries {
            let Some(text) = record.get(&entry.source).and_then(value_text) else {
                continue;
            };
            match entry.target {
                LeadField::Name => join_into(&mut lead.name, &text, " "),
                LeadField::Company => join_into(&mut lead.company, &text, " "),
                LeadField::Notes => join_into(&mut lead.notes, &text, "\n"),
                LeadField::Email => {
                    lead.email.get_or_insert(text);
                }
                LeadField::Phone => {
                    lead.phone.get_or_insert(text);
                }
                LeadField::Priority => {
                    if lead.priority.is_none() {
                        lead.priority = coerce_priority(&text);
                    }
                }
                LeadField::Status => {
                    if lead.status.is_none() {
                        lead.status = coerce_status(&text);
                    }
                }
                LeadField::Source => {
                    if lead.source.is_none() {
                        lead.source = Some(coerce_source(&text));
                    }
                }
            }
        }
        lead
    }

    /// Converts every record, preserving order.
    #[must_use]
    pub fn apply_all(&self, records: &[JsonRecord]) -> Vec<ImportedLead> {
        records.iter().map(|record| self.apply(record)).collect()
    }
}

fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn join_into(slot: &mut Option<String>, text: &str, separator: &str) {
    match slot {
        Some(existing) => {
            existing.push_str(separator);
            existing.push_str(text);
        }
        None => *slot = Some(text.to_owned()),
    }
}

/// Coerces a priority value, accepting rating vocabularies such as
/// `Hot` / `Warm` / `Cold`.
#[must_use]
pub fn coerce_priority(value: &str) -> Option<Priority> {
    if let Ok(priority) = Priority::try_from(value) {
        return Some(priority);
    }
    match normalize_key(value).as_str() {
        "hot" | "urgent" | "a" => Some(Priority::High),
        "warm" | "normal" | "b" => Some(Priority::Medium),
        "cold" | "c" => Some(Priority::Low),
        _ => {
            debug!(value, "priority not recognised");
            None
        }
    }
}

/// Coerces a pipeline status, accepting CRM lead statuses and lifecycle
/// stages.
#[must_use]
pub fn coerce_status(value: &str) -> Option<LeadStatus> {
    if let Ok(status) = LeadStatus::try_from(value) {
        return Some(status);
    }
    match normalize_key(value).as_str() {
        "opennotcontacted" | "open" | "lead" | "subscriber" | "todo" => Some(LeadStatus::New),
        "workingcontacted" | "working" | "attemptedtocontact" | "connected" | "inprogress" => {
            Some(LeadStatus::Contacted)
        }
        "marketingqualifiedlead" | "salesqualifiedlead" | "mql" | "sql" | "opportunity" => {
            Some(LeadStatus::Qualified)
        }
        "closedconverted" | "closedwon" | "converted" | "customer" | "evangelist" => {
            Some(LeadStatus::Won)
        }
        "closednotconverted" | "closedlost" | "disqualified" | "unqualified" => {
            Some(LeadStatus::Lost)
        }
        _ => {
            debug!(value, "status not recognised");
            None
        }
    }
}

/// Coerces an acquisition channel. Unknown values become
/// [`LeadSource::Other`].
#[must_use]
pub fn coerce_source(value: &str) -> LeadSource {
    if let Ok(source) = LeadSource::try_from(value) {
        return source;
    }
    match normalize_key(value).as_str() {
        "webform" | "organicsearch" | "paidsearch" | "directtraffic" => LeadSource::Website,
        "partnerreferral" | "employeereferral" | "externalreferral" => LeadSource::Referral,
        "tradeshow" | "webinar" | "seminar" | "conference" => LeadSource::Event,
        "phoneinquiry" | "phone" | "outbound" => LeadSource::ColdCall,
        "emailmarketing" | "newsletter" => LeadSource::Email,
        "socialmedia" | "linkedin" | "twitter" => LeadSource::SocialMedia,
        _ => LeadSource::Other,
    }
}
