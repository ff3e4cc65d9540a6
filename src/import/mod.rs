//! Conversion of external lead data into [`ImportedLead`] records.
//!
//! Parsing is convert-only: callers hand the resulting records to
//! [`crate::board::services::BoardStore::import_leads`].
//!
//! [`ImportedLead`]: crate::board::domain::ImportedLead

mod csv;
mod json;
mod mapping;

pub use csv::{CSV_HEADERS, parse_csv};
pub use json::{JsonRecord, parse_json, record_keys};
pub use mapping::{
    FieldMapping, LeadField, MappingEntry, ParseLeadFieldError, coerce_priority, coerce_source,
    coerce_status,
};
