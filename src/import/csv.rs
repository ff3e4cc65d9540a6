//! Naive comma-separated import.
//!
//! The first line holds headers; every other non-blank line is one record.
//! Fields are split on every comma: quoting and embedded newlines are not
//! supported.

use crate::board::domain::{ImportedLead, LeadStatus, Priority};
use tracing::debug;

/// Headers recognised by [`parse_csv`]. Matching is exact and
/// case-sensitive; other headers are ignored.
pub const CSV_HEADERS: [&str; 5] = ["name", "company", "priority", "notes", "status"];

/// Parses CSV text into import records.
///
/// Values are trimmed and empty values count as missing. Priority and
/// status values that do not parse are treated as missing.
#[must_use]
pub fn parse_csv(text: &str) -> Vec<ImportedLead> {
    let mut lines = text.lines();
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();

    lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut record = ImportedLead::default();
            for (header, value) in headers.iter().zip(line.split(',')) {
                apply_field(&mut record, header, value.trim());
            }
            record
        })
        .collect()
}

fn apply_field(record: &mut ImportedLead, header: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    match header {
        "name" => record.name = Some(value.to_owned()),
        "company" => record.company = Some(value.to_owned()),
        "notes" => record.notes = Some(value.to_owned()),
        "priority" => match Priority::try_from(value) {
            Ok(priority) => record.priority = Some(priority),
            Err(err) => debug!(error = %err, "ignoring csv priority"),
        },
        "status" => match LeadStatus::try_from(value) {
            Ok(status) => record.status = Some(status),
            Err(err) => debug!(error = %err, "ignoring csv status"),
        },
        _ => {}
    }
}
