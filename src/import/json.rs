//! JSON import: a top-level array of objects.

use serde_json::{Map, Value};
use tracing::debug;

/// One external record: arbitrary keys to JSON values.
pub type JsonRecord = Map<String, Value>;

/// Parses a JSON array of objects.
///
/// Malformed JSON or a non-array document yields an empty list. Array
/// elements that are not objects are dropped.
#[must_use]
pub fn parse_json(text: &str) -> Vec<JsonRecord> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(record) => Some(record),
                _ => None,
            })
            .collect(),
        Ok(_) => {
            debug!("json import is not an array");
            Vec::new()
        }
        Err(err) => {
            debug!(error = %err, "json import is malformed");
            Vec::new()
        }
    }
}

/// Returns the union of record keys in first-seen order, for building a
/// field mapping.
#[must_use]
pub fn record_keys(records: &[JsonRecord]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for key in records.iter().flat_map(Map::keys) {
        if !keys.contains(key) {
            keys.push(key.clone());
        }
    }
    keys
}
