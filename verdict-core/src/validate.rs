//! Status payload validation
//!
//! Turns the raw JSON body returned by the status API into a
//! [`StatusPayload`]. A payload is either fully valid or rejected with a
//! [`SchemaError`]; a partial item list is never returned. An empty
//! `homeworks` array is valid and means there is nothing new.

use serde_json::{Map, Value};

use crate::domain::{StatusPayload, TimeCursor, TrackedItem};
use crate::error::SchemaError;

const ITEMS_FIELD: &str = "homeworks";
const CURSOR_FIELD: &str = "current_date";
const NAME_FIELD: &str = "homework_name";
const STATUS_FIELD: &str = "status";

/// Validates a raw payload and extracts items plus the server cursor
pub fn extract_payload(raw: &Value) -> Result<StatusPayload, SchemaError> {
    let record = raw.as_object().ok_or(SchemaError::NotARecord {
        found: kind_of(raw),
    })?;

    let items = items_of(record)?;
    let current_date = record
        .get(CURSOR_FIELD)
        .and_then(Value::as_i64)
        .map(TimeCursor::new);

    Ok(StatusPayload {
        items,
        current_date,
    })
}

/// Validates a raw payload and returns only its tracked items
pub fn extract_items(raw: &Value) -> Result<Vec<TrackedItem>, SchemaError> {
    extract_payload(raw).map(|payload| payload.items)
}

fn items_of(record: &Map<String, Value>) -> Result<Vec<TrackedItem>, SchemaError> {
    let entries = match record.get(ITEMS_FIELD) {
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            return Err(SchemaError::ItemsNotSequence {
                found: kind_of(other),
            });
        }
        None => return Err(SchemaError::ItemsNotSequence { found: "missing" }),
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| -> Result<TrackedItem, SchemaError> {
            let fields = entry.as_object().ok_or(SchemaError::ItemNotRecord {
                index,
                found: kind_of(entry),
            })?;
            Ok(TrackedItem::new(
                string_field(fields, NAME_FIELD),
                string_field(fields, STATUS_FIELD),
            ))
        })
        .collect()
}

fn string_field(fields: &Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a record",
    }
}
