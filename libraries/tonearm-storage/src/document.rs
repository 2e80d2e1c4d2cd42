//! JSON document layout for keyed histories
//!
//! ```text
//! {"history": [{"uid": "abc", "data": {...}, "timestamp": 1718000000}]}
//! ```
//!
//! The name of the key field differs per store (`uid` for albums, `url` for
//! tracks). Timestamps are whole seconds since the Unix epoch.

use crate::error::{Result, StorageError};
use crate::history::KeyedHistory;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

const HISTORY_FIELD: &str = "history";
const DATA_FIELD: &str = "data";
const TIMESTAMP_FIELD: &str = "timestamp";

/// Encode a history as a store document
pub fn encode_history<V: Serialize>(history: &KeyedHistory<V>, key_field: &str) -> Result<Value> {
    let mut rows = Vec::with_capacity(history.len());
    for (key, entry) in history.iter() {
        let mut row = Map::new();
        row.insert(key_field.to_string(), Value::from(key));
        row.insert(DATA_FIELD.to_string(), serde_json::to_value(&entry.value)?);
        row.insert(
            TIMESTAMP_FIELD.to_string(),
            Value::from(entry.timestamp.timestamp()),
        );
        rows.push(Value::Object(row));
    }

    let mut root = Map::new();
    root.insert(HISTORY_FIELD.to_string(), Value::Array(rows));
    Ok(Value::Object(root))
}

/// Decode a store document
///
/// The root must be an object. Rows without a key or with undecodable data are
/// skipped; a missing timestamp reads as the epoch.
pub fn decode_history<V: DeserializeOwned>(
    document: Value,
    key_field: &str,
) -> Result<KeyedHistory<V>> {
    let Value::Object(mut root) = document else {
        return Err(StorageError::InvalidDocument(
            "root is not a JSON object".to_string(),
        ));
    };

    let mut history = KeyedHistory::new();
    let rows = match root.remove(HISTORY_FIELD) {
        Some(Value::Array(rows)) => rows,
        _ => return Ok(history),
    };

    for row in rows {
        let Value::Object(mut row) = row else {
            tracing::warn!("Skipping history row that is not an object");
            continue;
        };

        let Some(key) = row
            .get(key_field)
            .and_then(Value::as_str)
            .map(str::to_string)
        else {
            tracing::warn!("Skipping history row without '{}'", key_field);
            continue;
        };

        let data = row.remove(DATA_FIELD).unwrap_or(Value::Null);
        let value = match serde_json::from_value(data) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Skipping history row '{}': {}", key, e);
                continue;
            }
        };

        let timestamp = row
            .get(TIMESTAMP_FIELD)
            .and_then(Value::as_i64)
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
            .unwrap_or_default();

        history.upsert(key, value, timestamp);
    }

    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn encodes_rows_with_named_key_field() {
        let mut history = KeyedHistory::new();
        history.upsert(
            "abc",
            json!({"name": "A"}),
            Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        );

        let document = encode_history(&history, "uid").unwrap();
        assert_eq!(
            document,
            json!({"history": [{"uid": "abc", "data": {"name": "A"}, "timestamp": 1_700_000_000}]})
        );
    }

    #[test]
    fn decodes_rows_and_skips_broken_ones() {
        let document = json!({"history": [
            {"url": "file:///a.mp3", "data": {"Title": "A"}, "timestamp": 42},
            {"data": {"Title": "no key"}, "timestamp": 1},
            "not a row",
            {"url": "file:///b.mp3", "data": {"Title": "B"}}
        ]});

        let history: KeyedHistory<Value> = decode_history(document, "url").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.get("file:///a.mp3").unwrap().timestamp.timestamp(), 42);
        assert_eq!(history.get("file:///b.mp3").unwrap().timestamp.timestamp(), 0);
    }

    #[test]
    fn rejects_non_object_root() {
        let result: Result<KeyedHistory<Value>> = decode_history(json!([1, 2, 3]), "uid");
        assert!(matches!(result, Err(StorageError::InvalidDocument(_))));
    }

    #[test]
    fn missing_history_array_is_empty() {
        let history: KeyedHistory<Value> = decode_history(json!({}), "uid").unwrap();
        assert!(history.is_empty());
    }
}
