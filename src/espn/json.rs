//! Recursive field lookup over raw ESPN JSON.
//!
//! ESPN nests the same player attributes at different depths depending on
//! the view (`kona_player_info`, `mRoster`, free-agent pools...). Rather than
//! modelling every envelope, fields are located by name wherever they sit.

use serde_json::Value;

use crate::error::{EspnError, Result};


/// Depth-first search for `key`, in document order.
///
/// The first object entry whose name equals `key` wins, whatever the type of
/// its value. Arrays are searched element by element.
pub fn find_key<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.iter().find_map(|(k, v)| {
            if k == key {
                Some(v)
            } else {
                find_key(v, key)
            }
        }),
        Value::Array(items) => items.iter().find_map(|item| find_key(item, key)),
        _ => None,
    }
}

/// Find an integer field; `null` counts as absent.
pub fn find_i64(value: &Value, key: &str) -> Result<Option<i64>> {
    match find_key(value, key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_i64()
            .map(Some)
            .ok_or_else(|| EspnError::invalid(key, "integer")),
    }
}

/// Find a string field; `null` counts as absent.
pub fn find_str(value: &Value, key: &str) -> Result<Option<String>> {
    match find_key(value, key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(EspnError::invalid(key, "string")),
    }
}

/// Find an array of integers; `null` or absent gives an empty list.
pub fn find_i64_list(value: &Value, key: &str) -> Result<Vec<i64>> {
    match find_key(value, key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| {
                v.as_i64()
                    .ok_or_else(|| EspnError::invalid(key, "array of integers"))
            })
            .collect(),
        Some(_) => Err(EspnError::invalid(key, "array of integers")),
    }
}

/// Like [`find_i64`] but the field must be present.
pub fn require_i64(value: &Value, key: &str) -> Result<i64> {
    find_i64(value, key)?.ok_or_else(|| EspnError::missing(key))
}

/// Like [`find_str`] but the field must be present.
pub fn require_str(value: &Value, key: &str) -> Result<String> {
    find_str(value, key)?.ok_or_else(|| EspnError::missing(key))
}
