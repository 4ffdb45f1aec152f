// Response shape normalization.
//
// The backend answers list fetches in one of several shapes depending on
// the endpoint and its build: a bare array, a `{"data": [...]}` envelope,
// or a domain-keyed envelope (`{"modules": [...]}`). Every screen used to
// re-probe these inline; this is the one shared implementation.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Extract the canonical item array from a list response.
///
/// - A bare array is returned as-is.
/// - Otherwise each key in `array_keys` is probed in order and the first
///   array found wins.
/// - Anything else yields an empty vec. Never an error and never a
///   non-array, so callers can iterate unconditionally.
pub fn normalize(response: &Value, array_keys: &[&str]) -> Vec<Value> {
    if let Some(items) = response.as_array() {
        return items.clone();
    }

    for key in array_keys {
        if let Some(items) = response.get(key).and_then(Value::as_array) {
            return items.clone();
        }
    }

    Vec::new()
}

/// Normalize and deserialize into domain records.
///
/// Elements that do not fit `T` are skipped rather than failing the whole
/// load; a malformed row from the backend must never take the screen down.
pub fn normalize_into<T: DeserializeOwned>(response: &Value, array_keys: &[&str]) -> Vec<T> {
    normalize(response, array_keys)
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(error = %err, "skipping malformed list element");
                None
            }
        })
        .collect()
}
