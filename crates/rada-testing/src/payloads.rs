//! Sample payload builders in the backend's observed response shapes.

use serde_json::{Value, json};

/// A buddy record as the API serializes it.
pub fn buddy(id: &str, username: &str, online: bool, friend: bool, level: u32) -> Value {
    json!({
        "id": id,
        "username": username,
        "level": level,
        "isOnline": online,
        "isFriend": friend
    })
}

/// A study group record as the API serializes it.
pub fn group(id: &str, name: &str, category: &str, joined: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "category": category,
        "isJoined": joined
    })
}

/// A notification record as the API serializes it.
pub fn notification(id: &str, title: &str, read: bool) -> Value {
    json!({
        "id": id,
        "title": title,
        "isRead": read
    })
}

/// A learning module record as the API serializes it.
pub fn module(id: &str, title: &str, progress_pct: u32) -> Value {
    json!({
        "id": id,
        "title": title,
        "progressPct": progress_pct
    })
}

/// Wrap items in the generic `{"data": [...]}` envelope.
pub fn data_envelope(items: Vec<Value>) -> Value {
    json!({ "data": items })
}

/// Wrap items in a domain-keyed envelope (`{"modules": [...]}` style).
pub fn keyed_envelope(key: &str, items: Vec<Value>) -> Value {
    json!({ key: items })
}

/// A bare-array response.
pub fn bare_array(items: Vec<Value>) -> Value {
    Value::Array(items)
}
