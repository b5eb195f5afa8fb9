//! JSON encoding of the bookmark list for host-side persistence
//!
//! The persisted shape is
//!
//! ```json
//! { "bookmarks": [ { "title": "GitHub", "url": "https://github.com" } ] }
//! ```
//!
//! Decoding is lenient: anything structurally off degrades to empty values
//! instead of failing, so a damaged save never keeps the widget from loading.

use crate::models::bookmark::Bookmark;
use log::{debug, warn};
use serde_json::{json, Map, Value};

/// Top-level key holding the bookmark array
pub const BOOKMARKS_KEY: &str = "bookmarks";
pub const TITLE_KEY: &str = "title";
pub const URL_KEY: &str = "url";

/// Encode bookmarks into the persisted JSON object, keeping their order
pub fn encode(bookmarks: &[Bookmark]) -> Value {
    let entries: Vec<Value> = bookmarks
        .iter()
        .map(|b| json!({ TITLE_KEY: b.title, URL_KEY: b.url }))
        .collect();

    let mut root = Map::new();
    root.insert(BOOKMARKS_KEY.to_string(), Value::Array(entries));
    Value::Object(root)
}

/// Decode bookmarks from a persisted JSON object
///
/// A missing or non-array `bookmarks` entry yields an empty list. Missing or
/// non-string fields become empty strings, and unknown keys are ignored.
pub fn decode(data: &Value) -> Vec<Bookmark> {
    let entries = match data.get(BOOKMARKS_KEY) {
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            warn!(
                "Ignoring '{}' entry of type {}, expected an array",
                BOOKMARKS_KEY,
                type_name(other)
            );
            return Vec::new();
        }
        None => {
            debug!("No '{}' entry in saved state", BOOKMARKS_KEY);
            return Vec::new();
        }
    };

    let bookmarks: Vec<Bookmark> = entries
        .iter()
        .map(|entry| Bookmark {
            title: string_field(entry, TITLE_KEY),
            url: string_field(entry, URL_KEY),
        })
        .collect();

    debug!("Decoded {} bookmarks", bookmarks.len());
    bookmarks
}

fn string_field(entry: &Value, key: &str) -> String {
    entry
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
