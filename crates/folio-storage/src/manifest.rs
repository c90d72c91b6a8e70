//! Manifest parsing and filtering.
//!
//! The manifest is a JSON document at a fixed name under the note root,
//! expected to be an array of note file names. Authors hand-edit it, so
//! parsing is forgiving: anything that is not a string naming a `.md` file
//! is skipped, and a document that is not an array at all is treated as an
//! empty list rather than an error.

use serde_json::Value;

/// Default manifest file name under the note root.
pub const MANIFEST_FILE: &str = "index.json";

/// Extract note file names from a parsed manifest document, in order.
pub(crate) fn note_names(doc: &Value) -> Vec<String> {
    let Some(entries) = doc.as_array() else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(Value::as_str)
        .filter(|name| is_note_name(name))
        .map(str::to_owned)
        .collect()
}

/// `.md` suffix test, ASCII case-insensitive.
pub(crate) fn is_note_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= 3 && bytes[bytes.len() - 3..].eq_ignore_ascii_case(b".md")
}
