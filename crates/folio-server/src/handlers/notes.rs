//! Notes API endpoints.
//!
//! Lists the note collection and renders individual notes, returning JSON
//! responses with metadata and HTML content.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use folio_notebook::NoteEntry;
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::no_store;
use crate::state::AppState;

/// Response for GET /api/notes.
#[derive(Serialize)]
struct NoteListResponse {
    /// Notes in display order.
    notes: Vec<NoteEntryResponse>,
}

/// One note list entry.
#[derive(Serialize)]
struct NoteEntryResponse {
    /// File name, used as the fetch key.
    name: String,
    /// Display title (file name without the `.md` suffix).
    title: String,
}

impl From<NoteEntry> for NoteEntryResponse {
    fn from(entry: NoteEntry) -> Self {
        Self {
            name: entry.name,
            title: entry.title,
        }
    }
}

/// Response for GET /api/notes/{name}.
#[derive(Serialize)]
struct NoteResponse {
    /// Note metadata.
    meta: NoteMeta,
    /// Rendered HTML content.
    content: String,
}

/// Note metadata.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NoteMeta {
    /// File name as listed in the manifest.
    name: String,
    /// Display title.
    title: String,
    /// Last modification time (ISO 8601), when the backend knows it.
    #[serde(skip_serializing_if = "Option::is_none")]
    last_modified: Option<String>,
}

/// Handle GET /api/notes.
pub(crate) async fn list_notes(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let notes = state.notebook.list()?;
    tracing::debug!(notes = notes.len(), "note list requested");

    let response = NoteListResponse {
        notes: notes.into_iter().map(NoteEntryResponse::from).collect(),
    };
    Ok((no_store(), Json(response)))
}

/// Handle GET /api/notes/{name}.
pub(crate) async fn get_note(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let note = state.notebook.render(&name)?;

    let last_modified = note.modified.map(|mtime| {
        let utc: DateTime<Utc> = mtime.into();
        utc.to_rfc3339()
    });

    let response = NoteResponse {
        meta: NoteMeta {
            name: note.name,
            title: note.title,
            last_modified,
        },
        content: note.html,
    };

    Ok((no_store(), Json(response)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_list_serialization() {
        let response = NoteListResponse {
            notes: vec![NoteEntryResponse {
                name: "todo.md".to_string(),
                title: "todo".to_string(),
            }],
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["notes"][0]["name"], "todo.md");
        assert_eq!(json["notes"][0]["title"], "todo");
    }

    #[test]
    fn test_note_meta_serialization() {
        let meta = NoteMeta {
            name: "weekly.md".to_string(),
            title: "weekly".to_string(),
            last_modified: Some("2025-01-01T00:00:00+00:00".to_string()),
        };

        let json = serde_json::to_value(&meta).unwrap();

        assert_eq!(json["name"], "weekly.md");
        assert_eq!(json["title"], "weekly");
        assert_eq!(json["lastModified"], "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_note_meta_omits_unknown_mtime() {
        let meta = NoteMeta {
            name: "weekly.md".to_string(),
            title: "weekly".to_string(),
            last_modified: None,
        };

        let json = serde_json::to_value(&meta).unwrap();

        assert!(json.get("lastModified").is_none());
    }

    #[test]
    fn test_note_response_shape() {
        let response = NoteResponse {
            meta: NoteMeta {
                name: "a.md".to_string(),
                title: "a".to_string(),
                last_modified: None,
            },
            content: "<p>hi</p>".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["meta"]["name"], "a.md");
        assert_eq!(json["content"], "<p>hi</p>");
    }
}
