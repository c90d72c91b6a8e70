//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_notebook::NotebookError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// File not found under the note root.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Notebook failure while listing or rendering.
    #[error(transparent)]
    Notebook(#[from] NotebookError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::FileNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "File not found", "path": path}),
            ),
            Self::Notebook(NotebookError::NoteNotFound(name)) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Note not found", "name": name}),
            ),
            Self::Notebook(NotebookError::ManifestUnavailable(e)) => {
                let status = if e.is_not_found() {
                    StatusCode::NOT_FOUND
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                };
                (
                    status,
                    json!({"error": "Note list unavailable", "detail": e.to_string()}),
                )
            }
            Self::Notebook(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": e.to_string()}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
