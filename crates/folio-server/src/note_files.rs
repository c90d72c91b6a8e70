//! Raw note file serving.
//!
//! Serves files from the note root under `/note/`. Resolved image URLs
//! (`note/assets/...`) point here, as do direct note-body fetches.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /note/{*path}.
///
/// The storage backend validates the path, so traversal attempts surface
/// as not-found here rather than escaping the note root.
pub(crate) async fn serve_note_file(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ServerError> {
    let bytes = state
        .storage
        .read_bytes(&path)
        .map_err(|_| ServerError::FileNotFound(path.clone()))?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, folio_assets::mime_for(&path))
        .header(header::CACHE_CONTROL, "no-store")
        .body(Body::from(bytes))
        .unwrap();
    Ok(response)
}
