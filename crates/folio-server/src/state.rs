//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use folio_notebook::Notebook;
use folio_storage::Storage;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Note collection for listing and rendering.
    pub(crate) notebook: Notebook,
    /// Storage backend for raw file access under the note root.
    pub(crate) storage: Arc<dyn Storage>,
}
