//! The note collection: listing and rendering.

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::SystemTime;

use folio_renderer::{DEFAULT_NOTE_ROOT, HtmlBackend, ImageResolver, MarkdownRenderer};
use folio_storage::{Storage, StorageError, StorageErrorKind};

/// One manifest entry, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    /// File name as listed in the manifest.
    pub name: String,
    /// Display title: the file name without its `.md` suffix.
    pub title: String,
}

/// A rendered note plus file metadata.
#[derive(Debug, Clone)]
pub struct RenderedNote {
    pub name: String,
    pub title: String,
    pub html: String,
    /// Modification time of the source file, when the backend knows it.
    pub modified: Option<SystemTime>,
}

/// Errors from listing or rendering notes.
#[derive(Debug, thiserror::Error)]
pub enum NotebookError {
    /// Manifest missing or unreadable.
    #[error("note list unavailable: {0}")]
    ManifestUnavailable(#[source] StorageError),
    /// The named note has no readable body.
    #[error("note not found: {0}")]
    NoteNotFound(String),
    /// Underlying storage failure.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A notebook over some storage.
///
/// Stateless between calls: every list and render goes back to storage and
/// re-renders, so edits on disk show up on the next request.
pub struct Notebook {
    storage: Arc<dyn Storage>,
    note_root: String,
}

impl Notebook {
    /// Notebook reading through `storage`, resolving images under the
    /// default `note/` prefix.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            note_root: DEFAULT_NOTE_ROOT.to_owned(),
        }
    }

    /// Override the URL prefix image references resolve under.
    #[must_use]
    pub fn with_note_root(mut self, note_root: impl Into<String>) -> Self {
        self.note_root = note_root.into();
        self
    }

    /// List notes for display.
    ///
    /// Storage has already filtered the manifest down to `.md` names; this
    /// orders them for display and derives titles.
    pub fn list(&self) -> Result<Vec<NoteEntry>, NotebookError> {
        let mut names = self
            .storage
            .manifest()
            .map_err(NotebookError::ManifestUnavailable)?;
        names.sort_by(|a, b| compare_names(a, b));
        Ok(names
            .into_iter()
            .map(|name| {
                let title = note_title(&name).to_owned();
                NoteEntry { name, title }
            })
            .collect())
    }

    /// Render one note to HTML.
    pub fn render(&self, name: &str) -> Result<RenderedNote, NotebookError> {
        let body = self.storage.read(name).map_err(|e| match e.kind {
            StorageErrorKind::NotFound | StorageErrorKind::InvalidPath => {
                NotebookError::NoteNotFound(name.to_owned())
            }
            _ => NotebookError::Storage(e),
        })?;
        let modified = self.storage.modified(name).ok();
        let html = self.create_renderer().render_markdown(&body);
        tracing::debug!(note = name, bytes = html.len(), "note rendered");
        Ok(RenderedNote {
            name: name.to_owned(),
            title: note_title(name).to_owned(),
            html,
            modified,
        })
    }

    /// Create a renderer with common configuration.
    fn create_renderer(&self) -> MarkdownRenderer<HtmlBackend> {
        let resolver = ImageResolver::new(self.note_root.clone());
        MarkdownRenderer::new(HtmlBackend::new(resolver)).with_gfm(true)
    }
}

/// Display title for a note file name: the `.md` suffix dropped, ASCII
/// case-insensitively. Names without the suffix come back unchanged.
pub fn note_title(name: &str) -> &str {
    let bytes = name.as_bytes();
    if bytes.len() >= 3 && bytes[bytes.len() - 3..].eq_ignore_ascii_case(b".md") {
        &name[..name.len() - 3]
    } else {
        name
    }
}

/// Case-insensitive code point ordering, original spelling as tiebreaker.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
