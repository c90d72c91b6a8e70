//! Note collection built on pluggable storage.
//!
//! A [`Notebook`] ties a [`folio_storage::Storage`] backend to the markdown
//! renderer: [`Notebook::list`] returns the manifest as display entries and
//! [`Notebook::render`] turns one note into HTML with image paths resolved.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use folio_notebook::Notebook;
//! use folio_storage::MockStorage;
//!
//! let storage = MockStorage::new().with_note("hello.md", "# Hello");
//! let notebook = Notebook::new(Arc::new(storage));
//!
//! let entries = notebook.list()?;
//! assert_eq!(entries[0].title, "hello");
//!
//! let note = notebook.render("hello.md")?;
//! assert_eq!(note.html, "<h1>Hello</h1>");
//! # Ok::<(), folio_notebook::NotebookError>(())
//! ```

mod notebook;

pub use notebook::{Notebook, NotebookError, NoteEntry, RenderedNote, note_title};
