//! Mock storage backend for tests.

use std::collections::HashMap;
use std::time::SystemTime;

use crate::manifest;
use crate::storage::{Storage, StorageError, StorageErrorKind};

const BACKEND: &str = "Mock";

/// In-memory storage with builder-style setup.
///
/// ```
/// use folio_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_note("todo.md", "# Todo")
///     .with_file("assets/cat.png", b"png".to_vec());
/// assert_eq!(storage.manifest().unwrap(), vec!["todo.md"]);
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    entries: Vec<String>,
    files: HashMap<String, Vec<u8>>,
    modified: Option<SystemTime>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a note: a manifest entry plus its body.
    #[must_use]
    pub fn with_note(mut self, name: impl Into<String>, body: impl Into<String>) -> Self {
        let name = name.into();
        self.entries.push(name.clone());
        self.files.insert(name, body.into().into_bytes());
        self
    }

    /// Add a manifest entry without a backing file.
    #[must_use]
    pub fn with_entry(mut self, name: impl Into<String>) -> Self {
        self.entries.push(name.into());
        self
    }

    /// Add a raw file (assets, mostly) without a manifest entry.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.files.insert(path.into(), bytes);
        self
    }

    /// Fix the modification time reported for every file.
    #[must_use]
    pub fn with_modified(mut self, time: SystemTime) -> Self {
        self.modified = Some(time);
        self
    }
}

impl Storage for MockStorage {
    fn manifest(&self) -> Result<Vec<String>, StorageError> {
        // Same filtering contract as the filesystem backend.
        Ok(self
            .entries
            .iter()
            .filter(|name| manifest::is_note_name(name))
            .cloned()
            .collect())
    }

    fn read(&self, name: &str) -> Result<String, StorageError> {
        let bytes = self.read_bytes(name)?;
        String::from_utf8(bytes).map_err(|e| {
            StorageError::new(StorageErrorKind::Other)
                .with_backend(BACKEND)
                .with_path(name)
                .with_source(e)
        })
    }

    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::not_found(path).with_backend(BACKEND))
    }

    fn modified(&self, name: &str) -> Result<SystemTime, StorageError> {
        if self.files.contains_key(name) {
            Ok(self.modified.unwrap_or(SystemTime::UNIX_EPOCH))
        } else {
            Err(StorageError::not_found(name).with_backend(BACKEND))
        }
    }

    fn exists(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }
}
