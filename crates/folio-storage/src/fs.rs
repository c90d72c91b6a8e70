//! Filesystem storage backend.

use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

use crate::manifest::{self, MANIFEST_FILE};
use crate::storage::{Storage, StorageError, StorageErrorKind};

const BACKEND: &str = "Fs";

/// Storage over a note directory on disk.
///
/// The root holds the manifest, the note files, and the `assets/`
/// subdirectory. Every incoming name is validated before use: only plain
/// relative paths are accepted, so a crafted `../` name can never read
/// outside the root.
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
    manifest_file: String,
}

impl FsStorage {
    /// Storage rooted at `root`, with the default manifest name.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            manifest_file: MANIFEST_FILE.to_owned(),
        }
    }

    /// Override the manifest file name.
    #[must_use]
    pub fn with_manifest_file(mut self, name: impl Into<String>) -> Self {
        self.manifest_file = name.into();
        self
    }

    /// The note root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a root-relative name to a filesystem path.
    ///
    /// Rejects empty names, rooted paths, and anything containing `..` or
    /// other non-normal components.
    fn validate_path(&self, name: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(name);
        let is_plain_relative = !name.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if is_plain_relative {
            Ok(self.root.join(relative))
        } else {
            Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_backend(BACKEND)
                .with_path(name))
        }
    }
}

impl Storage for FsStorage {
    fn manifest(&self) -> Result<Vec<String>, StorageError> {
        let path = self.root.join(&self.manifest_file);
        let raw = std::fs::read_to_string(&path)
            .map_err(|e| StorageError::io(e, Some(path.clone())).with_backend(BACKEND))?;
        let doc: serde_json::Value = serde_json::from_str(&raw).map_err(|e| {
            StorageError::new(StorageErrorKind::Parse)
                .with_backend(BACKEND)
                .with_path(path.clone())
                .with_source(e)
        })?;
        let names = manifest::note_names(&doc);
        tracing::debug!(manifest = %path.display(), notes = names.len(), "manifest loaded");
        Ok(names)
    }

    fn read(&self, name: &str) -> Result<String, StorageError> {
        let path = self.validate_path(name)?;
        std::fs::read_to_string(&path)
            .map_err(|e| StorageError::io(e, Some(path)).with_backend(BACKEND))
    }

    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.validate_path(path)?;
        std::fs::read(&path).map_err(|e| StorageError::io(e, Some(path)).with_backend(BACKEND))
    }

    fn modified(&self, name: &str) -> Result<SystemTime, StorageError> {
        let path = self.validate_path(name)?;
        let metadata = std::fs::metadata(&path)
            .map_err(|e| StorageError::io(e, Some(path.clone())).with_backend(BACKEND))?;
        metadata
            .modified()
            .map_err(|e| StorageError::io(e, Some(path)).with_backend(BACKEND))
    }

    fn exists(&self, name: &str) -> bool {
        self.validate_path(name).is_ok_and(|path| path.is_file())
    }
}
