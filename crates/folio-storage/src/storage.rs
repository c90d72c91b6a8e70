//! Storage trait and error types.
//!
//! Provides the [`Storage`] trait for abstracting note-root access, along
//! with [`StorageError`] for unified error handling across backends.
//!
//! # Name Convention
//!
//! All name/path parameters are paths relative to the note root, exactly as
//! they appear in the manifest or in resolved asset URLs:
//! - `"todo.md"` - a note file
//! - `"assets/cat.png"` - an asset file
//!
//! Backends map these to their internal representation and must reject
//! anything that would escape the root.

use std::path::PathBuf;
use std::time::SystemTime;

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Invalid name or path (empty, rooted, or traversing).
    InvalidPath,
    /// Manifest content could not be parsed.
    Parse,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_path(path)
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }

    /// True when the underlying resource is missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == StorageErrorKind::NotFound
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::InvalidPath => "Invalid path",
            StorageErrorKind::Parse => "Parse error",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Storage abstraction over a note root.
///
/// A note root holds a manifest file listing the notes, the note files
/// themselves, and an `assets/` subdirectory with whatever they reference.
/// Implementations decide where the bytes live; consumers only speak
/// root-relative names.
pub trait Storage: Send + Sync {
    /// Read the manifest and return the note file names it lists.
    ///
    /// Names are returned in manifest order, already filtered: only string
    /// entries naming a `.md` file (case-insensitive) survive. A missing
    /// manifest is a `NotFound` error; a syntactically broken one is a
    /// `Parse` error; a well-formed document that is not a sequence yields
    /// an empty list.
    fn manifest(&self) -> Result<Vec<String>, StorageError>;

    /// Read a note body as UTF-8 text.
    fn read(&self, name: &str) -> Result<String, StorageError>;

    /// Read raw bytes of any file under the note root (assets, mostly).
    fn read_bytes(&self, path: &str) -> Result<Vec<u8>, StorageError>;

    /// Modification time of a file under the note root.
    fn modified(&self, name: &str) -> Result<SystemTime, StorageError>;

    /// Check whether a file exists under the note root.
    ///
    /// Returns `false` on errors (treats errors as "doesn't exist").
    fn exists(&self, name: &str) -> bool;
}
