//! Storage abstraction over the note root.
//!
//! A note root is a directory holding an `index.json` manifest, the note
//! files it lists, and an `assets/` subdirectory for images. The
//! [`Storage`] trait hides where those bytes live; [`FsStorage`] is the
//! disk-backed implementation and [`MockStorage`] (feature `mock`) backs
//! tests.
//!
//! Manifest reading is deliberately forgiving: non-string entries and
//! non-`.md` names are filtered out rather than rejected, and a manifest
//! that is not a JSON array yields an empty note list.

mod fs;
mod manifest;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStorage;
pub use manifest::MANIFEST_FILE;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Storage, StorageError, StorageErrorKind};
