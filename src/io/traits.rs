//! I/O trait definitions for extraction operations.
//!
//! The extraction walk never touches `std::fs` directly; every directory
//! listing and file read goes through the [`FileSystem`] trait. This keeps
//! the pipeline deterministic and lets tests and benches run against an
//! in-memory tree instead of a real one.

use crate::errors::Result;
use std::path::Path;

/// A single entry returned by [`FileSystem::list_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Final path component, without the parent.
    pub name: String,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

impl DirEntry {
    /// Create a directory entry.
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    /// Create a file entry.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }
}

/// File system operations trait.
///
/// This trait abstracts over the file system, enabling:
/// - Unit testing with an in-memory file system
/// - Sandboxed or read-only access in embedding tools
///
/// # Implementation Notes
///
/// Implementations should be thread-safe (`Send + Sync`) so an extractor can
/// be shared across threads by embedding callers. `list_dir` must return
/// entries sorted by name; the walk order of the whole pipeline rests on that
/// guarantee.
pub trait FileSystem: Send + Sync {
    /// Read a file's contents as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileAccess`](crate::errors::Error::FileAccess) if the
    /// file doesn't exist, permission is denied, or the content isn't valid
    /// UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// List the immediate entries of a directory, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryRead`](crate::errors::Error::DirectoryRead)
    /// if the directory doesn't exist or can't be read.
    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// Check if a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Look up a process environment variable.
    ///
    /// Plugin discovery reads its search path from the environment; routing
    /// the lookup through this trait keeps that path under test control.
    fn env_var(&self, name: &str) -> Option<String>;
}
