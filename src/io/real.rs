//! Production implementations of the I/O traits.
//!
//! [`RealFileSystem`] delegates straight to `std::fs` and `std::env`. For
//! tests, use [`MemoryFileSystem`](crate::io::memory::MemoryFileSystem)
//! instead.

use crate::errors::{Error, Result};
use crate::io::traits::{DirEntry, FileSystem};
use std::fs;
use std::path::Path;

/// Production file system implementation.
///
/// Thread-safe and trivially cloneable; it carries no state.
#[derive(Debug, Default, Clone)]
pub struct RealFileSystem;

impl RealFileSystem {
    /// Create a new real file system instance.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| Error::file_access(path, e))
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| Error::directory_read(path, e))? {
            let entry = entry.map_err(|e| Error::directory_read(path, e))?;
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        // Platforms report entries in arbitrary order; the walk relies on a
        // stable one.
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
