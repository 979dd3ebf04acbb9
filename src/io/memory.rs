//! In-memory file system for tests and benches.
//!
//! [`MemoryFileSystem`] implements [`FileSystem`] over a map of path →
//! content. Adding a file registers all its ancestor directories, so a whole
//! fixture tree can be described file by file:
//!
//! ```rust,ignore
//! use servicemap::io::MemoryFileSystem;
//!
//! let fs = MemoryFileSystem::new()
//!     .with_file("services/billing.v1/invoices/models/models.go", "package models")
//!     .with_file("services/billing.v1/invoices/proto/billing_v1_invoices.proto", "");
//!
//! assert!(fs.is_dir("services/billing.v1".as_ref()));
//! ```
//!
//! # Thread Safety
//!
//! `MemoryFileSystem` is `Send + Sync + Clone`; clones share the same
//! underlying tree through `Arc<RwLock<_>>`.

use crate::errors::{Error, Result};
use crate::io::traits::{DirEntry, FileSystem};
use std::collections::{BTreeSet, HashMap};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// In-memory [`FileSystem`] implementation with a fluent builder API.
#[derive(Clone, Default)]
pub struct MemoryFileSystem {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
    dirs: Arc<RwLock<BTreeSet<PathBuf>>>,
    env: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryFileSystem {
    /// Create a new empty in-memory file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, registering every ancestor directory along the way.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        self.register_ancestors(&path);
        self.files
            .write()
            .expect("Lock poisoned")
            .insert(path, content.into());
        self
    }

    /// Add multiple files at once.
    pub fn with_files<'a>(mut self, files: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        for (path, content) in files {
            self = self.with_file(path, content);
        }
        self
    }

    /// Add an empty directory (and its ancestors).
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.register_ancestors(&path);
        self.dirs.write().expect("Lock poisoned").insert(path);
        self
    }

    /// Set an environment variable visible through [`FileSystem::env_var`].
    pub fn with_env(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.env
            .write()
            .expect("Lock poisoned")
            .insert(name.into(), value.into());
        self
    }

    fn register_ancestors(&self, path: &Path) {
        let mut dirs = self.dirs.write().expect("Lock poisoned");
        let mut current = path.parent();
        while let Some(dir) = current {
            if dir.as_os_str().is_empty() {
                break;
            }
            dirs.insert(dir.to_path_buf());
            current = dir.parent();
        }
    }
}

impl std::fmt::Debug for MemoryFileSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file_count = self.files.read().map(|f| f.len()).unwrap_or(0);
        f.debug_struct("MemoryFileSystem")
            .field("file_count", &file_count)
            .finish_non_exhaustive()
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.files
            .read()
            .expect("Lock poisoned")
            .get(path)
            .cloned()
            .ok_or_else(|| {
                Error::file_access(path, io::Error::new(io::ErrorKind::NotFound, "file not found"))
            })
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        if !self.is_dir(path) {
            return Err(Error::directory_read(
                path,
                io::Error::new(io::ErrorKind::NotFound, "directory not found"),
            ));
        }

        let mut entries = Vec::new();
        for dir in self.dirs.read().expect("Lock poisoned").iter() {
            if dir.parent() == Some(path) {
                if let Some(name) = dir.file_name() {
                    entries.push(DirEntry::dir(name.to_string_lossy().into_owned()));
                }
            }
        }
        for file in self.files.read().expect("Lock poisoned").keys() {
            if file.parent() == Some(path) {
                if let Some(name) = file.file_name() {
                    entries.push(DirEntry::file(name.to_string_lossy().into_owned()));
                }
            }
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.read().expect("Lock poisoned").contains_key(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.read().expect("Lock poisoned").contains(path)
    }

    fn env_var(&self, name: &str) -> Option<String> {
        self.env.read().expect("Lock poisoned").get(name).cloned()
    }
}
