//! Structure extraction pipeline.
//!
//! The pipeline walks a conventionally-organized project tree and assembles
//! the structural model bottom-up: the [`modules`] resolver discovers
//! `<name>.<version>` directories under `<project>/services`, the
//! [`services`] resolver visits each service subdirectory, and the
//! [`entities`] and [`enums`] extractors parse the declaration and protocol
//! files. Everything happens through the [`FileSystem`](crate::io::FileSystem)
//! capability, in directory-listing order, so a given tree always produces
//! the same model.

pub mod entities;
pub mod enums;
pub mod modules;
pub mod persistence;
pub mod services;
pub mod types;

use crate::errors::Result;
use crate::io::FileSystem;
use crate::model::{Module, PersistenceKind};
use std::path::Path;

/// Directory under the project root that holds module directories.
const SERVICES_DIR: &str = "services";

/// Tuning knobs for an extraction run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Persistence assigned to entities without any storage marker.
    pub default_persistence: PersistenceKind,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            default_persistence: PersistenceKind::Memory,
        }
    }
}

/// Walks a project tree and produces its structural model.
///
/// Extraction is fail-fast: the first unreadable directory, missing file, or
/// syntax error aborts the run with an error naming the failing path, and no
/// partial model is returned.
#[derive(Debug)]
pub struct StructureExtractor<F: FileSystem> {
    fs: F,
    options: ExtractOptions,
}

impl<F: FileSystem> StructureExtractor<F> {
    /// Create an extractor with default options.
    pub fn new(fs: F) -> Self {
        Self::with_options(fs, ExtractOptions::default())
    }

    /// Create an extractor with explicit options.
    pub fn with_options(fs: F, options: ExtractOptions) -> Self {
        Self { fs, options }
    }

    /// Extract the structural model from `<project_dir>/services`.
    ///
    /// Modules and their services come out in directory-listing order.
    pub fn extract(&self, project_dir: &Path) -> Result<Vec<Module>> {
        let services_root = project_dir.join(SERVICES_DIR);
        let mut modules = modules::resolve(&self.fs, &services_root)?;
        for module in &mut modules {
            let module_dir = services_root.join(module.dir_name());
            let services = services::resolve(
                &self.fs,
                &module_dir,
                module,
                self.options.default_persistence,
            )?;
            module.services = services;
        }
        Ok(modules)
    }
}
