//! Module discovery under the services root.

use crate::errors::Result;
use crate::io::FileSystem;
use crate::model::Module;
use std::path::Path;

/// Resolve every module directory under `services_root`, in listing order.
///
/// A module directory is named `<name>.<version>`: exactly one dot, both
/// parts non-empty. Directories that do not match are skipped with a debug
/// log line; plain files are ignored outright. Services are left empty here
/// and filled in by the assembler.
pub fn resolve<F: FileSystem>(fs: &F, services_root: &Path) -> Result<Vec<Module>> {
    let mut modules = Vec::new();
    for entry in fs.list_dir(services_root)? {
        if !entry.is_dir {
            continue;
        }
        match parse_dir_name(&entry.name) {
            Some((name, api_version)) => modules.push(Module {
                name: name.to_string(),
                api_version: api_version.to_string(),
                services: vec![],
            }),
            None => log::debug!(
                "skipping {:?}: not a <name>.<version> directory",
                entry.name
            ),
        }
    }
    Ok(modules)
}

fn parse_dir_name(dir_name: &str) -> Option<(&str, &str)> {
    let (name, version) = dir_name.split_once('.')?;
    (!name.is_empty() && !version.is_empty() && !version.contains('.')).then_some((name, version))
}
