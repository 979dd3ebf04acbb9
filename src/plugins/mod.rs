//! Generator plugin discovery and communication.
//!
//! Plugins are standalone binaries installed in the Go binary directory and
//! named `servicemap-plugin-<name>-<version>`. Discovery lists that
//! directory; [`comms::call`] runs a plugin with a JSON request and decodes
//! its reply.

pub mod api;
pub mod comms;

use crate::errors::{Error, Result};
use crate::execute::Executor;
use crate::io::FileSystem;
use std::path::{Path, PathBuf};

/// Environment variable that pins the plugin directory.
const GO_BIN_ENV: &str = "GOBIN";
const PLUGIN_SEPARATOR: char = '-';
const PLUGIN_FIRST_WORD: &str = "servicemap";
const PLUGIN_SECOND_WORD: &str = "plugin";

/// A discovered generator plugin binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugin {
    /// Full file name, `servicemap-plugin-<name>-<version>`.
    pub name: String,
    /// Path to the binary inside the plugin directory.
    pub path: PathBuf,
}

/// Discover generator plugins in the Go binary directory.
///
/// The directory is `$GOBIN` when set and non-empty, otherwise
/// `go env GOPATH` plus `bin`. Only plain files whose names split on `-`
/// into exactly four parts with the `servicemap-plugin` prefix qualify.
pub fn discover<F: FileSystem, E: Executor>(fs: &F, executor: &E) -> Result<Vec<Plugin>> {
    let bin_dir = plugin_dir(fs, executor)?;
    let entries = fs.list_dir(&bin_dir).map_err(|e| {
        Error::Plugin(format!(
            "cannot read plugin directory {}: {e}",
            bin_dir.display()
        ))
    })?;

    let mut plugins = Vec::new();
    for entry in entries {
        if entry.is_dir || !is_plugin_name(&entry.name) {
            continue;
        }
        let path = bin_dir.join(&entry.name);
        plugins.push(Plugin {
            name: entry.name,
            path,
        });
    }
    Ok(plugins)
}

fn plugin_dir<F: FileSystem, E: Executor>(fs: &F, executor: &E) -> Result<PathBuf> {
    if let Some(gobin) = fs.env_var(GO_BIN_ENV).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(gobin));
    }
    if !executor.command_exists("go") {
        return Err(Error::Plugin(
            "GOBIN is unset and no go toolchain is on the PATH".into(),
        ));
    }
    let gopath = executor.output("go", &["env", "GOPATH"], Path::new("."), "getting GOPATH")?;
    Ok(PathBuf::from(gopath.trim_end()).join("bin"))
}

fn is_plugin_name(file_name: &str) -> bool {
    let parts: Vec<&str> = file_name.split(PLUGIN_SEPARATOR).collect();
    parts.len() == 4 && parts[0] == PLUGIN_FIRST_WORD && parts[1] == PLUGIN_SECOND_WORD
}
