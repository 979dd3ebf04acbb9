//! Optional `.servicemap.toml` configuration.
//!
//! The config file only feeds the CLI; library callers pass
//! [`ExtractOptions`] explicitly.

use crate::extract::ExtractOptions;
use crate::io::FileSystem;
use crate::model::PersistenceKind;
use serde::Deserialize;
use std::path::Path;

/// File name looked up in the project root.
pub const CONFIG_FILE: &str = ".servicemap.toml";

/// Root of `.servicemap.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub extract: ExtractConfig,
}

/// The `[extract]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Persistence for entities without a storage marker.
    #[serde(default)]
    pub default_persistence: Option<PersistenceKind>,
}

impl Config {
    /// Load `<project_dir>/.servicemap.toml`, falling back to defaults.
    ///
    /// A missing file is simply the default configuration; a malformed one
    /// logs a warning and falls back rather than failing the run.
    pub fn load<F: FileSystem>(fs: &F, project_dir: &Path) -> Self {
        let path = project_dir.join(CONFIG_FILE);
        let Ok(raw) = fs.read_to_string(&path) else {
            return Self::default();
        };
        match toml::from_str(&raw) {
            Ok(config) => {
                log::debug!("loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("ignoring malformed {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Extraction options with configured overrides applied.
    pub fn extract_options(&self) -> ExtractOptions {
        let mut options = ExtractOptions::default();
        if let Some(persistence) = self.extract.default_persistence {
            options.default_persistence = persistence;
        }
        options
    }
}
