//! YAML project descriptor.
//!
//! A descriptor bootstraps a generator run: it names the project and the
//! modules/services a generator should target, in the same shape the
//! structure extractor produces. Loading validates the names so downstream
//! code never sees an unnamed module or service.

use crate::errors::{Error, Result};
use crate::io::FileSystem;
use crate::model::Project;
use std::path::Path;

/// Load and validate a project descriptor.
///
/// Missing file, malformed YAML, and failed validation all surface as
/// [`Error::Descriptor`] naming the path.
pub fn load<F: FileSystem>(fs: &F, path: &Path) -> Result<Project> {
    let raw = match fs.read_to_string(path) {
        Ok(raw) => raw,
        Err(Error::FileAccess { source, .. }) => {
            return Err(Error::descriptor(path, source.to_string()))
        }
        Err(e) => return Err(e),
    };
    let project: Project =
        serde_yaml::from_str(&raw).map_err(|e| Error::descriptor(path, e.to_string()))?;
    validate(&project).map_err(|message| Error::descriptor(path, message))?;
    Ok(project)
}

fn validate(project: &Project) -> std::result::Result<(), String> {
    if project.name.trim().is_empty() {
        return Err("project name is empty".into());
    }
    for module in &project.modules {
        if module.name.trim().is_empty() {
            return Err("module with empty name".into());
        }
        if module.api_version.trim().is_empty() {
            return Err(format!("module {:?} has no version", module.name));
        }
        for service in &module.services {
            if service.name.trim().is_empty() {
                return Err(format!(
                    "module {:?} has a service with no name",
                    module.name
                ));
            }
        }
    }
    Ok(())
}
