//! Service resolution inside one module directory.

use crate::cases;
use crate::errors::{Error, Result};
use crate::extract::{entities, enums};
use crate::io::FileSystem;
use crate::model::{Module, PersistenceKind, Service};
use std::path::Path;

/// Directory holding a service's declaration file.
const MODELS_DIR: &str = "models";
/// The declaration file inside [`MODELS_DIR`].
const MODELS_FILE: &str = "models.go";
/// Directory holding a service's protocol file.
const PROTO_DIR: &str = "proto";

const VERSION_CONVENTION: &str = "version";

/// Resolve every service under `module_dir`, in listing order.
///
/// Each immediate subdirectory is one service; plain files are ignored.
/// The protocol file is read first, then the declaration file, and the
/// first extractor error aborts the module.
pub fn resolve<F: FileSystem>(
    fs: &F,
    module_dir: &Path,
    module: &Module,
    default_persistence: PersistenceKind,
) -> Result<Vec<Service>> {
    let mut services = Vec::new();
    for entry in fs.list_dir(module_dir)? {
        if !entry.is_dir {
            continue;
        }
        services.push(resolve_service(
            fs,
            module_dir,
            module,
            &entry.name,
            default_persistence,
        )?);
    }
    Ok(services)
}

fn resolve_service<F: FileSystem>(
    fs: &F,
    module_dir: &Path,
    module: &Module,
    service_name: &str,
    default_persistence: PersistenceKind,
) -> Result<Service> {
    let service_dir = module_dir.join(service_name);

    let proto_path = service_dir
        .join(PROTO_DIR)
        .join(protocol_file_name(module_dir, module, service_name)?);
    let proto_source = fs.read_to_string(&proto_path)?;
    let enums = enums::extract(&proto_path, &proto_source)?;

    let declaration_path = service_dir.join(MODELS_DIR).join(MODELS_FILE);
    let declaration_source = fs.read_to_string(&declaration_path)?;
    let entities = entities::extract(&declaration_path, &declaration_source, default_persistence)?;

    Ok(Service {
        name: service_name.to_string(),
        enums,
        entities,
    })
}

/// Derive the protocol file name for a service of `module`.
///
/// The module name, version letter, version digits, and service name are
/// glued together and snake-cased, so `billing.v1`/`invoices` yields
/// `billing_v1_invoices.proto`. A version that does not slice into one
/// ASCII letter plus digits is a [`Error::ConventionMismatch`] naming
/// `module_dir` as the location of the offending version.
pub fn protocol_file_name(
    module_dir: &Path,
    module: &Module,
    service_name: &str,
) -> Result<String> {
    let (letter, digits) = version_parts(&module.api_version).ok_or_else(|| {
        Error::convention(module_dir, module.api_version.as_str(), VERSION_CONVENTION)
    })?;
    Ok(format!(
        "{}.proto",
        cases::snake(&format!(
            "{}_{}{}{}",
            module.name, letter, digits, service_name
        ))
    ))
}

fn version_parts(version: &str) -> Option<(char, &str)> {
    let mut chars = version.chars();
    let letter = chars.next()?;
    let digits = chars.as_str();
    (letter.is_ascii_alphabetic()
        && !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit()))
    .then_some((letter, digits))
}
