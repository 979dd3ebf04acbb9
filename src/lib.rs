// Export modules for library usage
pub mod cases;
pub mod cli;
pub mod config;
pub mod descriptor;
pub mod errors;
pub mod execute;
pub mod extract;
pub mod io;
pub mod marshal;
pub mod model;
pub mod plugins;
pub mod testkit;

// Re-export commonly used types
pub use crate::errors::{Error, Result};
pub use crate::extract::{ExtractOptions, StructureExtractor};
pub use crate::model::{Entity, Enum, Field, FieldKind, Module, PersistenceKind, Project, Service};
