//! Shared error types for structure extraction and the surrounding toolchain.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for servicemap operations.
///
/// Extraction is fail-fast: every stage returns the first error it hits and
/// the assembler surfaces it unchanged, so each variant carries enough context
/// (path, name, action) to localize the failure without a backtrace.
#[derive(Debug, Error)]
pub enum Error {
    /// Listing a services root, module, or service directory failed.
    #[error("failed to list directory {path}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A declaration or protocol file is missing or unreadable.
    #[error("cannot access {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A declaration or protocol file has invalid syntax.
    #[error("parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A directory or file name does not match the expected convention.
    ///
    /// For module directories this is a skip, not an error; it becomes fatal
    /// where a convention-derived path must be constructed (for example a
    /// version string that cannot be sliced into letter and digit parts).
    #[error("{name:?} in {path} does not match the {expected} convention")]
    ConventionMismatch {
        path: PathBuf,
        name: String,
        expected: &'static str,
    },

    /// The YAML project descriptor is missing, malformed, or invalid.
    #[error("invalid project descriptor {path}: {message}")]
    Descriptor { path: PathBuf, message: String },

    /// Plugin discovery or communication failed.
    #[error("plugin error: {0}")]
    Plugin(String),

    /// An external command could not be run or exited non-zero.
    #[error("failed {action}: {message}")]
    Execution { action: String, message: String },

    /// JSON errors from the marshalling helpers.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a directory listing error with path context.
    pub fn directory_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryRead {
            path: path.into(),
            source,
        }
    }

    /// Create a file access error with path context.
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error for a declaration or protocol file.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a convention mismatch for a name found at `path`.
    pub fn convention(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::ConventionMismatch {
            path: path.into(),
            name: name.into(),
            expected,
        }
    }

    /// Create a descriptor error with path context.
    pub fn descriptor(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Descriptor {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an execution error for a named action.
    pub fn execution(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Execution {
            action: action.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using our error type.
pub type Result<T> = std::result::Result<T, Error>;
