//! Process execution behind a mockable seam.

use crate::errors::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Runs external commands for the toolchain.
///
/// `action` is a short human-readable label ("getting GOPATH") used in error
/// messages. Stdout is returned as captured, trailing newline included;
/// callers trim where it matters.
pub trait Executor {
    /// Run `program` with `args` in `dir` and return its stdout.
    fn output(&self, program: &str, args: &[&str], dir: &Path, action: &str) -> Result<String>;

    /// Whether `program` resolves to an executable on the current `PATH`.
    fn command_exists(&self, program: &str) -> bool;
}

/// [`Executor`] backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandExecutor;

impl CommandExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for CommandExecutor {
    fn output(&self, program: &str, args: &[&str], dir: &Path, action: &str) -> Result<String> {
        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| Error::execution(action, format!("cannot run {program}: {e}")))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::execution(
                action,
                format!("{program} exited with {}: {}", output.status, stderr.trim()),
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn command_exists(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
