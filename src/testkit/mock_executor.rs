//! Scripted [`Executor`] for tests.

use crate::errors::Result;
use crate::execute::Executor;
use std::collections::{HashSet, VecDeque};
use std::path::Path;
use std::sync::Mutex;

/// [`Executor`] that replays queued results instead of running processes.
///
/// Results are consumed in order; once the queue is empty, calls succeed
/// with an empty string. Every `action` label is recorded so tests can
/// assert which steps ran.
#[derive(Default)]
pub struct MockExecutor {
    results: Mutex<VecDeque<Result<String>>>,
    commands: Mutex<HashSet<String>>,
    history: Mutex<Vec<String>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful output for the next call.
    pub fn with_output(self, output: impl Into<String>) -> Self {
        self.results
            .lock()
            .expect("Lock poisoned")
            .push_back(Ok(output.into()));
        self
    }

    /// Queue an error for the next call.
    pub fn with_error(self, error: crate::errors::Error) -> Self {
        self.results
            .lock()
            .expect("Lock poisoned")
            .push_back(Err(error));
        self
    }

    /// Mark `program` as present on the mock `PATH`.
    pub fn with_command(self, program: impl Into<String>) -> Self {
        self.commands
            .lock()
            .expect("Lock poisoned")
            .insert(program.into());
        self
    }

    /// Action labels from every call so far, in order.
    pub fn history(&self) -> Vec<String> {
        self.history.lock().expect("Lock poisoned").clone()
    }
}

impl std::fmt::Debug for MockExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let queued = self.results.lock().map(|r| r.len()).unwrap_or(0);
        f.debug_struct("MockExecutor")
            .field("queued", &queued)
            .finish_non_exhaustive()
    }
}

impl Executor for MockExecutor {
    fn output(&self, _program: &str, _args: &[&str], _dir: &Path, action: &str) -> Result<String> {
        self.history
            .lock()
            .expect("Lock poisoned")
            .push(action.to_string());
        self.results
            .lock()
            .expect("Lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }

    fn command_exists(&self, program: &str) -> bool {
        self.commands
            .lock()
            .expect("Lock poisoned")
            .contains(program)
    }
}
