//! Wire types shared with generator plugins.
//!
//! Field names stay PascalCase on the wire for compatibility with the
//! Go-built generator binaries.

use serde::{Deserialize, Serialize};

/// Request handed to a plugin as its single process argument, as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PluginRequest {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl PluginRequest {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }
}

/// Envelope a plugin falls back to when it cannot produce the requested
/// result type. A non-empty `error` carries the plugin's own message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PluginResponse {
    pub result: String,
    #[serde(default)]
    pub error: String,
}
