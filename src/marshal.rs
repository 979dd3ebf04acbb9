//! Typed JSON helpers shared by the plugin wire protocol and the CLI.

use crate::errors::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialize `value` as a compact JSON string.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Serialize `value` as indented JSON for human consumption.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Parse a JSON string into a typed value.
pub fn from_json<T: DeserializeOwned>(raw: &str) -> Result<T> {
    Ok(serde_json::from_str(raw)?)
}
