//! Calling a generator plugin and decoding its reply.

use crate::errors::{Error, Result};
use crate::execute::Executor;
use crate::marshal;
use crate::plugins::api::{PluginRequest, PluginResponse};
use crate::plugins::Plugin;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Invoke `plugin` with `request` and decode its stdout as `T`.
///
/// A plugin that cannot answer replies with a [`PluginResponse`] envelope
/// instead: a non-empty `error` becomes the returned error, and an envelope
/// without one means the plugin answered with the wrong type. Output that is
/// neither `T` nor an envelope is reported verbatim.
pub fn call<T, E>(plugin: &Plugin, request: &PluginRequest, executor: &E) -> Result<T>
where
    T: DeserializeOwned,
    E: Executor,
{
    let payload = marshal::to_json(request)?;
    let program = plugin.path.to_string_lossy();
    let action = format!("calling plugin {}", plugin.name);
    let raw = executor.output(&program, &[&payload], Path::new("."), &action)?;

    match marshal::from_json::<T>(&raw) {
        Ok(value) => Ok(value),
        Err(_) => {
            let response: PluginResponse = marshal::from_json(&raw).map_err(|_| {
                Error::Plugin(format!(
                    "unexpected output from plugin {}: {}",
                    plugin.name,
                    raw.trim()
                ))
            })?;
            if response.error.is_empty() {
                Err(Error::Plugin(format!(
                    "unexpected result type from plugin {}, got envelope with result {:?}",
                    plugin.name, response.result
                )))
            } else {
                Err(Error::Plugin(response.error))
            }
        }
    }
}
