// src/invoker/loader.rs

use serde_json::Value;
use std::path::Path;
use tracing::debug;

use crate::common::InvokerError;

/// Read and parse the profile file.
///
/// Any JSON value is accepted; field-level checks belong to the remote model.
pub async fn load_profile(path: &Path) -> Result<Value, InvokerError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| InvokerError::File(format!("{}: {}", path.display(), e)))?;

    let profile: Value =
        serde_json::from_str(&raw).map_err(|e| InvokerError::File(e.to_string()))?;

    debug!(path = %path.display(), bytes = raw.len(), "Loaded profile");

    Ok(profile)
}
