// src/services/backend.rs
use async_trait::async_trait;
use serde_json::Value;

use crate::common::ValidationResult;
use crate::services::OpenAIError;

/// Something that can turn a raw profile into a verdict.
///
/// The returned verdict is trusted as-is; no local rule checking happens on top of it.
#[async_trait]
pub trait ValidationBackend: Send + Sync {
    async fn validate(&self, profile: &Value) -> Result<ValidationResult, OpenAIError>;
}
