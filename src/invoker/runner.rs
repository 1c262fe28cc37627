// src/invoker/runner.rs

use serde_json::Value;
use std::path::Path;
use tracing::{error, info, warn};

use super::load_profile;
use crate::common::{InvokerError, OpenAIConfig, ValidationResult};
use crate::services::{OpenAIService, ValidationBackend};

/// Final state of one run: the verdict plus how to print it and exit
#[derive(Debug)]
pub struct Invocation {
    pub result: ValidationResult,
    pub exit_code: u8,
    pub compact: bool,
}

impl Invocation {
    fn completed(result: ValidationResult) -> Self {
        Self {
            result,
            exit_code: 0,
            compact: false,
        }
    }

    fn failed(err: InvokerError) -> Self {
        Self {
            result: ValidationResult::from(&err),
            exit_code: err.exit_code(),
            compact: err.is_early_exit(),
        }
    }

    pub fn render(&self) -> Result<String, serde_json::Error> {
        if self.compact {
            self.result.to_compact_json()
        } else {
            self.result.to_pretty_json()
        }
    }
}

/// Ask the backend for a verdict; backend failures become a System Error verdict
pub async fn validate_user_profile<B>(backend: &B, profile: &Value) -> ValidationResult
where
    B: ValidationBackend + ?Sized,
{
    match backend.validate(profile).await {
        Ok(result) => {
            if !result.is_consistent() {
                warn!(
                    is_valid = result.is_valid,
                    errors = result.errors.len(),
                    "Remote verdict disagrees with its error list; passing through unchanged"
                );
            }
            info!(
                is_valid = result.is_valid,
                errors = result.errors.len(),
                warnings = result.warnings.len(),
                "Profile validated"
            );
            result
        }
        Err(e) => {
            error!(error = %e, "Profile validation call failed");
            ValidationResult::from(&InvokerError::System(e.to_string()))
        }
    }
}

/// Resolve the input argument and parse the file it names
async fn load_input(input: Option<&Path>) -> Result<Value, InvokerError> {
    let path = input.ok_or(InvokerError::Usage)?;
    load_profile(path).await.map_err(|e| {
        warn!(path = %path.display(), error = %e, "Could not load profile");
        e
    })
}

/// Run against an already configured backend
pub async fn run_with_backend<B>(input: Option<&Path>, backend: &B) -> Invocation
where
    B: ValidationBackend + ?Sized,
{
    match load_input(input).await {
        Ok(profile) => Invocation::completed(validate_user_profile(backend, &profile).await),
        Err(e) => Invocation::failed(e),
    }
}

/// Full invocation: credential, input argument, file, then the remote call
pub async fn run(config: Result<OpenAIConfig, InvokerError>, input: Option<&Path>) -> Invocation {
    let config = match config {
        Ok(config) => config,
        Err(e) => return Invocation::failed(e),
    };

    let profile = match load_input(input).await {
        Ok(profile) => profile,
        Err(e) => return Invocation::failed(e),
    };

    match OpenAIService::new(config) {
        Ok(service) => Invocation::completed(validate_user_profile(&service, &profile).await),
        Err(e) => Invocation::failed(InvokerError::System(e.to_string())),
    }
}
