// Verdict type shared by the invoker and the completion backend

use serde::{Deserialize, Serialize};

use super::error::InvokerError;
use super::json::{to_indented_string, to_spaced_string};

/// Validation verdict for a single profile.
///
/// Field order is part of the output contract: `is_valid`, `errors`, `warnings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// A failed verdict carrying one error and no warnings
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            errors: vec![message.into()],
            warnings: Vec::new(),
        }
    }

    /// Whether `is_valid` agrees with the error list.
    ///
    /// Only reported, never corrected: remote verdicts are passed through as-is.
    pub fn is_consistent(&self) -> bool {
        self.is_valid == self.errors.is_empty()
    }

    /// One line: `{"is_valid": false, "errors": [...], "warnings": []}`
    pub fn to_compact_json(&self) -> Result<String, serde_json::Error> {
        to_spaced_string(self)
    }

    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        to_indented_string(self)
    }
}

impl From<&InvokerError> for ValidationResult {
    fn from(err: &InvokerError) -> Self {
        ValidationResult::failure(err.to_string())
    }
}
