// Common module - shared types and utilities

pub mod config;
pub mod error;
pub mod helpers;
pub mod json;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::OpenAIConfig;
pub use error::InvokerError;
pub use helpers::{safe_token_log, truncate_for_log};
pub use validation::ValidationResult;
