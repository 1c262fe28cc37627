// src/services/mod.rs
//
// Remote completion service and the prompt it is driven with

pub mod backend;
pub mod openai;
pub mod prompt;

// Re-export commonly used types for convenience
pub use backend::ValidationBackend;
pub use openai::{OpenAIError, OpenAIService};
