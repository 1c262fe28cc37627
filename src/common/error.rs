// Error types for the validator invoker

/// Terminal failures of one invocation.
///
/// The `Display` output is the user-facing error string placed in the verdict.
#[derive(Debug, thiserror::Error)]
pub enum InvokerError {
    #[error("Configuration Error: {0} not found in .env")]
    Configuration(&'static str),

    #[error("Usage Error: No input file provided")]
    Usage,

    #[error("File Error: {0}")]
    File(String),

    #[error("System Error: Failed to validate input. {0}")]
    System(String),
}

impl InvokerError {
    /// Process status for this failure.
    ///
    /// File and system failures are reported inside the JSON body and exit 0.
    pub fn exit_code(&self) -> u8 {
        match self {
            InvokerError::Configuration(_) | InvokerError::Usage => 1,
            InvokerError::File(_) | InvokerError::System(_) => 0,
        }
    }

    /// Early-exit failures are printed compact, the rest pretty-printed
    pub fn is_early_exit(&self) -> bool {
        !matches!(self, InvokerError::System(_))
    }
}
