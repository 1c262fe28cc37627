// src/main.rs
use dotenv::dotenv;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod cli;
mod common;
mod invoker;
mod services;

use cli::Cli;
use common::{InvokerError, OpenAIConfig};
use invoker::Invocation;

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv().ok();

    // stdout carries only the verdict JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Pure parse: nothing is printed or exits here, so the credential check still comes first
    let cli = Cli::from_env();
    if !cli.rest.is_empty() {
        debug!(ignored = ?cli.rest, "Ignoring extra arguments");
    }
    let input = cli.input.as_deref();

    // ========================================================================
    // CONFIGURATION (checked before any other work)
    // ========================================================================

    let config = OpenAIConfig::from_env();
    if let Err(InvokerError::Configuration(var)) = &config {
        error!(variable = %var, "Required credential missing");
    }

    // ========================================================================
    // VALIDATION
    // ========================================================================

    let invocation: Invocation = invoker::run(config, input).await;
    debug!(
        exit_code = invocation.exit_code,
        is_valid = invocation.result.is_valid,
        "Invocation finished"
    );

    match invocation.render() {
        Ok(json) => {
            println!("{}", json);
            ExitCode::from(invocation.exit_code)
        }
        Err(e) => {
            error!(error = %e, "Failed to serialize verdict");
            ExitCode::FAILURE
        }
    }
}
