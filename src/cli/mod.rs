//! Command line interface for packr_bundle.
//!
//! This module provides the CLI for packaging runs, with argument parsing,
//! command execution, and user feedback.

mod args;
pub mod commands;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run(args: Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let runtime_config = create_runtime_config(&args);
    commands::execute(&args, &runtime_config).await
}

/// Parse arguments without executing
pub fn parse_args() -> Args {
    Args::parse_args()
}

/// Create runtime configuration from arguments
pub fn create_runtime_config(args: &Args) -> RuntimeConfig {
    RuntimeConfig::from(args)
}
