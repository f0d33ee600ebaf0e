//! packr_bundle - packaging helper for JVM applications built with packr.
//!
//! This binary resolves packaging parameters, validates them, and runs packr,
//! exiting with a code that identifies the failure kind.

use packr_bundle::cli::{self, OutputManager};
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli::parse_args();

    // Initialize logging; RUST_LOG overrides the default filter
    let default_filter = if args.quiet { "error" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let output = OutputManager::new(args.verbose, args.quiet);

    // Run CLI and get exit code
    let exit_code = match cli::run(args).await {
        Ok(code) => code,
        Err(e) => {
            output.error(&format!("Error: {}", e)).ok();
            for suggestion in e.recovery_suggestions() {
                eprintln!("  {}", suggestion);
            }
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
