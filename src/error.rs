//! Application-level error types.
//!
//! This module defines the errors surfaced by the CLI, with exit codes and
//! recovery suggestions.

use crate::bundler::FailureKind;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all CLI operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Resolution, validation and engine errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// The packaging engine could not be located
    #[error("Packaging engine not available: {reason}")]
    EngineNotFound {
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Failure kind of a fatal run outcome, if this is one.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Bundler(e) => e.failure_kind(),
            _ => None,
        }
    }

    /// Process exit code: one per failure kind, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        self.failure_kind().map_or(1, FailureKind::exit_code)
    }

    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        let suggestion = match self.failure_kind() {
            Some(FailureKind::StructuredConfigUnreadable) => {
                "Fix the JSON syntax in the configuration document, or remove --json-config to use discrete flags"
            }
            Some(FailureKind::InvalidJdkPath) => {
                "Point --jdk (or \"jdk\" in the JSON document) at a ZIP archive of a JDK build"
            }
            Some(FailureKind::InvalidMainClassFormat) => {
                "Use the fully qualified main class name, e.g. com.example.Main"
            }
            Some(FailureKind::EmptyClasspath) => {
                "Build the application JARs first, or drop --reject-empty-classpath"
            }
            Some(FailureKind::PackagingEngineFailure) => {
                "Re-run with RUST_LOG=debug to see packr's output"
            }
            None => match self {
                Self::Cli(CliError::EngineNotFound { .. }) => {
                    "Install packr on PATH, or pass --packr <launcher> or --packr-jar <jar>"
                }
                _ => "Check the error message above for specific details",
            },
        };
        vec![suggestion.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::Error;

    #[test]
    fn exit_code_follows_failure_kind() {
        let engine = BundlerError::from(Error::PackagingEngineFailure {
            reason: "exit status: 1".into(),
        });
        assert_eq!(engine.exit_code(), 6);

        let cli = BundlerError::from(CliError::InvalidArguments {
            reason: "bad".into(),
        });
        assert_eq!(cli.exit_code(), 1);
        assert_eq!(cli.failure_kind(), None);
    }

    #[test]
    fn every_error_has_a_suggestion() {
        let err = BundlerError::from(CliError::EngineNotFound {
            reason: "packr not found".into(),
        });
        assert!(err.recovery_suggestions()[0].contains("--packr"));
    }
}
