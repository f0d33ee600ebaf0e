//! Error types for configuration resolution, validation and engine invocation.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

use super::validate::{ValidationError, ValidationErrorKind};

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Machine-distinguishable failure kinds reported to the caller.
///
/// Every fatal outcome of a run maps onto exactly one kind, and every kind
/// maps onto its own process exit code.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FailureKind {
    /// Configuration document was present but could not be parsed.
    StructuredConfigUnreadable,
    /// JDK archive path is empty, missing, or a directory.
    InvalidJdkPath,
    /// Main class is not fully qualified.
    InvalidMainClassFormat,
    /// Classpath ended up empty and the policy rejects that.
    EmptyClasspath,
    /// The external packaging engine reported failure.
    PackagingEngineFailure,
}

impl FailureKind {
    /// Process exit code for this failure kind.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::StructuredConfigUnreadable => 2,
            Self::InvalidJdkPath => 3,
            Self::InvalidMainClassFormat => 4,
            Self::EmptyClasspath => 5,
            Self::PackagingEngineFailure => 6,
        }
    }
}

impl Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::StructuredConfigUnreadable => "StructuredConfigUnreadable",
            Self::InvalidJdkPath => "InvalidJdkPath",
            Self::InvalidMainClassFormat => "InvalidMainClassFormat",
            Self::EmptyClasspath => "EmptyClasspath",
            Self::PackagingEngineFailure => "PackagingEngineFailure",
        };
        f.write_str(name)
    }
}

impl From<ValidationErrorKind> for FailureKind {
    fn from(kind: ValidationErrorKind) -> Self {
        match kind {
            ValidationErrorKind::InvalidJdkPath => Self::InvalidJdkPath,
            ValidationErrorKind::InvalidMainClassFormat => Self::InvalidMainClassFormat,
            ValidationErrorKind::EmptyClasspath => Self::EmptyClasspath,
        }
    }
}

/// Errors produced while resolving, validating or packaging a configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// The structured configuration document exists but is not valid.
    #[error("Structured configuration {} could not be parsed: {source}", path.display())]
    StructuredConfigUnreadable {
        /// Path of the offending document
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A precondition on the canonical configuration was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The packaging engine failed; never retried.
    #[error("Error creating installation bundle: {reason}")]
    PackagingEngineFailure {
        /// Engine error chain, rendered
        reason: String,
    },

    /// Filesystem operation failed on a known path.
    #[error("{context} {}: {source}", path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Anything else, with a message.
    #[error("{0}")]
    GenericError(String),
}

impl Error {
    /// Failure kind for fatal run outcomes, `None` for incidental errors.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::StructuredConfigUnreadable { .. } => Some(FailureKind::StructuredConfigUnreadable),
            Self::Validation(err) => Some(err.kind().into()),
            Self::PackagingEngineFailure { .. } => Some(FailureKind::PackagingEngineFailure),
            Self::Fs { .. } | Self::GenericError(_) => None,
        }
    }
}

/// Attaches a message to `Option`s.
pub trait Context<T> {
    /// Converts the empty case into [`Error::GenericError`].
    fn context<C: Display>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

/// Adds filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Wraps an IO error with the operation and the path it touched.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let kinds = [
            FailureKind::StructuredConfigUnreadable,
            FailureKind::InvalidJdkPath,
            FailureKind::InvalidMainClassFormat,
            FailureKind::EmptyClasspath,
            FailureKind::PackagingEngineFailure,
        ];
        let mut codes: Vec<i32> = kinds.iter().map(|k| k.exit_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
        assert!(!codes.contains(&0) && !codes.contains(&1));
    }

    #[test]
    fn incidental_errors_have_no_kind() {
        let err = Error::GenericError("boom".into());
        assert_eq!(err.failure_kind(), None);

        let err: Result<()> = Err(io::Error::other("x")).fs_context("reading", "/tmp/x");
        assert!(matches!(err, Err(Error::Fs { context: "reading", .. })));
    }

    #[test]
    fn option_context_produces_generic_error() {
        let missing: Option<u8> = None;
        let err = missing.context("value is required").unwrap_err();
        assert_eq!(err.to_string(), "value is required");
    }
}
