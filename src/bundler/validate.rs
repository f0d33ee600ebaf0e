//! Precondition checks on the canonical configuration.
//!
//! The packaging engine fails late and with unhelpful errors when its inputs
//! are wrong. [`ConfigValidator`] catches the common cases up front, in a
//! fixed order, and stops at the first violation:
//!
//! 1. JDK archive path (fatal)
//! 2. Classpath filtering (drops missing entries, non-fatal)
//! 3. Empty classpath, depending on [`EmptyClasspathPolicy`]
//! 4. Main class format (fatal)
//! 5. Platform-specific fields (non-fatal)

use super::{CanonicalConfig, Platform};
use std::{fmt, path::Path};
use thiserror::Error;

/// Kinds of fatal validation failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ValidationErrorKind {
    /// JDK archive path is empty, missing, or a directory.
    InvalidJdkPath,
    /// Main class has no package qualifier.
    InvalidMainClassFormat,
    /// No classpath entry survived filtering and the policy rejects that.
    EmptyClasspath,
}

/// First violated precondition, with a human-readable message.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    kind: ValidationErrorKind,
    message: String,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the failure kind.
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// Returns the message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Non-fatal finding reported alongside a valid configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Diagnostic {
    /// Classpath entry did not exist and was removed.
    ClasspathEntryDropped {
        /// Entry as given
        entry: String,
    },
    /// A macOS-only field was set for another platform.
    PlatformFieldIgnored {
        /// Field name
        field: &'static str,
        /// Target platform
        platform: Platform,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClasspathEntryDropped { entry } => write!(
                f,
                "{entry} is not a valid location. Entry will be removed from list of classpath entries."
            ),
            Self::PlatformFieldIgnored { field, platform } => write!(
                f,
                "{field} only applies to MacOS targets and is ignored for {platform}"
            ),
        }
    }
}

/// What to do when filtering leaves the classpath empty.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum EmptyClasspathPolicy {
    /// Let an empty classpath through to the engine.
    #[default]
    Accept,
    /// Fail with [`ValidationErrorKind::EmptyClasspath`].
    Reject,
}

/// Configuration that passed every check.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedConfig {
    config: CanonicalConfig,
    diagnostics: Vec<Diagnostic>,
}

impl ValidatedConfig {
    /// Returns the configuration with the filtered classpath.
    pub fn config(&self) -> &CanonicalConfig {
        &self.config
    }

    /// Returns the non-fatal findings, in the order they were made.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Splits into configuration and diagnostics.
    pub fn into_parts(self) -> (CanonicalConfig, Vec<Diagnostic>) {
        (self.config, self.diagnostics)
    }
}

/// Result of validating one configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationOutcome {
    /// Every check passed.
    Valid(ValidatedConfig),
    /// The first violated check.
    Invalid(ValidationError),
}

impl ValidationOutcome {
    /// Converts into a `Result`.
    pub fn into_result(self) -> Result<ValidatedConfig, ValidationError> {
        match self {
            Self::Valid(validated) => Ok(validated),
            Self::Invalid(err) => Err(err),
        }
    }
}

/// Ordered precondition gate in front of the packaging engine.
///
/// # Examples
///
/// ```
/// use packr_bundle::bundler::{CanonicalConfig, ConfigValidator, ValidationErrorKind, ValidationOutcome};
///
/// let config = CanonicalConfig::builder()
///     .jdk_archive_path("/no/such/file.zip")
///     .main_class("Main")
///     .build();
///
/// match ConfigValidator::new().validate(config) {
///     ValidationOutcome::Invalid(err) => assert_eq!(err.kind(), ValidationErrorKind::InvalidJdkPath),
///     ValidationOutcome::Valid(_) => unreachable!(),
/// }
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ConfigValidator {
    empty_classpath: EmptyClasspathPolicy,
}

impl ConfigValidator {
    /// Creates a validator that accepts an empty classpath.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the empty classpath policy.
    pub fn with_empty_classpath_policy(mut self, policy: EmptyClasspathPolicy) -> Self {
        self.empty_classpath = policy;
        self
    }

    /// Validates `config`, consuming it.
    ///
    /// On success the returned configuration carries the filtered classpath.
    /// On failure nothing of the input is handed back.
    pub fn validate(&self, config: CanonicalConfig) -> ValidationOutcome {
        if let Err(err) = check_jdk_path(config.jdk_archive_path()) {
            return ValidationOutcome::Invalid(err);
        }

        let mut diagnostics = Vec::new();
        let classpath = filter_classpath(config.classpath_entries(), &mut diagnostics);

        if classpath.is_empty() {
            match self.empty_classpath {
                EmptyClasspathPolicy::Accept => {
                    log::debug!("No classpath entries remain; passing an empty classpath on");
                }
                EmptyClasspathPolicy::Reject => {
                    return ValidationOutcome::Invalid(ValidationError::new(
                        ValidationErrorKind::EmptyClasspath,
                        "No valid classpath entries remain. Please provide at least one existing JAR location.",
                    ));
                }
            }
        }

        if let Err(err) = check_main_class(config.main_class()) {
            return ValidationOutcome::Invalid(err);
        }

        check_platform_fields(&config, &mut diagnostics);

        ValidationOutcome::Valid(ValidatedConfig {
            config: config.with_classpath(classpath),
            diagnostics,
        })
    }
}

fn check_jdk_path(jdk: &str) -> Result<(), ValidationError> {
    let invalid = || {
        ValidationError::new(
            ValidationErrorKind::InvalidJdkPath,
            format!(
                "Invalid JDK path provided ({jdk:?}). This path should be a ZIP file of a JDK directory."
            ),
        )
    };

    if jdk.is_empty() {
        return Err(invalid());
    }

    let path = Path::new(jdk);
    if !path.exists() || path.is_dir() {
        log::debug!("JDK archive {} is missing or a directory", path.display());
        return Err(invalid());
    }

    Ok(())
}

/// Keeps the entries that exist, in order, recording one diagnostic per drop.
pub fn filter_classpath(entries: &[String], diagnostics: &mut Vec<Diagnostic>) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| {
            if Path::new(entry.as_str()).exists() {
                return true;
            }
            let dropped = Diagnostic::ClasspathEntryDropped {
                entry: (*entry).clone(),
            };
            log::warn!("{dropped}");
            diagnostics.push(dropped);
            false
        })
        .cloned()
        .collect()
}

fn check_main_class(main_class: &str) -> Result<(), ValidationError> {
    if main_class.contains('.') {
        Ok(())
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::InvalidMainClassFormat,
            format!(
                "Main class {main_class:?} must contain at least one '.'. \
                 Please provide the fully qualified path to the main class."
            ),
        ))
    }
}

fn check_platform_fields(config: &CanonicalConfig, diagnostics: &mut Vec<Diagnostic>) {
    let Some(platform) = config.platform() else {
        return;
    };
    if platform.supports_app_bundle() {
        return;
    }

    let fields = [
        ("iconResource", config.icon_resource().is_some()),
        ("bundleIdentifier", config.bundle_identifier().is_some()),
    ];
    for (field, set) in fields {
        if set {
            let ignored = Diagnostic::PlatformFieldIgnored { field, platform };
            log::warn!("{ignored}");
            diagnostics.push(ignored);
        }
    }
}
