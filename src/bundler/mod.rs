//! Configuration resolution, validation and packaging engine hand-off.
//!
//! A packaging run goes through four steps:
//!
//! 1. [`resolve`] picks one configuration source (JSON document or discrete
//!    parameters) and produces a [`CanonicalConfig`]
//! 2. [`ConfigValidator`] checks its preconditions in a fixed order
//! 3. [`Bundler`] hands the validated configuration to a [`PackagingEngine`]
//! 4. The outcome is reported as a [`RunReport`] or an [`Error`] whose
//!    [`FailureKind`] tells the caller what went wrong
//!
//! # Example
//!
//! ```no_run
//! use packr_bundle::bundler::{Bundler, EngineCommand, PackrEngine, Platform, RawInput};
//!
//! # async fn example() -> packr_bundle::bundler::Result<()> {
//! let raw = RawInput {
//!     platform: Some(Platform::Linux64),
//!     jdk_archive_path: "openjdk-17-linux.zip".into(),
//!     executable_name: "myapp".into(),
//!     classpath_entries: vec!["target/myapp.jar".into()],
//!     main_class: "com.example.Main".into(),
//!     output_dir: Some("out-linux".into()),
//!     ..Default::default()
//! };
//!
//! let engine = PackrEngine::new(EngineCommand::Executable("packr".into()));
//! let report = Bundler::new(engine).run(raw).await?;
//! println!("Packaged using {}", report.source);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod resolve;
pub mod settings;
pub mod validate;

pub use builder::{Bundler, OutputSummary, PreparedRun, RunReport, RunStage, prepare_run};
pub use engine::{EngineCommand, PackagingEngine, PackrEngine, PackrJsonConfig};
pub use error::{Context, Error, ErrorExt, FailureKind, Result};
pub use resolve::{ConfigSource, ResolvedConfig, resolve};
pub use settings::{CanonicalConfig, CanonicalConfigBuilder, Platform, RawInput, StructuredDocument};
pub use validate::{
    ConfigValidator, Diagnostic, EmptyClasspathPolicy, ValidatedConfig, ValidationError,
    ValidationErrorKind, ValidationOutcome,
};
