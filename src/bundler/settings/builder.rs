//! Builder for constructing CanonicalConfig.

use super::{CanonicalConfig, Platform};
use std::path::{Path, PathBuf};

/// Builder for constructing [`CanonicalConfig`].
///
/// Every field starts at its zero value (empty string, empty list, `None`,
/// `false`). Building never fails: checking the values is the validator's
/// job, not the builder's.
///
/// # Examples
///
/// ```
/// use packr_bundle::bundler::{CanonicalConfigBuilder, Platform};
///
/// let config = CanonicalConfigBuilder::new()
///     .platform(Platform::Windows64)
///     .executable_name("myapp")
///     .vm_args(vec!["Xmx1G".into()])
///     .output_dir("out-windows64")
///     .build();
///
/// assert_eq!(config.executable_name(), "myapp");
/// assert!(config.bundle_identifier().is_none());
/// ```
#[derive(Debug, Default)]
pub struct CanonicalConfigBuilder {
    platform: Option<Platform>,
    jdk_archive_path: String,
    executable_name: String,
    classpath_entries: Vec<String>,
    main_class: String,
    vm_args: Vec<String>,
    jre_minimize_policy: Option<String>,
    resources: Vec<PathBuf>,
    output_dir: Option<PathBuf>,
    icon_resource: Option<PathBuf>,
    bundle_identifier: Option<String>,
    verbose: bool,
}

impl CanonicalConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the target platform.
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Sets the target platform, or clears it.
    pub fn maybe_platform(mut self, platform: Option<Platform>) -> Self {
        self.platform = platform;
        self
    }

    /// Sets the JDK archive path.
    pub fn jdk_archive_path(mut self, path: impl Into<String>) -> Self {
        self.jdk_archive_path = path.into();
        self
    }

    /// Sets the native executable name.
    pub fn executable_name(mut self, name: impl Into<String>) -> Self {
        self.executable_name = name.into();
        self
    }

    /// Sets the classpath entries.
    pub fn classpath_entries(mut self, entries: Vec<String>) -> Self {
        self.classpath_entries = entries;
        self
    }

    /// Sets the main class.
    pub fn main_class(mut self, main_class: impl Into<String>) -> Self {
        self.main_class = main_class.into();
        self
    }

    /// Sets the JVM arguments.
    pub fn vm_args(mut self, vm_args: Vec<String>) -> Self {
        self.vm_args = vm_args;
        self
    }

    /// Sets the JRE minimization policy.
    pub fn jre_minimize_policy(mut self, policy: Option<String>) -> Self {
        self.jre_minimize_policy = policy;
        self
    }

    /// Sets the bundled resources.
    pub fn resources(mut self, resources: Vec<PathBuf>) -> Self {
        self.resources = resources;
        self
    }

    /// Sets the output directory.
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the output directory, or clears it.
    pub fn maybe_output_dir(mut self, path: Option<PathBuf>) -> Self {
        self.output_dir = path;
        self
    }

    /// Sets the macOS icon resource.
    pub fn icon_resource(mut self, path: Option<PathBuf>) -> Self {
        self.icon_resource = path;
        self
    }

    /// Sets the macOS bundle identifier.
    pub fn bundle_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.bundle_identifier = Some(identifier.into());
        self
    }

    /// Sets the macOS bundle identifier, or clears it.
    pub fn maybe_bundle_identifier(mut self, identifier: Option<String>) -> Self {
        self.bundle_identifier = identifier;
        self
    }

    /// Sets verbose mode.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> CanonicalConfig {
        CanonicalConfig::new(
            self.platform,
            self.jdk_archive_path,
            self.executable_name,
            self.classpath_entries,
            self.main_class,
            self.vm_args,
            self.jre_minimize_policy,
            self.resources,
            self.output_dir,
            self.icon_resource,
            self.bundle_identifier,
            self.verbose,
        )
    }
}
