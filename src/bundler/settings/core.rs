//! Canonical configuration struct and implementations.

use super::{CanonicalConfigBuilder, Platform};
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// The single resolved packaging configuration.
///
/// Produced once per run by [`resolve`](crate::bundler::resolve), consumed by
/// [`ConfigValidator`](crate::bundler::ConfigValidator) and finally handed to
/// the packaging engine. Fields are read-only; the only way to obtain a
/// different configuration is to build a new one.
///
/// # Examples
///
/// ```
/// use packr_bundle::bundler::{CanonicalConfig, Platform};
///
/// let config = CanonicalConfig::builder()
///     .platform(Platform::MacOS)
///     .jdk_archive_path("jdk.zip")
///     .main_class("com.example.Main")
///     .classpath_entries(vec!["app.jar".into()])
///     .build();
///
/// assert_eq!(config.main_class(), "com.example.Main");
/// assert_eq!(config.classpath_entries(), ["app.jar"]);
/// ```
///
/// # See Also
///
/// - [`CanonicalConfigBuilder`] - Builder for constructing configurations
#[derive(Clone, Debug, PartialEq)]
pub struct CanonicalConfig {
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

impl CanonicalConfig {
    /// Starts a new builder with every field at its zero value.
    pub fn builder() -> CanonicalConfigBuilder {
        CanonicalConfigBuilder::new()
    }

    /// Returns the target platform.
    pub fn platform(&self) -> Option<Platform> {
        self.platform
    }

    /// Returns the JDK archive path as given.
    pub fn jdk_archive_path(&self) -> &str {
        &self.jdk_archive_path
    }

    /// Returns the native executable name.
    pub fn executable_name(&self) -> &str {
        &self.executable_name
    }

    /// Returns the classpath entries, in order.
    pub fn classpath_entries(&self) -> &[String] {
        &self.classpath_entries
    }

    /// Returns the fully qualified main class.
    pub fn main_class(&self) -> &str {
        &self.main_class
    }

    /// Returns the JVM arguments.
    pub fn vm_args(&self) -> &[String] {
        &self.vm_args
    }

    /// Returns the JRE minimization policy.
    pub fn jre_minimize_policy(&self) -> Option<&str> {
        self.jre_minimize_policy.as_deref()
    }

    /// Returns the resources packaged next to the executable.
    pub fn resources(&self) -> &[PathBuf] {
        &self.resources
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    /// Returns the macOS icon resource.
    pub fn icon_resource(&self) -> Option<&Path> {
        self.icon_resource.as_deref()
    }

    /// Returns the macOS bundle identifier.
    pub fn bundle_identifier(&self) -> Option<&str> {
        self.bundle_identifier.as_deref()
    }

    /// Returns whether verbose diagnostics were requested.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Returns a copy of this configuration with a different classpath.
    pub(crate) fn with_classpath(self, classpath_entries: Vec<String>) -> Self {
        Self {
            classpath_entries,
            ..self
        }
    }

    /// Creates a new configuration (used by CanonicalConfigBuilder).
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
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
    ) -> Self {
        Self {
            platform,
            jdk_archive_path,
            executable_name,
            classpath_entries,
            main_class,
            vm_args,
            jre_minimize_policy,
            resources,
            output_dir,
            icon_resource,
            bundle_identifier,
            verbose,
        }
    }
}

impl fmt::Display for CanonicalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn opt<T: fmt::Display>(value: Option<T>) -> String {
            value.map_or_else(|| "null".to_string(), |v| v.to_string())
        }

        write!(
            f,
            "CanonicalConfig{{platform={}, jdk={}, executable={}, classpath={:?}, mainClass={}, \
             vmArgs={:?}, minimizeJre={}, resources={:?}, outDir={}, iconResource={}, \
             bundleIdentifier={}, verbose={}}}",
            opt(self.platform),
            self.jdk_archive_path,
            self.executable_name,
            self.classpath_entries,
            self.main_class,
            self.vm_args,
            opt(self.jre_minimize_policy.as_deref()),
            self.resources,
            opt(self.output_dir.as_ref().map(|p| p.display())),
            opt(self.icon_resource.as_ref().map(|p| p.display())),
            opt(self.bundle_identifier.as_deref()),
            self.verbose,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_classpath_replaces_only_the_classpath() {
        let original = CanonicalConfig::builder()
            .platform(Platform::Linux64)
            .jdk_archive_path("jdk.zip")
            .classpath_entries(vec!["a.jar".into(), "b.jar".into()])
            .main_class("com.example.Main")
            .verbose(true)
            .build();

        let filtered = original.clone().with_classpath(vec!["a.jar".into()]);

        assert_eq!(filtered.classpath_entries(), ["a.jar"]);
        assert_eq!(filtered.platform(), original.platform());
        assert_eq!(filtered.jdk_archive_path(), original.jdk_archive_path());
        assert_eq!(filtered.main_class(), original.main_class());
        assert_eq!(filtered.verbose(), original.verbose());
    }

    #[test]
    fn display_lists_every_field() {
        let config = CanonicalConfig::builder()
            .platform(Platform::MacOS)
            .bundle_identifier("com.example.app")
            .build();
        let rendered = config.to_string();

        assert!(rendered.contains("platform=MacOS"));
        assert!(rendered.contains("bundleIdentifier=com.example.app"));
        assert!(rendered.contains("outDir=null"));
        assert!(rendered.contains("verbose=false"));
    }
}
