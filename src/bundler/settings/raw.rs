//! Raw caller-supplied packaging parameters.

use super::Platform;
use std::path::PathBuf;

/// Everything a caller may supply for one run.
///
/// Holds both source modes at once: an optional structured document path and
/// the discrete fields. Which one wins is decided by
/// [`resolve`](crate::bundler::resolve), never by the caller.
///
/// # Examples
///
/// ```
/// use packr_bundle::bundler::{Platform, RawInput};
///
/// let raw = RawInput {
///     platform: Some(Platform::Linux64),
///     jdk_archive_path: "openjdk-17.zip".into(),
///     main_class: "com.example.Main".into(),
///     ..Default::default()
/// };
/// assert!(raw.structured_config_path.is_none());
/// assert!(raw.verbose);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RawInput {
    /// Path to a JSON configuration document.
    ///
    /// When it resolves to a readable document, every discrete field below is
    /// ignored.
    pub structured_config_path: Option<PathBuf>,

    /// Target platform.
    pub platform: Option<Platform>,

    /// ZIP archive of a JDK build containing a JRE.
    pub jdk_archive_path: String,

    /// Native executable name, without extension.
    pub executable_name: String,

    /// JAR locations to put on the classpath, in order.
    pub classpath_entries: Vec<String>,

    /// Fully qualified main class, dot-delimited.
    pub main_class: String,

    /// JVM arguments without leading dashes, e.g. `Xmx1G`.
    pub vm_args: Vec<String>,

    /// JRE minimization profile (`soft`, `hard`, or a config path).
    pub jre_minimize_policy: Option<String>,

    /// Files and directories packaged next to the executable.
    pub resources: Vec<PathBuf>,

    /// Output directory.
    pub output_dir: Option<PathBuf>,

    /// `.icns` icon for macOS app bundles.
    pub icon_resource: Option<PathBuf>,

    /// Bundle identifier for macOS app bundles, e.g. `com.my.app`.
    pub bundle_identifier: Option<String>,

    /// Print more status information during processing.
    pub verbose: bool,
}

impl Default for RawInput {
    fn default() -> Self {
        Self {
            structured_config_path: None,
            platform: None,
            jdk_archive_path: String::new(),
            executable_name: String::new(),
            classpath_entries: Vec::new(),
            main_class: String::new(),
            vm_args: Vec::new(),
            jre_minimize_policy: None,
            resources: Vec::new(),
            output_dir: None,
            icon_resource: None,
            bundle_identifier: None,
            verbose: true,
        }
    }
}
