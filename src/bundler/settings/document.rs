//! Structured JSON configuration document.

use super::{CanonicalConfig, Platform};
use std::path::PathBuf;

/// JSON configuration document describing a whole packaging run.
///
/// Keys follow packr's own configuration format; the camelCase names used by
/// the discrete parameters are accepted as aliases. Every key is optional and
/// an absent key maps to the zero value. Unknown keys are ignored.
///
/// # Configuration
///
/// ```json
/// {
///   "platform": "mac",
///   "jdk": "openjdk-17-macos.zip",
///   "executable": "myapp",
///   "classpath": ["target/myapp.jar"],
///   "mainclass": "com.example.Main",
///   "vmargs": ["Xmx1G"],
///   "minimizejre": "soft",
///   "output": "out-mac",
///   "bundle": "com.example.myapp"
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct StructuredDocument {
    /// Target platform.
    #[serde(default)]
    pub platform: Option<Platform>,

    /// JDK archive path.
    #[serde(default, alias = "jdkArchivePath")]
    pub jdk: String,

    /// Native executable name.
    #[serde(default, alias = "executableName")]
    pub executable: String,

    /// Classpath entries.
    #[serde(default, alias = "classpathEntries")]
    pub classpath: Vec<String>,

    /// Fully qualified main class.
    #[serde(default, alias = "mainClass")]
    pub mainclass: String,

    /// JVM arguments.
    #[serde(default, alias = "vmArgs")]
    pub vmargs: Vec<String>,

    /// JRE minimization policy.
    #[serde(default, alias = "jreMinimizePolicy")]
    pub minimizejre: Option<String>,

    /// Bundled resources.
    #[serde(default)]
    pub resources: Vec<PathBuf>,

    /// Output directory.
    #[serde(default, alias = "outputDir")]
    pub output: Option<PathBuf>,

    /// macOS icon resource.
    #[serde(default, alias = "iconResource")]
    pub icon: Option<PathBuf>,

    /// macOS bundle identifier.
    #[serde(default, alias = "bundleIdentifier")]
    pub bundle: Option<String>,

    /// Verbose diagnostics.
    #[serde(default)]
    pub verbose: bool,
}

impl StructuredDocument {
    /// Parses a document from raw bytes.
    ///
    /// Bytes that are not UTF-8 JSON are a parse error like any other.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Maps the document field-for-field into a canonical configuration.
    pub fn into_config(self) -> CanonicalConfig {
        CanonicalConfig::builder()
            .maybe_platform(self.platform)
            .jdk_archive_path(self.jdk)
            .executable_name(self.executable)
            .classpath_entries(self.classpath)
            .main_class(self.mainclass)
            .vm_args(self.vmargs)
            .jre_minimize_policy(self.minimizejre)
            .resources(self.resources)
            .maybe_output_dir(self.output)
            .icon_resource(self.icon)
            .maybe_bundle_identifier(self.bundle)
            .verbose(self.verbose)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_packr_keys() {
        let doc = StructuredDocument::from_slice(
            br#"{
                "platform": "linux64",
                "jdk": "jdk.zip",
                "executable": "app",
                "classpath": ["a.jar", "b.jar"],
                "mainclass": "com.example.Main",
                "vmargs": ["Xmx1G"],
                "minimizejre": "soft",
                "output": "out",
                "verbose": true
            }"#,
        )
        .unwrap();

        let config = doc.into_config();
        assert_eq!(config.platform(), Some(Platform::Linux64));
        assert_eq!(config.classpath_entries(), ["a.jar", "b.jar"]);
        assert_eq!(config.jre_minimize_policy(), Some("soft"));
        assert_eq!(config.output_dir(), Some(std::path::Path::new("out")));
        assert!(config.verbose());
    }

    #[test]
    fn accepts_camel_case_aliases() {
        let doc = StructuredDocument::from_slice(
            br#"{"jdkArchivePath": "jdk.zip", "mainClass": "a.B", "bundleIdentifier": "com.x"}"#,
        )
        .unwrap();

        assert_eq!(doc.jdk, "jdk.zip");
        assert_eq!(doc.mainclass, "a.B");
        assert_eq!(doc.bundle.as_deref(), Some("com.x"));
    }

    #[test]
    fn absent_keys_map_to_zero_values() {
        let config = StructuredDocument::from_slice(b"{}").unwrap().into_config();
        assert_eq!(config, CanonicalConfig::builder().build());
    }

    #[test]
    fn rejects_unknown_platform_and_wrong_types() {
        assert!(StructuredDocument::from_slice(br#"{"platform": "amiga"}"#).is_err());
        assert!(StructuredDocument::from_slice(br#"{"classpath": "a.jar"}"#).is_err());
        assert!(StructuredDocument::from_slice(b"[1, 2]").is_err());
        assert!(StructuredDocument::from_slice(b"{\"jdk\": \"/opt/jdk\xe9.zip\"}").is_err());
    }
}
