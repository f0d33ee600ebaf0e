//! Configuration source resolution.
//!
//! A run has two possible configuration sources: a structured JSON document
//! and the discrete parameters. They are never merged. If the document path
//! is set and the document can be read, it wins outright and every discrete
//! field is ignored; otherwise the discrete fields are used one-to-one.

use super::{CanonicalConfig, Error, RawInput, Result, StructuredDocument};
use std::{
    fmt, io,
    path::{Path, PathBuf},
};

/// Which configuration source produced the canonical configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigSource {
    /// Loaded from the JSON document at `path`.
    DocumentSourced {
        /// Document location
        path: PathBuf,
    },
    /// Taken from the discrete parameters.
    DiscreteSourced,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DocumentSourced { path } => write!(f, "JSON document {}", path.display()),
            Self::DiscreteSourced => f.write_str("discrete parameters"),
        }
    }
}

/// Canonical configuration tagged with the source it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    /// Winning source
    pub source: ConfigSource,
    /// Resolved configuration
    pub config: CanonicalConfig,
}

/// Resolves raw input into one canonical configuration.
///
/// A missing or unreadable document is not an error; it selects the discrete
/// parameters. A document that can be read but not parsed fails with
/// [`Error::StructuredConfigUnreadable`].
///
/// # Examples
///
/// ```
/// use packr_bundle::bundler::{resolve, ConfigSource, RawInput};
///
/// let raw = RawInput {
///     structured_config_path: Some("/does/not/exist.json".into()),
///     main_class: "com.example.Main".into(),
///     ..Default::default()
/// };
///
/// let resolved = resolve(raw).unwrap();
/// assert_eq!(resolved.source, ConfigSource::DiscreteSourced);
/// assert_eq!(resolved.config.main_class(), "com.example.Main");
/// ```
pub fn resolve(raw: RawInput) -> Result<ResolvedConfig> {
    if let Some(path) = raw.structured_config_path.as_deref() {
        if let Some(bytes) = read_document(path) {
            log::info!("Using values from JSON configuration file {}", path.display());
            let document = StructuredDocument::from_slice(&bytes).map_err(|source| {
                Error::StructuredConfigUnreadable {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            return Ok(ResolvedConfig {
                source: ConfigSource::DocumentSourced {
                    path: path.to_path_buf(),
                },
                config: document.into_config(),
            });
        }
    }

    log::info!("Using discretely supplied configuration values");
    Ok(ResolvedConfig {
        source: ConfigSource::DiscreteSourced,
        config: from_discrete(raw),
    })
}

/// Reads the document bytes, or explains why discrete mode takes over.
///
/// Only I/O failures select discrete mode. Decoding happens in the parser.
fn read_document(path: &Path) -> Option<Vec<u8>> {
    match std::fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!(
                "JSON configuration {} not found, falling back to discrete parameters",
                path.display()
            );
            None
        }
        Err(e) => {
            log::warn!(
                "JSON configuration {} is not readable ({}), falling back to discrete parameters",
                path.display(),
                e
            );
            None
        }
    }
}

fn from_discrete(raw: RawInput) -> CanonicalConfig {
    CanonicalConfig::builder()
        .maybe_platform(raw.platform)
        .jdk_archive_path(raw.jdk_archive_path)
        .executable_name(raw.executable_name)
        .classpath_entries(raw.classpath_entries)
        .main_class(raw.main_class)
        .vm_args(raw.vm_args)
        .jre_minimize_policy(raw.jre_minimize_policy)
        .resources(raw.resources)
        .maybe_output_dir(raw.output_dir)
        .icon_resource(raw.icon_resource)
        .maybe_bundle_identifier(raw.bundle_identifier)
        .verbose(raw.verbose)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{FailureKind, Platform};
    use std::io::Write;

    fn discrete_input() -> RawInput {
        RawInput {
            structured_config_path: None,
            platform: Some(Platform::Windows64),
            jdk_archive_path: "/discrete/jdk.zip".into(),
            executable_name: "discrete-app".into(),
            classpath_entries: vec!["/discrete/a.jar".into(), "/discrete/b.jar".into()],
            main_class: "org.discrete.Main".into(),
            vm_args: vec!["Xmx512m".into()],
            jre_minimize_policy: Some("hard".into()),
            resources: vec!["/discrete/res".into()],
            output_dir: Some("/discrete/out".into()),
            icon_resource: Some("/discrete/icon.icns".into()),
            bundle_identifier: Some("org.discrete".into()),
            verbose: true,
        }
    }

    fn write_document(json: &str) -> tempfile::NamedTempFile {
        write_document_bytes(json.as_bytes())
    }

    fn write_document_bytes(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file
    }

    #[test]
    fn discrete_fields_map_one_to_one() {
        let raw = discrete_input();
        let resolved = resolve(raw.clone()).unwrap();
        let config = &resolved.config;

        assert_eq!(resolved.source, ConfigSource::DiscreteSourced);
        assert_eq!(config.platform(), raw.platform);
        assert_eq!(config.jdk_archive_path(), raw.jdk_archive_path);
        assert_eq!(config.executable_name(), raw.executable_name);
        assert_eq!(config.classpath_entries(), raw.classpath_entries.as_slice());
        assert_eq!(config.main_class(), raw.main_class);
        assert_eq!(config.vm_args(), raw.vm_args.as_slice());
        assert_eq!(config.jre_minimize_policy(), raw.jre_minimize_policy.as_deref());
        assert_eq!(config.resources(), raw.resources.as_slice());
        assert_eq!(config.output_dir(), raw.output_dir.as_deref());
        assert_eq!(config.icon_resource(), raw.icon_resource.as_deref());
        assert_eq!(config.bundle_identifier(), raw.bundle_identifier.as_deref());
        assert_eq!(config.verbose(), raw.verbose);
    }

    #[test]
    fn missing_document_falls_back_to_discrete_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut raw = discrete_input();
        raw.structured_config_path = Some(dir.path().join("packr.json"));

        let resolved = resolve(raw).unwrap();

        assert_eq!(resolved.source, ConfigSource::DiscreteSourced);
        assert_eq!(resolved.config, resolve(discrete_input()).unwrap().config);
    }

    #[test]
    fn unreadable_document_falls_back_to_discrete_fields() {
        // A directory exists but cannot be read as a document.
        let dir = tempfile::tempdir().unwrap();
        let mut raw = discrete_input();
        raw.structured_config_path = Some(dir.path().to_path_buf());

        let resolved = resolve(raw).unwrap();
        assert_eq!(resolved.source, ConfigSource::DiscreteSourced);
    }

    #[test]
    fn document_wins_over_discrete_fields() {
        let file = write_document(
            r#"{
                "platform": "mac",
                "jdk": "/doc/jdk.zip",
                "executable": "doc-app",
                "classpath": ["/doc/app.jar"],
                "mainclass": "com.doc.Main",
                "output": "/doc/out"
            }"#,
        );
        let mut raw = discrete_input();
        raw.structured_config_path = Some(file.path().to_path_buf());

        let resolved = resolve(raw).unwrap();
        let config = &resolved.config;

        assert_eq!(
            resolved.source,
            ConfigSource::DocumentSourced {
                path: file.path().to_path_buf()
            }
        );
        assert_eq!(config.platform(), Some(Platform::MacOS));
        assert_eq!(config.jdk_archive_path(), "/doc/jdk.zip");
        assert_eq!(config.executable_name(), "doc-app");
        assert_eq!(config.classpath_entries(), ["/doc/app.jar"]);
        assert_eq!(config.main_class(), "com.doc.Main");
    }

    #[test]
    fn document_fields_never_merge_with_discrete_ones() {
        let file = write_document(r#"{"jdk": "/doc/jdk.zip"}"#);
        let mut raw = discrete_input();
        raw.structured_config_path = Some(file.path().to_path_buf());

        let config = resolve(raw).unwrap().config;

        assert_eq!(config.jdk_archive_path(), "/doc/jdk.zip");
        assert_eq!(config.main_class(), "");
        assert!(config.classpath_entries().is_empty());
        assert!(config.vm_args().is_empty());
        assert_eq!(config.platform(), None);
        assert_eq!(config.bundle_identifier(), None);
        assert!(!config.verbose());
    }

    #[test]
    fn malformed_document_is_a_distinct_failure() {
        let file = write_document("{ \"jdk\": ");
        let raw = RawInput {
            structured_config_path: Some(file.path().to_path_buf()),
            ..discrete_input()
        };

        let err = resolve(raw).unwrap_err();

        assert_eq!(err.failure_kind(), Some(FailureKind::StructuredConfigUnreadable));
        assert!(matches!(
            err,
            Error::StructuredConfigUnreadable { ref path, .. } if path == file.path()
        ));
    }

    #[test]
    fn non_utf8_document_is_unreadable_not_skipped() {
        let file = write_document_bytes(b"{\"jdk\": \"/opt/jdk\xe9.zip\"}");
        let raw = RawInput {
            structured_config_path: Some(file.path().to_path_buf()),
            ..discrete_input()
        };

        let err = resolve(raw).unwrap_err();

        assert_eq!(err.failure_kind(), Some(FailureKind::StructuredConfigUnreadable));
    }
}
