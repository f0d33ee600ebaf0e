//! Shared fixtures for integration tests.
#![allow(dead_code)]

use packr_bundle::bundler::{CanonicalConfig, PackagingEngine, Platform, RawInput};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Temporary workspace with a JDK archive and a couple of JARs.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        fs::write(dir.path().join("openjdk.zip"), b"PK\x03\x04").expect("write jdk archive");
        fs::write(dir.path().join("app.jar"), b"PK\x03\x04").expect("write jar");
        fs::write(dir.path().join("lib.jar"), b"PK\x03\x04").expect("write jar");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn path_str(&self, name: &str) -> String {
        self.path(name).to_string_lossy().into_owned()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("write fixture file");
        path
    }

    /// Discrete input that passes validation.
    pub fn valid_input(&self) -> RawInput {
        RawInput {
            platform: Some(Platform::Linux64),
            jdk_archive_path: self.path_str("openjdk.zip"),
            executable_name: "myapp".into(),
            classpath_entries: vec![self.path_str("app.jar")],
            main_class: "com.example.Main".into(),
            vm_args: vec!["Xmx1G".into()],
            output_dir: Some(self.path("out")),
            ..Default::default()
        }
    }

    /// Writes a JSON document that passes validation and differs from
    /// [`Workspace::valid_input`] in every field.
    pub fn valid_document(&self) -> PathBuf {
        let json = serde_json::json!({
            "platform": "mac",
            "jdk": self.path_str("openjdk.zip"),
            "executable": "doc-app",
            "classpath": [self.path_str("lib.jar")],
            "mainclass": "org.document.Launcher",
            "vmargs": ["Xms256m"],
            "output": self.path_str("doc-out"),
            "bundle": "org.document.app"
        });
        self.write("packr.json", &json.to_string())
    }
}

/// Engine double that records every configuration it receives.
#[derive(Default)]
pub struct RecordingEngine {
    calls: Mutex<Vec<CanonicalConfig>>,
    failure: Option<String>,
    launcher_name: Option<String>,
}

impl RecordingEngine {
    /// Fails every call with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    /// Writes a launcher file into the output directory on success.
    pub fn writing_launcher(name: &str) -> Self {
        Self {
            launcher_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<CanonicalConfig> {
        self.calls.lock().unwrap().clone()
    }
}

impl PackagingEngine for RecordingEngine {
    async fn pack(&self, config: &CanonicalConfig) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(config.clone());

        if let Some(message) = &self.failure {
            anyhow::bail!("{message}");
        }

        if let (Some(name), Some(dir)) = (&self.launcher_name, config.output_dir()) {
            fs::create_dir_all(dir)?;
            fs::write(dir.join(name), b"#!launcher")?;
        }

        Ok(())
    }
}
