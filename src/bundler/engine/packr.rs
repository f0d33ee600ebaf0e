//! packr subprocess execution.

use super::PackagingEngine;
use crate::bundler::CanonicalConfig;
use anyhow::{Context as _, bail};
use std::{
    ffi::OsString,
    io::Write,
    path::{Path, PathBuf},
    process::Stdio,
    time::Duration,
};
use tokio::{
    io::{AsyncBufReadExt, AsyncRead, BufReader},
    process::Command,
};

/// How to launch packr.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EngineCommand {
    /// A packr launcher executable.
    Executable(PathBuf),
    /// `java -jar <jar>`.
    Jar {
        /// Java executable
        java: PathBuf,
        /// packr jar (usually `packr-all.jar`)
        jar: PathBuf,
    },
}

impl EngineCommand {
    /// Program and leading arguments, before the config file argument.
    fn program_and_args(&self) -> (&Path, Vec<OsString>) {
        match self {
            Self::Executable(path) => (path, Vec::new()),
            Self::Jar { java, jar } => (java, vec!["-jar".into(), jar.as_os_str().to_owned()]),
        }
    }
}

/// Configuration file in packr's own JSON format.
///
/// Empty optional values are omitted so packr applies its defaults.
#[derive(Debug, serde::Serialize)]
pub struct PackrJsonConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    platform: Option<&'static str>,
    jdk: &'a str,
    executable: &'a str,
    classpath: &'a [String],
    mainclass: &'a str,
    vmargs: &'a [String],
    #[serde(skip_serializing_if = "no_resources")]
    resources: &'a [PathBuf],
    #[serde(skip_serializing_if = "Option::is_none")]
    minimizejre: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a Path>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<&'a Path>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bundle: Option<&'a str>,
    verbose: bool,
}

impl<'a> From<&'a CanonicalConfig> for PackrJsonConfig<'a> {
    fn from(config: &'a CanonicalConfig) -> Self {
        Self {
            platform: config.platform().map(|p| p.packr_name()),
            jdk: config.jdk_archive_path(),
            executable: config.executable_name(),
            classpath: config.classpath_entries(),
            mainclass: config.main_class(),
            vmargs: config.vm_args(),
            resources: config.resources(),
            minimizejre: config.jre_minimize_policy(),
            output: config.output_dir(),
            icon: config.icon_resource(),
            bundle: config.bundle_identifier(),
            verbose: config.verbose(),
        }
    }
}

fn no_resources(resources: &&[PathBuf]) -> bool {
    resources.is_empty()
}

/// Runs packr once per configuration.
///
/// The configuration is written to a temporary JSON file that is passed as
/// packr's only argument. Output lines are forwarded to the debug log.
#[derive(Clone, Debug)]
pub struct PackrEngine {
    command: EngineCommand,
    timeout: Option<Duration>,
}

impl PackrEngine {
    /// Creates an engine for the given launch command.
    pub fn new(command: EngineCommand) -> Self {
        Self {
            command,
            timeout: None,
        }
    }

    /// Kills packr if it runs longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    async fn run(&self, config_file: &Path) -> anyhow::Result<()> {
        let (program, args) = self.command.program_and_args();

        let mut child = Command::new(program)
            .args(&args)
            .arg(config_file)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to start packr ({})", program.display()))?;

        let stdout = child.stdout.take().context("packr stdout not captured")?;
        let stderr = child.stderr.take().context("packr stderr not captured")?;
        let stdout_task = tokio::spawn(forward_lines(stdout, "stdout"));
        let stderr_task = tokio::spawn(forward_lines(stderr, "stderr"));

        let status = match self.timeout {
            Some(limit) => {
                let waited = tokio::time::timeout(limit, child.wait()).await;
                match waited {
                    Ok(status) => status?,
                    Err(_) => {
                        child.kill().await.ok();
                        bail!("packr did not finish within {} seconds", limit.as_secs());
                    }
                }
            }
            None => child.wait().await?,
        };

        stdout_task.await.ok();
        let stderr_lines = stderr_task.await.unwrap_or_default();

        if !status.success() {
            let skip = stderr_lines.len().saturating_sub(5);
            let tail = stderr_lines[skip..].join("\n");
            if tail.is_empty() {
                bail!("packr exited with {status}");
            }
            bail!("packr exited with {status}:\n{tail}");
        }

        Ok(())
    }
}

impl PackagingEngine for PackrEngine {
    async fn pack(&self, config: &CanonicalConfig) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&PackrJsonConfig::from(config))?;

        let mut config_file = tempfile::Builder::new()
            .prefix("packr-config-")
            .suffix(".json")
            .tempfile()
            .context("failed to create packr configuration file")?;
        config_file.write_all(json.as_bytes())?;
        config_file.flush()?;

        log::debug!("packr configuration {}:\n{}", config_file.path().display(), json);
        self.run(config_file.path()).await
    }
}

/// Logs each line and returns them.
///
/// Lines that are not UTF-8 are decoded lossily so the pipe is drained to EOF.
async fn forward_lines<R: AsyncRead + Unpin>(reader: R, stream: &'static str) -> Vec<String> {
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut collected = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf)
                    .trim_end_matches(['\n', '\r'])
                    .to_string();
                log::debug!("packr {}: {}", stream, line);
                collected.push(line);
            }
            Err(e) => {
                log::debug!("packr {} closed: {}", stream, e);
                break;
            }
        }
    }
    collected
}
