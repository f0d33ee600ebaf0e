//! External tool detection and availability checking.
//!
//! Finds the packr engine: an explicit launcher, an explicit jar run with
//! `java -jar`, or a `packr` launcher on `PATH`.

use super::EngineCommand;
use crate::bundler::{Context, Result};
use std::path::{Path, PathBuf};

/// Launcher name searched on `PATH`.
pub const PACKR_LAUNCHER: &str = "packr";

/// Resolves the engine command from explicit overrides or `PATH`.
///
/// Precedence: `executable`, then `jar` (with `java` or `java` from `PATH`),
/// then a `packr` launcher on `PATH`.
pub fn detect_engine(
    executable: Option<&Path>,
    jar: Option<&Path>,
    java: Option<&Path>,
) -> Result<EngineCommand> {
    if let Some(executable) = executable {
        log::debug!("Using packr launcher at: {}", executable.display());
        return Ok(EngineCommand::Executable(executable.to_path_buf()));
    }

    if let Some(jar) = jar {
        let java = match java {
            Some(java) => java.to_path_buf(),
            None => find_on_path("java")
                .context("packr jar given but no java executable found in PATH (use --java)")?,
        };
        log::debug!(
            "Using packr jar {} with java at {}",
            jar.display(),
            java.display()
        );
        return Ok(EngineCommand::Jar {
            java,
            jar: jar.to_path_buf(),
        });
    }

    let launcher = find_on_path(PACKR_LAUNCHER)
        .context("packr not found in PATH (use --packr or --packr-jar)")?;
    log::info!("✓ packr available: {}", launcher.display());
    Ok(EngineCommand::Executable(launcher))
}

fn find_on_path(name: &str) -> Option<PathBuf> {
    match which::which(name) {
        Ok(path) => {
            log::debug!("Found {} at: {}", name, path.display());
            Some(path)
        }
        Err(e) => {
            log::debug!("{} not found in PATH: {}", name, e);
            None
        }
    }
}
