//! The packaging command: resolve, validate, run packr, report.

use crate::bundler::{
    Bundler, ConfigValidator, Diagnostic, PackrEngine, RawInput, engine::tool_detection,
    prepare_run,
};
use crate::cli::{Args, RuntimeConfig};
use crate::error::{CliError, Result};

/// Executes one packaging run described by `args`.
///
/// Returns the exit code for a successful run. Fatal outcomes come back as
/// errors carrying their own exit code.
pub async fn execute(args: &Args, runtime_config: &RuntimeConfig) -> Result<i32> {
    let raw = RawInput::from(args);
    let validator =
        ConfigValidator::new().with_empty_classpath_policy(args.empty_classpath_policy());

    runtime_config.section("packr_bundle")?;

    // Validation failures keep their own kind even when packr is missing.
    let prepared = prepare_run(raw, &validator)?;
    runtime_config.progress(&format!("Configuration source: {}", prepared.source))?;
    report_diagnostics(runtime_config, prepared.validated.diagnostics())?;

    if args.validate_only {
        runtime_config.verbose_println(&prepared.validated.config().to_string())?;
        runtime_config.success("Configuration is valid")?;
        return Ok(0);
    }

    let command = tool_detection::detect_engine(
        args.packr.as_deref(),
        args.packr_jar.as_deref(),
        args.java.as_deref(),
    )
    .map_err(|e| CliError::EngineNotFound {
        reason: e.to_string(),
    })?;

    let engine = PackrEngine::new(command).with_timeout(args.engine_timeout());
    let bundler = Bundler::new(engine);

    runtime_config.progress("Running packr...")?;

    let report = bundler.invoke(prepared).await?;

    runtime_config.success("Successfully wrote the application installer!")?;
    if let Some(output) = &report.output {
        runtime_config.indent(&format!(
            "{} ({} files, {} bytes)",
            output.dir.display(),
            output.files,
            output.total_bytes
        ))?;
    }

    Ok(0)
}

fn report_diagnostics(runtime_config: &RuntimeConfig, diagnostics: &[Diagnostic]) -> Result<()> {
    if !diagnostics.is_empty() {
        runtime_config.warn(&format!(
            "{} warning(s) during validation; see log output above",
            diagnostics.len()
        ))?;
    }
    Ok(())
}
