//! Main run orchestration.
//!
//! This module provides the [`Bundler`] orchestrator that drives one
//! packaging run through resolution, validation and engine invocation.

use super::artifacts::{OutputSummary, summarize_output};
use crate::bundler::{
    CanonicalConfig, ConfigSource, ConfigValidator, Diagnostic, Error, PackagingEngine, RawInput,
    Result, ValidatedConfig, resolve,
};
use std::fmt;

/// Stage of a single run.
///
/// Runs only move forward: `Start → Resolved → Validated → Invoked →
/// Succeeded`, and any non-terminal stage may move to `Failed`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RunStage {
    /// Nothing done yet
    Start,
    /// A canonical configuration exists
    Resolved,
    /// Every precondition passed
    Validated,
    /// The engine has been called
    Invoked,
    /// The engine reported success
    Succeeded,
    /// Some stage failed
    Failed,
}

impl RunStage {
    /// Whether moving from `self` to `next` is a legal transition.
    pub fn allows(self, next: RunStage) -> bool {
        use RunStage::*;
        matches!(
            (self, next),
            (Start, Resolved)
                | (Resolved, Validated)
                | (Validated, Invoked)
                | (Invoked, Succeeded)
                | (Start | Resolved | Validated | Invoked, Failed)
        )
    }
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Forward-only stage tracker for one run.
#[derive(Debug)]
struct RunState {
    stage: RunStage,
}

impl RunState {
    fn at(stage: RunStage) -> Self {
        Self { stage }
    }

    fn advance(&mut self, next: RunStage) {
        debug_assert!(
            self.stage.allows(next),
            "illegal run transition {} -> {}",
            self.stage,
            next
        );
        log::debug!("run stage: {} -> {}", self.stage, next);
        self.stage = next;
    }

    /// Records the failure and hands the error back.
    fn fail(&mut self, err: Error) -> Error {
        log::debug!("run failed during stage {}: {}", self.stage, err);
        self.advance(RunStage::Failed);
        err
    }
}

/// Resolved and validated run, ready for the engine.
#[derive(Clone, Debug)]
pub struct PreparedRun {
    /// Winning configuration source
    pub source: ConfigSource,
    /// Configuration and non-fatal findings
    pub validated: ValidatedConfig,
}

/// Outcome of a successful run.
#[derive(Clone, Debug)]
pub struct RunReport {
    /// Winning configuration source
    pub source: ConfigSource,
    /// Configuration handed to the engine
    pub config: CanonicalConfig,
    /// Non-fatal findings from validation
    pub diagnostics: Vec<Diagnostic>,
    /// Output directory contents, when it exists
    pub output: Option<OutputSummary>,
}

/// Resolves and validates `raw`: the engine-free half of a run.
pub fn prepare_run(raw: RawInput, validator: &ConfigValidator) -> Result<PreparedRun> {
    let mut state = RunState::at(RunStage::Start);

    let resolved = resolve(raw).map_err(|e| state.fail(e))?;
    state.advance(RunStage::Resolved);

    let validated = validator
        .validate(resolved.config)
        .into_result()
        .map_err(|e| state.fail(Error::from(e)))?;
    state.advance(RunStage::Validated);

    Ok(PreparedRun {
        source: resolved.source,
        validated,
    })
}

/// Main run orchestrator.
///
/// Owns the packaging engine and the validator. Each call to [`Bundler::run`]
/// is one single-shot run: nothing is retried and the first fatal error ends
/// it.
///
/// # Examples
///
/// ```no_run
/// use packr_bundle::bundler::{Bundler, EngineCommand, PackrEngine, RawInput};
///
/// # async fn example(raw: RawInput) -> packr_bundle::bundler::Result<()> {
/// let engine = PackrEngine::new(EngineCommand::Executable("packr".into()));
/// let report = Bundler::new(engine).run(raw).await?;
///
/// for diagnostic in &report.diagnostics {
///     println!("warning: {diagnostic}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler<E> {
    engine: E,
    validator: ConfigValidator,
}

impl<E: PackagingEngine> Bundler<E> {
    /// Creates a bundler with the default validator.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            validator: ConfigValidator::new(),
        }
    }

    /// Replaces the validator.
    pub fn with_validator(mut self, validator: ConfigValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Resolves and validates `raw` without calling the engine.
    pub fn prepare(&self, raw: RawInput) -> Result<PreparedRun> {
        prepare_run(raw, &self.validator)
    }

    /// Hands a prepared run to the engine, exactly once.
    ///
    /// Any engine error is reported as [`Error::PackagingEngineFailure`].
    pub async fn invoke(&self, prepared: PreparedRun) -> Result<RunReport> {
        let mut state = RunState::at(RunStage::Validated);
        let (config, diagnostics) = prepared.validated.into_parts();

        if config.verbose() {
            log::info!("Effective configuration ({}): {}", prepared.source, config);
        }

        state.advance(RunStage::Invoked);
        if let Err(e) = self.engine.pack(&config).await {
            return Err(state.fail(Error::PackagingEngineFailure {
                reason: format!("{e:#}"),
            }));
        }
        state.advance(RunStage::Succeeded);
        log::info!("Successfully wrote the application installer!");

        let output = match config.output_dir() {
            Some(dir) => summarize_output(dir).await.unwrap_or_else(|e| {
                log::warn!("Could not inspect output directory {}: {}", dir.display(), e);
                None
            }),
            None => None,
        };

        Ok(RunReport {
            source: prepared.source,
            config,
            diagnostics,
            output,
        })
    }

    /// Resolves, validates and packages `raw`.
    pub async fn run(&self, raw: RawInput) -> Result<RunReport> {
        let prepared = self.prepare(raw)?;
        self.invoke(prepared).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_only_move_forward() {
        use RunStage::*;
        let path = [Start, Resolved, Validated, Invoked, Succeeded];
        for pair in path.windows(2) {
            assert!(pair[0].allows(pair[1]));
            assert!(!pair[1].allows(pair[0]));
        }
        assert!(!Start.allows(Validated));
        assert!(!Resolved.allows(Invoked));
    }

    #[test]
    fn terminal_stages_allow_nothing() {
        use RunStage::*;
        for terminal in [Succeeded, Failed] {
            for next in [Start, Resolved, Validated, Invoked, Succeeded, Failed] {
                assert!(!terminal.allows(next));
            }
        }
        for live in [Start, Resolved, Validated, Invoked] {
            assert!(live.allows(Failed));
        }
    }
}
