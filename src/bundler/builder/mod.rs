//! Run orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator that takes raw
//! input through one packaging run.
//!
//! # Overview
//!
//! The bundler:
//! 1. Resolves the effective configuration source
//! 2. Validates the canonical configuration
//! 3. Hands it to the packaging engine, once
//! 4. Summarizes the output directory
//! 5. Returns a [`RunReport`]
//!
//! # Module Organization
//!
//! - [`artifacts`] - Output directory summary
//! - [`orchestrator`] - Main [`Bundler`] struct and run stages

pub mod artifacts;
mod orchestrator;

pub use artifacts::OutputSummary;
pub use orchestrator::{Bundler, PreparedRun, RunReport, RunStage, prepare_run};
