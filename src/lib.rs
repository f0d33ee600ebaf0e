//! Packaging helper library for JVM applications built with packr
//!
//! This library resolves packaging parameters from either a JSON
//! configuration document or discrete values, validates them, and hands
//! them to the packr engine:
//! - [`bundler::resolve`] picks the single effective configuration
//! - [`bundler::ConfigValidator`] enforces packr's preconditions up front
//! - [`bundler::Bundler`] runs the engine once and reports the outcome
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
