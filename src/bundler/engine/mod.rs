//! Packaging engine seam.
//!
//! The engine is the external collaborator that actually assembles the
//! bundle. This crate only ever sees its binary outcome: `Ok(())` or an
//! error, which the orchestrator reports as a packaging failure.
//!
//! - [`packr`] - Runs the packr tool as a subprocess
//! - [`tool_detection`] - Locates the packr launcher or jar

pub mod packr;
pub mod tool_detection;

use super::CanonicalConfig;
use std::future::Future;

pub use packr::{EngineCommand, PackrEngine, PackrJsonConfig};

/// External packaging engine.
///
/// Implementations receive a validated configuration exactly once per run
/// and may fail in any way; the error is never inspected beyond being
/// rendered into the failure report.
pub trait PackagingEngine {
    /// Assembles the bundle described by `config`.
    fn pack(&self, config: &CanonicalConfig) -> impl Future<Output = anyhow::Result<()>>;
}

impl<E: PackagingEngine + ?Sized> PackagingEngine for &E {
    fn pack(&self, config: &CanonicalConfig) -> impl Future<Output = anyhow::Result<()>> {
        (**self).pack(config)
    }
}
