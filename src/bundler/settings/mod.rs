//! Configuration structures for packaging runs.
//!
//! This module provides the raw caller input, the structured JSON document,
//! and the canonical configuration that both resolve into, together with a
//! builder for constructing it.

mod builder;
mod core;
mod document;
mod platform;
mod raw;

pub use builder::CanonicalConfigBuilder;
pub use self::core::CanonicalConfig;
pub use document::StructuredDocument;
pub use platform::Platform;
pub use raw::RawInput;
