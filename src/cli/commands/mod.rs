//! Command execution functions for packaging operations.

mod package;

pub use package::execute;
