//! layered-opts - layered option resolution
//!
//! Resolves a fixed set of typed options from the command line, an optional
//! INI configuration file and built-in defaults, in that order of priority.

pub mod cli;
pub mod config;
pub mod error;
pub mod utils;

// Re-export commonly used types
pub use error::{InvalidValue, OptResolveError, Result};
