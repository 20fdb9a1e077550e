//! Configuration resolution module
//!
//! This module defines the option schema and resolves each option from
//! three sources with a fixed priority (highest to lowest):
//! 1. Command line arguments
//! 2. Configuration file (INI)
//! 3. Schema defaults

pub mod cmdline;
pub mod convert;
pub mod file;
pub mod resolver;
pub mod schema;
pub mod severity;

pub use convert::ConverterRegistry;
pub use file::{IniFileSource, KeyValueSource};
pub use resolver::*;
pub use schema::*;
pub use severity::{parse_severity, SeverityLevel};
