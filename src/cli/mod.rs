//! CLI module for layered-opts
//!
//! This module wires the configuration resolver to the process: argument
//! intake, help and version output, and printing of resolved options.

pub mod commands;

pub use commands::*;
