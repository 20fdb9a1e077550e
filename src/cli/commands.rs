//! Program flow
//!
//! Parses the command line, answers `--help` / `--version`, then loads the
//! configuration file and prints every resolved option.

use crate::config::{ConfigResolver, HELP, VERSION};
use crate::error::Result;
use crate::utils::format::write_variables;
use std::ffi::OsString;
use std::io::Write;
use tracing::{debug, info};

/// Get the full version string with build information
pub fn get_version() -> &'static str {
    concat!(env!("CARGO_PKG_VERSION"), "+", env!("GIT_HASH"))
}

/// Run once against `args` (program name first), writing results to `out`.
pub fn run<I, T, W>(args: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    run_with(&ConfigResolver::new(), args, out)
}

pub fn run_with<I, T, W>(resolver: &ConfigResolver, args: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    info!("Starting {}", env!("CARGO_PKG_NAME"));

    let cli_values = resolver.parse_command_line(args)?;

    if cli_values.contains(HELP) {
        write!(out, "{}", resolver.render_help())?;
        return Ok(());
    }

    if cli_values.contains(VERSION) {
        writeln!(out, "{} {}", env!("CARGO_PKG_NAME"), get_version())?;
        return Ok(());
    }

    let (path, defaulted) = resolver.config_file_path(&cli_values);
    debug!(
        "Configuration file: {} ({})",
        path.display(),
        if defaulted { "default" } else { "explicit" }
    );
    let file_values = resolver.load_config_file_if_present(&path, defaulted)?;

    let resolved = resolver.merge(&cli_values, &file_values);
    write_variables(out, &resolved)
}
