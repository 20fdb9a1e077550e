//! Command line parsing
//!
//! The clap command is generated from the option schema rather than derived,
//! since option names are dotted (`--owner.age`) and every value goes through
//! the converter registry.

use crate::config::convert::ConverterRegistry;
use crate::config::resolver::PartialValues;
use crate::config::schema::{OptionSchema, OptionSpec, Value};
use crate::error::{InvalidValue, OptResolveError, Result};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::error::Error as _;
use std::ffi::OsString;

/// Build the clap command for every option in the schema.
pub fn build_command(schema: &OptionSchema, registry: &ConverterRegistry) -> Command {
    let command = Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .disable_help_flag(true)
        .disable_version_flag(true);

    schema
        .iter()
        .fold(command, |command, spec| command.arg(build_arg(spec, registry)))
}

fn build_arg(spec: &OptionSpec, registry: &ConverterRegistry) -> Arg {
    let mut arg = Arg::new(spec.name).long(spec.name);
    if let Some(short) = spec.short {
        arg = arg.short(short);
    }

    match registry.converter(spec.kind) {
        Some(convert) => {
            let help = match &spec.default {
                Some(default) => format!("{} [default: {}]", spec.description, default),
                None => spec.description.to_string(),
            };
            arg.help(help)
                .value_name(spec.kind.value_name())
                .num_args(1)
                .action(ArgAction::Set)
                .value_parser(move |raw: &str| convert(raw))
        }
        // Presence-only
        None => arg.help(spec.description).action(ArgAction::SetTrue),
    }
}

/// Parse `args` (program name first) and collect the options given explicitly.
pub fn parse_command_line<I, T>(
    args: I,
    schema: &OptionSchema,
    registry: &ConverterRegistry,
) -> Result<PartialValues>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_command(schema, registry)
        .try_get_matches_from(args)
        .map_err(from_clap_error)?;

    Ok(collect_values(&matches, schema, registry))
}

fn collect_values(
    matches: &ArgMatches,
    schema: &OptionSchema,
    registry: &ConverterRegistry,
) -> PartialValues {
    let mut values = PartialValues::new();

    for spec in schema.iter() {
        if registry.converter(spec.kind).is_some() {
            if let Some(value) = matches.get_one::<Value>(spec.name) {
                values.insert(spec.name, value.clone());
            }
        } else if matches.get_flag(spec.name) {
            values.insert(spec.name, Value::Flag);
        }
    }

    values
}

fn from_clap_error(err: clap::Error) -> OptResolveError {
    if err.kind() == ErrorKind::ValueValidation {
        let invalid = err
            .source()
            .and_then(|source| source.downcast_ref::<InvalidValue>())
            .cloned();

        if let Some(invalid) = invalid {
            let option = match err.get(ContextKind::InvalidArg) {
                Some(ContextValue::String(arg)) => option_name(arg),
                _ => String::new(),
            };
            return OptResolveError::invalid_value(option, invalid);
        }
    }

    OptResolveError::parse(first_line(&err.to_string()))
}

/// `--owner.age <INTEGER>` -> `owner.age`
fn option_name(rendered: &str) -> String {
    rendered
        .trim_start_matches('-')
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}

fn first_line(rendered: &str) -> String {
    let line = rendered.lines().next().unwrap_or_default().trim();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}
