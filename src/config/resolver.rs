//! Precedence merge and the resolver facade
//!
//! Values come from three layers, highest priority first:
//! 1. Command line arguments
//! 2. Configuration file
//! 3. Schema defaults

use crate::config::cmdline::{build_command, parse_command_line};
use crate::config::convert::ConverterRegistry;
use crate::config::file::{load_config_file_if_present, IniFileSource, KeyValueSource};
use crate::config::schema::{define_schema, OptionSchema, Value, CONFIGURATION_FILE};
use crate::error::Result;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

/// Values explicitly supplied by one source, keyed by option name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialValues {
    values: HashMap<String, Value>,
}

impl PartialValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<S: Into<String>>(&mut self, name: S, value: Value) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for PartialValues {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}

/// Which layer supplied a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    CommandLine,
    ConfigFile,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVariable {
    pub name: &'static str,
    pub value: Value,
    pub source: Source,
}

impl ResolvedVariable {
    pub fn is_defaulted(&self) -> bool {
        self.source == Source::Default
    }
}

/// Final option values, in schema definition order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMapping {
    variables: Vec<ResolvedVariable>,
}

impl ResolvedMapping {
    pub fn get(&self, name: &str) -> Option<&ResolvedVariable> {
        self.variables.iter().find(|var| var.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedVariable> {
        self.variables.iter()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// Resolve every schema entry against the command line and file values.
///
/// Options without a default (presence-only flags) are included only when a
/// source supplied them.
pub fn merge(
    schema: &OptionSchema,
    cli_values: &PartialValues,
    file_values: &PartialValues,
) -> ResolvedMapping {
    let variables = schema
        .iter()
        .filter_map(|spec| {
            let (value, source) = if let Some(value) = cli_values.get(spec.name) {
                (value.clone(), Source::CommandLine)
            } else if let Some(value) = file_values.get(spec.name) {
                (value.clone(), Source::ConfigFile)
            } else {
                (spec.default.clone()?, Source::Default)
            };

            Some(ResolvedVariable {
                name: spec.name,
                value,
                source,
            })
        })
        .collect();

    ResolvedMapping { variables }
}

/// Owns the schema and converters and runs each resolution step.
pub struct ConfigResolver {
    schema: OptionSchema,
    registry: ConverterRegistry,
    file_source: Box<dyn KeyValueSource>,
}

impl ConfigResolver {
    pub fn new() -> Self {
        Self::with_file_source(Box::new(IniFileSource))
    }

    pub fn with_file_source(file_source: Box<dyn KeyValueSource>) -> Self {
        Self {
            schema: define_schema(),
            registry: ConverterRegistry::default(),
            file_source,
        }
    }

    pub fn schema(&self) -> &OptionSchema {
        &self.schema
    }

    pub fn parse_command_line<I, T>(&self, args: I) -> Result<PartialValues>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let values = parse_command_line(args, &self.schema, &self.registry)?;
        debug!("{} option(s) set on the command line", values.len());
        Ok(values)
    }

    /// Configuration file path and whether it is the schema default.
    pub fn config_file_path(&self, cli_values: &PartialValues) -> (PathBuf, bool) {
        let explicit = cli_values.get(CONFIGURATION_FILE).and_then(Value::as_path);
        if let Some(path) = explicit {
            return (path.clone(), false);
        }

        let default = self
            .schema
            .get(CONFIGURATION_FILE)
            .and_then(|spec| spec.default.as_ref())
            .and_then(Value::as_path)
            .cloned()
            .unwrap_or_default();
        (default, true)
    }

    pub fn load_config_file_if_present(
        &self,
        path: &std::path::Path,
        defaulted: bool,
    ) -> Result<PartialValues> {
        load_config_file_if_present(
            path,
            defaulted,
            &self.schema,
            &self.registry,
            self.file_source.as_ref(),
        )
    }

    pub fn merge(&self, cli_values: &PartialValues, file_values: &PartialValues) -> ResolvedMapping {
        merge(&self.schema, cli_values, file_values)
    }

    /// Run the whole pipeline: command line, configuration file, merge.
    pub fn resolve<I, T>(&self, args: I) -> Result<ResolvedMapping>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli_values = self.parse_command_line(args)?;
        let (path, defaulted) = self.config_file_path(&cli_values);
        let file_values = self.load_config_file_if_present(&path, defaulted)?;
        Ok(self.merge(&cli_values, &file_values))
    }

    /// Help text generated from the schema.
    pub fn render_help(&self) -> String {
        let mut command = build_command(&self.schema, &self.registry);
        command.render_help().to_string()
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}
