//! Configuration file loading
//!
//! Reading the file is delegated to a [`KeyValueSource`]; this module only
//! maps the flattened keys onto the schema and converts the raw values.

use crate::config::convert::ConverterRegistry;
use crate::config::resolver::PartialValues;
use crate::config::schema::OptionSchema;
use crate::error::{OptResolveError, Result};
use ini::{Ini, ParseOption};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Produces `(dotted key, raw value)` pairs from a configuration file.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueSource {
    fn read_pairs(&self, path: &Path) -> Result<Vec<(String, String)>>;
}

/// INI reader backed by `rust-ini`.
///
/// A `[owner]` section with `name = x` yields `("owner.name", "x")`; keys
/// before the first section keep their bare name. Keys keep their case and
/// values are taken literally, without unquoting or escape processing.
/// Pairs come back in file order, repeats included.
#[derive(Debug, Clone, Copy, Default)]
pub struct IniFileSource;

impl KeyValueSource for IniFileSource {
    fn read_pairs(&self, path: &Path) -> Result<Vec<(String, String)>> {
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };

        let ini = Ini::load_from_file_opt(path, options).map_err(|e| {
            OptResolveError::parse(format!(
                "can not read configuration file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut pairs = Vec::new();
        for (section, properties) in ini.iter() {
            for (key, value) in properties.iter() {
                let name = match section {
                    Some(section) => format!("{}.{}", section, key),
                    None => key.to_string(),
                };
                pairs.push((name, value.to_string()));
            }
        }

        Ok(pairs)
    }
}

/// Load option values from `path`.
///
/// A defaulted path that does not exist is skipped. An explicit path is
/// always read, so a missing file is an error.
pub fn load_config_file_if_present(
    path: &Path,
    defaulted: bool,
    schema: &OptionSchema,
    registry: &ConverterRegistry,
    source: &dyn KeyValueSource,
) -> Result<PartialValues> {
    if defaulted && !path.exists() {
        debug!("Default configuration file {} not found, skipping", path.display());
        return Ok(PartialValues::new());
    }

    let mut values = PartialValues::new();
    let mut seen = HashSet::new();
    for (key, raw) in source.read_pairs(path)? {
        let spec = schema
            .get(&key)
            .filter(|spec| spec.accepted_in_file())
            .ok_or_else(|| {
                OptResolveError::parse(format!(
                    "unrecognised option '{}' in configuration file '{}'",
                    key,
                    path.display()
                ))
            })?;

        if !seen.insert(spec.name) {
            return Err(OptResolveError::parse(format!(
                "option '{}' cannot be specified more than once in configuration file '{}'",
                spec.name,
                path.display()
            )));
        }

        let value = registry
            .convert(spec.kind, &raw)
            .map_err(|invalid| OptResolveError::invalid_value(spec.name, invalid))?;
        values.insert(spec.name, value);
    }

    debug!("{} option(s) loaded from {}", values.len(), path.display());
    Ok(values)
}
