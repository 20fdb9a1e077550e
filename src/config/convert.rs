//! Raw string to typed value conversion
//!
//! Both the command-line parser and the configuration file loader look up
//! the converter for an option's [`ValueKind`] here, so a value is accepted
//! or rejected identically regardless of where it came from.

use crate::config::schema::{Value, ValueKind};
use crate::config::severity::parse_severity;
use crate::error::InvalidValue;
use std::collections::HashMap;
use std::path::PathBuf;

pub type Converter = fn(&str) -> Result<Value, InvalidValue>;

/// Maps each value kind to its conversion function.
#[derive(Debug, Clone)]
pub struct ConverterRegistry {
    converters: HashMap<ValueKind, Converter>,
}

impl ConverterRegistry {
    pub fn empty() -> Self {
        Self {
            converters: HashMap::new(),
        }
    }

    pub fn register(&mut self, kind: ValueKind, converter: Converter) {
        self.converters.insert(kind, converter);
    }

    pub fn converter(&self, kind: ValueKind) -> Option<Converter> {
        self.converters.get(&kind).copied()
    }

    pub fn convert(&self, kind: ValueKind, raw: &str) -> Result<Value, InvalidValue> {
        match self.converter(kind) {
            Some(convert) => convert(raw),
            None => Err(InvalidValue::new(
                raw,
                format!("options of type {:?} do not take a value", kind),
            )),
        }
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(ValueKind::String, convert_string);
        registry.register(ValueKind::Integer, convert_integer);
        registry.register(ValueKind::Boolean, convert_boolean);
        registry.register(ValueKind::Severity, convert_severity);
        registry.register(ValueKind::Path, convert_path);
        registry
    }
}

fn convert_string(raw: &str) -> Result<Value, InvalidValue> {
    Ok(Value::String(raw.to_string()))
}

fn convert_path(raw: &str) -> Result<Value, InvalidValue> {
    if raw.is_empty() {
        return Err(InvalidValue::new(raw, "path must not be empty"));
    }
    Ok(Value::Path(PathBuf::from(raw)))
}

fn convert_integer(raw: &str) -> Result<Value, InvalidValue> {
    raw.parse::<i32>()
        .map(Value::Integer)
        .map_err(|e| InvalidValue::new(raw, format!("expected an integer ({})", e)))
}

fn convert_boolean(raw: &str) -> Result<Value, InvalidValue> {
    match raw.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(Value::Boolean(true)),
        "false" | "no" | "off" | "0" => Ok(Value::Boolean(false)),
        _ => Err(InvalidValue::new(
            raw,
            "expected one of true, false, yes, no, on, off, 1, 0",
        )),
    }
}

fn convert_severity(raw: &str) -> Result<Value, InvalidValue> {
    parse_severity(raw).map(Value::Severity)
}
