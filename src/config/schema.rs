//! Option schema
//!
//! Declares every recognized option with its type, default value and help
//! text. The schema is built once at startup and never modified.

use crate::config::severity::SeverityLevel;
use std::fmt;
use std::path::PathBuf;

pub const HELP: &str = "help";
pub const VERSION: &str = "version";
pub const CONFIGURATION_FILE: &str = "configuration_file";
pub const DEFAULT_CONFIGURATION_FILE: &str = "foobar.ini";

/// Declared type of an option's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Integer,
    Boolean,
    Severity,
    Path,
    /// Presence-only; takes no value.
    Flag,
}

impl ValueKind {
    /// Placeholder shown in help output.
    pub fn value_name(self) -> &'static str {
        match self {
            ValueKind::String => "STRING",
            ValueKind::Integer => "INTEGER",
            ValueKind::Boolean => "BOOL",
            ValueKind::Severity => "LEVEL",
            ValueKind::Path => "PATH",
            ValueKind::Flag => "",
        }
    }
}

/// A typed option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Integer(i32),
    Boolean(bool),
    Severity(SeverityLevel),
    Path(PathBuf),
    Flag,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Integer(_) => ValueKind::Integer,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Severity(_) => ValueKind::Severity,
            Value::Path(_) => ValueKind::Path,
            Value::Flag => ValueKind::Flag,
        }
    }

    pub fn as_path(&self) -> Option<&PathBuf> {
        match self {
            Value::Path(path) => Some(path),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Boolean(b) => write!(f, "{}", u8::from(*b)),
            Value::Severity(level) => write!(f, "{}", level),
            Value::Path(path) => write!(f, "{}", path.display()),
            Value::Flag => f.write_str("1"),
        }
    }
}

/// Where an option may be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionScope {
    /// Command line and configuration file.
    Common,
    CommandLineOnly,
}

/// One recognized option.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    pub name: &'static str,
    pub short: Option<char>,
    pub kind: ValueKind,
    pub default: Option<Value>,
    pub description: &'static str,
    pub scope: OptionScope,
}

impl OptionSpec {
    fn common(name: &'static str, default: Value, description: &'static str) -> Self {
        Self {
            name,
            short: None,
            kind: default.kind(),
            default: Some(default),
            description,
            scope: OptionScope::Common,
        }
    }

    fn flag(name: &'static str, short: char, description: &'static str) -> Self {
        Self {
            name,
            short: Some(short),
            kind: ValueKind::Flag,
            default: None,
            description,
            scope: OptionScope::CommandLineOnly,
        }
    }

    pub fn accepted_in_file(&self) -> bool {
        self.scope == OptionScope::Common
    }
}

/// The ordered set of recognized options.
#[derive(Debug, Clone)]
pub struct OptionSchema {
    entries: Vec<OptionSpec>,
}

impl OptionSchema {
    pub fn new(entries: Vec<OptionSpec>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.entries.iter().find(|spec| spec.name == name)
    }

    /// Entries in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionSpec> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The fixed schema: common options first, then the command-line-only ones.
pub fn define_schema() -> OptionSchema {
    OptionSchema::new(vec![
        OptionSpec::common("owner.name", Value::String("bob".to_string()), "Owner's name."),
        OptionSpec::common("owner.sex", Value::String("female".to_string()), "Owner's sex."),
        OptionSpec::common("owner.age", Value::Integer(18), "Owner's age."),
        OptionSpec::common("owner.has_pet", Value::Boolean(true), "Owner's has pet."),
        OptionSpec::common("animal.type", Value::String("cat".to_string()), "Type of animal."),
        OptionSpec::common(
            "animal.pet_name",
            Value::String("minou".to_string()),
            "Animal pet name.",
        ),
        OptionSpec::common("logging", Value::Severity(SeverityLevel::Debug), "Logging level"),
        OptionSpec::flag(VERSION, 'v', "Print the version information."),
        OptionSpec::flag(HELP, 'h', "Print the help information."),
        OptionSpec {
            name: CONFIGURATION_FILE,
            short: None,
            kind: ValueKind::Path,
            default: Some(Value::Path(PathBuf::from(DEFAULT_CONFIGURATION_FILE))),
            description: "Configuration file to load the options",
            scope: OptionScope::CommandLineOnly,
        },
    ])
}
