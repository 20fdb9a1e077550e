//! Logging severity levels
//!
//! The `logging` option is the one setting whose type is not a primitive;
//! its values are restricted to a closed set of uppercase tags.

use crate::error::InvalidValue;
use std::fmt;
use std::str::FromStr;

/// Ordered logging verbosity, least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeverityLevel {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
}

impl SeverityLevel {
    pub const ALL: [SeverityLevel; 5] = [
        SeverityLevel::Trace,
        SeverityLevel::Debug,
        SeverityLevel::Info,
        SeverityLevel::Warning,
        SeverityLevel::Error,
    ];

    /// Canonical tag, used for both parsing and display.
    pub fn tag(self) -> &'static str {
        match self {
            SeverityLevel::Trace => "TRACE",
            SeverityLevel::Debug => "DEBUG",
            SeverityLevel::Info => "INFO",
            SeverityLevel::Warning => "WARNING",
            SeverityLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SeverityLevel {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_severity(s)
    }
}

/// Parse a severity tag, ignoring letter case.
///
/// Only whole ASCII tags match. `WARN` is accepted as a spelling of `WARNING`.
pub fn parse_severity(raw: &str) -> Result<SeverityLevel, InvalidValue> {
    let upper = raw.to_ascii_uppercase();

    if upper == "WARN" {
        return Ok(SeverityLevel::Warning);
    }

    SeverityLevel::ALL
        .into_iter()
        .find(|level| level.tag() == upper)
        .ok_or_else(|| {
            let expected: Vec<&str> = SeverityLevel::ALL.iter().map(|l| l.tag()).collect();
            InvalidValue::new(raw, format!("expected one of {}", expected.join(", ")))
        })
}
