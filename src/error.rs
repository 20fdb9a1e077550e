use thiserror::Error;

/// A raw value that could not be converted to its declared type.
///
/// Returned by the converters in [`crate::config::convert`] and by
/// [`crate::config::parse_severity`]; it carries no option name because the
/// same converter serves every option of a given kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value '{value}': {reason}")]
pub struct InvalidValue {
    pub value: String,
    pub reason: String,
}

impl InvalidValue {
    pub fn new<V: Into<String>, R: Into<String>>(value: V, reason: R) -> Self {
        Self {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Main error type for layered-opts operations
#[derive(Debug, Error)]
pub enum OptResolveError {
    #[error("{0}")]
    ParseError(String),

    #[error("the argument ('{}') for option '{option}' is invalid: {}", .invalid.value, .invalid.reason)]
    InvalidValue { option: String, invalid: InvalidValue },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl OptResolveError {
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Self::ParseError(msg.into())
    }

    pub fn invalid_value<S: Into<String>>(option: S, invalid: InvalidValue) -> Self {
        Self::InvalidValue {
            option: option.into(),
            invalid,
        }
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::ParseError(_))
    }

    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }
}

/// Result type alias for layered-opts operations
pub type Result<T> = std::result::Result<T, OptResolveError>;
