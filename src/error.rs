//! Error enum
use std::fmt;

use crate::record::Variant;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Config(ConfigError),
    /// A record of a variant the filter does not declare reached `process`.
    UnhandledVariant {
        filter: &'static str,
        variant: Variant,
    },
}

/// Invalid filter configuration, raised at construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidLocation(String),
    InvalidAction(String),
    InvalidMode(String),
    InvalidVariant(String),
    ThresholdOutOfRange { name: &'static str, value: f64 },
    NoLocation,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLocation(l) => write!(f, "Invalid location: {l}"),
            Self::InvalidAction(a) => write!(f, "Invalid action: {a}"),
            Self::InvalidMode(m) => write!(f, "Invalid de-macronization mode: {m}"),
            Self::InvalidVariant(v) => write!(f, "Invalid record type: {v}"),
            Self::ThresholdOutOfRange { name, value } => {
                write!(f, "{name} must be within [0, 1], got {value}")
            }
            Self::NoLocation => write!(f, "At least one location is required"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Serde(e) => write!(f, "malformed record: {e}"),
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::UnhandledVariant { filter, variant } => {
                write!(f, "Unhandled data type for {filter}: {variant}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Serde(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::UnhandledVariant { .. } => None,
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Error {
        Error::Config(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}
