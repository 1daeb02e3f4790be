use crate::registry::Domain;
use thiserror::Error;

/// Errors returned by the conversion engine.
///
/// Malformed user input and caller bugs (a unit key that no table knows) travel
/// through the same channel; callers render a neutral placeholder for either.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("Unknown {domain} unit: '{unit}'")]
    UnknownUnit { domain: Domain, unit: String },

    #[error("Unknown domain: '{0}'")]
    UnknownDomain(String),

    #[error("Invalid {format} value '{input}': {reason}")]
    InvalidFormat {
        format: &'static str,
        input: String,
        reason: String,
    },

    #[error("Value must be a finite number, got {0}")]
    NonFiniteValue(f64),

    #[error("Invalid viewport frame {width}x{height}: dimensions must be positive")]
    InvalidReferenceFrame { width: f64, height: f64 },

    #[error("Invalid {domain} unit table: {reason}")]
    InvalidTable { domain: Domain, reason: String },

    #[error("Could not parse query '{0}'")]
    InvalidQuery(String),

    #[error("No domain converts between '{from}' and '{to}'")]
    IncompatibleUnits { from: String, to: String },

    #[error("The {0} domain is a reference table and has no converter")]
    NotConvertible(Domain),
}

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors raised while loading an [`crate::config::EngineConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for '{key}': {reason}")]
    Invalid { key: &'static str, reason: String },
}
