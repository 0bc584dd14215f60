//! Core error types for worldclock-core.
//!
//! Computation and search never fail: a roster entry with an unknown
//! timezone is skipped, and every query string has a defined result. Errors
//! surface only when a caller wants a rejection, i.e. when a roster edit is
//! validated or the configuration file is read or written.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for worldclock-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON view of the configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// The home directory could not be determined
    #[error("could not determine the configuration directory")]
    NoConfigDir,
}

/// Validation errors raised when a roster entry is added or edited.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The timezone identifier is not in the IANA database
    #[error("invalid timezone '{0}'")]
    UnknownTimezone(String),

    /// An hour value outside 0..=24
    #[error("invalid value for '{field}': {value} is not an hour between 0 and 24")]
    InvalidHour { field: &'static str, value: u8 },

    /// Work hours must form a non-empty, non-wrapping range
    #[error("work start ({start}) must be before work end ({end})")]
    InvalidWorkHours { start: u8, end: u8 },

    /// Out of bounds
    #[error("Index {index} out of bounds for {collection} (length: {len})")]
    OutOfBounds {
        collection: String,
        index: usize,
        len: usize,
    },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
