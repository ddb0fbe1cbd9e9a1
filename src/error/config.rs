//! Configuration error module.
//!
//! This module defines error types that may occur during configuration loading,
//! parsing, and validation operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
///
/// Loading reads three layers (defaults, an optional file, the environment).
/// Environment values cannot fail on their own, only once merged with the
/// others, so a parse error names `defaults`, `file` or `merged`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error when the configuration file is missing.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when a configuration layer cannot be read or merged.
    #[error("Failed to parse {layer} configuration: {message}")]
    ParseError {
        /// The failing layer: `defaults`, `file` or `merged`
        layer: &'static str,
        /// What went wrong
        message: String,
    },

    /// Error when validating the configuration.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error when a configuration value has an invalid type.
    #[error("Invalid configuration value type for {key}: expected {expected}, got {actual}")]
    InvalidValueType {
        /// The key of the invalid value
        key: String,
        /// The expected type
        expected: String,
        /// The actual type
        actual: String,
    },

    /// Error when a configuration value is out of the valid range.
    #[error("Configuration value {key} is out of valid range: {message}")]
    ValueOutOfRange {
        /// The key of the invalid value
        key: String,
        /// Description of the valid range
        message: String,
    },
}

impl ConfigError {
    /// Builds a [`ConfigError::ParseError`] for the given layer.
    pub(crate) fn parse<E: ToString>(layer: &'static str, error: E) -> Self {
        ConfigError::ParseError {
            layer,
            message: error.to_string(),
        }
    }
}
