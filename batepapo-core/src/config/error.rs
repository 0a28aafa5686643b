//! Error types for configuration loading

use thiserror::Error;

/// Errors that can occur while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that failed to parse
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),

    /// Configuration file could not be read
    #[error("Failed to read configuration file: {0}")]
    FileReadError(String),

    /// Configuration file could not be parsed
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Configuration failed a validation rule
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}
