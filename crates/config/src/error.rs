//! Configuration error types

use thiserror::Error;

/// Errors when loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config not found at {path}: {message}")]
    FileNotFound { path: String, message: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Config source error: {0}")]
    Source(#[from] config::ConfigError),
}
