//! Core error types for habitclock-core.
//!
//! A small thiserror hierarchy: configuration and validation failures are the
//! only recoverable errors this library produces. Conditions like "start while
//! already running" are no-ops, not errors.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for habitclock-core.
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

    /// Serialization/deserialization errors
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

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Config directory could not be resolved or created
    #[error("Failed to prepare configuration directory: {0}")]
    DirFailed(String),
}

/// Input validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A timer cap of zero seconds would make the progress ratio undefined.
    #[error("maximum duration must be a positive number of seconds")]
    ZeroMaxDuration,

    /// A picked duration of 0h 0m cannot be used as a timer cap.
    #[error("picked duration must be longer than zero")]
    EmptyPickedDuration,
}
