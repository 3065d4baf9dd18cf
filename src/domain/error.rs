//! Domain error types

use thiserror::Error;

/// Error when a history capacity is not a positive integer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid history capacity: \"{input}\". Expected a positive whole number (e.g., 50, 200)")]
pub struct InvalidCapacityError {
    pub input: String,
}

/// Error when an unknown paste mode is requested
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid mode: \"{input}\". Valid modes are: default, stack, queue, random")]
pub struct InvalidModeError {
    pub input: String,
}

/// Error when parsing a hotkey accelerator string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid hotkey: \"{input}\". {reason}")]
pub struct AcceleratorParseError {
    pub input: String,
    pub reason: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
