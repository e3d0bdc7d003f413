//! Error types for the navigation host.
//!
//! The navigation core accepts every input and has no error type of its own.
//! These cover the host around it: configuration and interactive commands.

/// Top-level error type for the host.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Interactive command errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Command `{command}` needs a target")]
    MissingTarget { command: String },

    #[error("Command `{command}` takes no arguments")]
    UnexpectedArgument { command: String },
}

/// Result type alias for the host.
pub type Result<T> = std::result::Result<T, Error>;
