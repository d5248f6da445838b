//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] maps
//! any error to [`crate::exit_code::ERROR`].

use std::fmt;

use holdem_ai::AiError;
use holdem_engine::errors::GameError;

use crate::config::ConfigError;

#[derive(Debug)]
pub enum CliError {
    /// I/O error (hand history files, stdout/stderr writes)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    Config(String),

    /// Engine rejected an operation or broke an invariant
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<AiError> for CliError {
    fn from(error: AiError) -> Self {
        CliError::InvalidInput(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}
