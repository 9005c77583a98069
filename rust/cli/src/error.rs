//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; engine, history and
//! configuration failures convert into it so handlers can use `?` throughout.

use std::fmt;

use sixmax_engine::errors::GameError;
use sixmax_engine::history::HistoryError;

use crate::config::ConfigError;

#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, stdin reads)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// An engine operation was rejected
    Engine(GameError),

    /// Hand history could not be read or written
    History(HistoryError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
            CliError::History(e) => write!(f, "History error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            CliError::History(e) => Some(e),
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
        CliError::Engine(error)
    }
}

impl From<HistoryError> for CliError {
    fn from(error: HistoryError) -> Self {
        CliError::History(error)
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}
