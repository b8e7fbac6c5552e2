use std::io;

/// Errors that can occur while composing infrastructure tool commands
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid {family} command: '{command}'")]
    InvalidCommand { family: String, command: String },

    #[error("Invalid GitHub context: {0}")]
    InvalidContext(String),

    #[error("Empty command: {0}")]
    EmptyCommand(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_command(family: &str, command: &str) -> Self {
        Error::InvalidCommand {
            family: family.to_string(),
            command: command.to_string(),
        }
    }
}

/// Result type alias for command composition
pub type Result<T> = std::result::Result<T, Error>;
