//! Error types for the interactive shell.

use thiserror::Error;

/// Errors produced while reading user input. They are shown to the user and
/// never reach the screen actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShellError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument for `{0}`")]
    MissingArgument(&'static str),

    #[error("Invalid product id: {0}")]
    InvalidProductId(String),
}
