//! Top-level errors for starting and running the application.

use crate::clients::ApiError;
use crate::screen::ScreenError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("No screen for path: {0}")]
    UnknownRoute(String),

    #[error("Backend client error: {0}")]
    Api(#[from] ApiError),

    #[error("Screen error: {0}")]
    Screen(#[from] ScreenError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Screen task failed: {0}")]
    Task(String),
}
