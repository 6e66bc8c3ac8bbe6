use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::food::PlacementError;

/// Errors that stop the application. Crashing the snake is not one of them.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid settings: {0}")]
    Config(#[from] ConfigError),
    #[error("could not place an item: {0}")]
    Placement(#[from] PlacementError),
    #[error("could not start logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}
