use std::fs::{self, File};
use std::path::PathBuf;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::AppError;
use crate::score::data_dir;

const LOG_FILE_NAME: &str = "bridge-snake.log";

/// Sends log output to a file; the terminal belongs to the UI while playing.
///
/// Returns the path written to.
pub fn init_file_logger(level: LevelFilter) -> Result<PathBuf, AppError> {
    let dir = data_dir();
    fs::create_dir_all(&dir)?;

    let path = dir.join(LOG_FILE_NAME);
    WriteLogger::init(level, Config::default(), File::create(&path)?)?;

    Ok(path)
}
