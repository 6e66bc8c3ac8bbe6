use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::GridConfig;

/// Directory under the platform data dir holding scores and the log file.
pub const APP_DIR_NAME: &str = "bridge-snake";
const SCORE_FILE_NAME: &str = "scores.json";

/// Best lengths, one per grid size (a bigger board allows a longer snake).
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct HighScores {
    #[serde(default)]
    best: BTreeMap<String, u32>,
}

impl HighScores {
    /// Best score recorded on `grid`, zero when none.
    #[must_use]
    pub fn best_for(&self, grid: GridConfig) -> u32 {
        self.best.get(&grid_key(grid)).copied().unwrap_or(0)
    }

    /// Stores `score` if it beats the current best. Returns true when it did.
    pub fn record(&mut self, grid: GridConfig, score: u32) -> bool {
        let best = self.best.entry(grid_key(grid)).or_insert(0);
        if score > *best {
            *best = score;
            return true;
        }
        false
    }
}

fn grid_key(grid: GridConfig) -> String {
    format!("{}x{}", grid.width, grid.height)
}

/// Returns the platform data directory for this game.
#[must_use]
pub fn data_dir() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    data_dir().join(SCORE_FILE_NAME)
}

/// Loads high scores from disk.
///
/// Returns an empty table when the score file does not yet exist (first run).
/// Returns `Err` when the file exists but cannot be read or parsed.
pub fn load_high_scores() -> io::Result<HighScores> {
    load_high_scores_from_path(&scores_path())
}

/// Saves high scores to disk, creating parent directories when needed.
pub fn save_high_scores(scores: &HighScores) -> io::Result<()> {
    save_high_scores_to_path(&scores_path(), scores)
}

fn load_high_scores_from_path(path: &Path) -> io::Result<HighScores> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HighScores::default()),
        Err(e) => return Err(e),
    };

    serde_json::from_str::<HighScores>(&raw)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn save_high_scores_to_path(path: &Path, scores: &HighScores) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(scores)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;

    fs::write(path, json)
}
