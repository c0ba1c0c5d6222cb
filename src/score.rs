use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "grid-snake";
const SCORE_FILE_NAME: &str = "scores.json";

/// Failures of the high-score store.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("high score store I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("high score file is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Key-value home of the persisted high score.
pub trait HighScoreStore {
    /// Returns the stored high score, `Ok(0)` when nothing was stored yet.
    fn load(&self) -> Result<u32, ScoreError>;

    fn save(&mut self, score: u32) -> Result<(), ScoreError>;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn default_scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// High score kept as a small JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> Result<u32, ScoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        let file = serde_json::from_str::<ScoreFile>(&raw)?;
        Ok(file.high_score)
    }

    /// Writes the score, creating parent directories when needed.
    fn save(&mut self, score: u32) -> Result<(), ScoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let payload = ScoreFile { high_score: score };
        let json = serde_json::to_string_pretty(&payload)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-process store; nothing survives the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore {
    high_score: Option<u32>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_score(score: u32) -> Self {
        Self {
            high_score: Some(score),
        }
    }

    #[must_use]
    pub fn stored(&self) -> Option<u32> {
        self.high_score
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32, ScoreError> {
        Ok(self.high_score.unwrap_or(0))
    }

    fn save(&mut self, score: u32) -> Result<(), ScoreError> {
        self.high_score = Some(score);
        Ok(())
    }
}
