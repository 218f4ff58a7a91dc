//! High-score persistence: a JSON file holding `{"high_score": N}`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{GameError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    #[serde(default)]
    pub high_score: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored score.  A missing file is a first run and reads as 0;
    /// anything else that goes wrong is an error.
    pub fn load(&self) -> Result<u32> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no high score file, starting at 0");
                return Ok(0);
            }
            Err(source) => {
                return Err(GameError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let record: HighScoreRecord =
            serde_json::from_str(&text).map_err(|source| GameError::Parse {
                path: self.path.clone(),
                source,
            })?;
        info!(high_score = record.high_score, "loaded high score");
        Ok(record.high_score)
    }

    /// Overwrite the file with `high_score`.
    pub fn save(&self, high_score: u32) -> Result<()> {
        let text = serde_json::to_string(&HighScoreRecord { high_score }).map_err(|source| {
            GameError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, text).map_err(|source| GameError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!(high_score, path = %self.path.display(), "saved high score");
        Ok(())
    }
}
