use std::path::PathBuf;

use thiserror::Error;

/// Faults from the persisted high-score store.  Simulation itself cannot fail.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to access high score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed high score file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, GameError>;
