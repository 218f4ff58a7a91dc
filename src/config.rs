//! Immutable game configuration.
//!
//! Built once at startup and handed by reference to everything that needs
//! arena geometry or file locations.  Nothing in the crate reads ambient
//! globals for these values.

use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Logical arena width in world units.
    pub width: f32,
    /// Logical arena height in world units.
    pub height: f32,
    /// Target simulation rate.
    pub fps: u32,
    /// Where the `{"high_score": N}` record lives.
    pub high_score_path: PathBuf,
    /// Log file for the tracing subscriber (the terminal is the game screen).
    pub log_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            fps: 60,
            high_score_path: PathBuf::from("high_score.json"),
            log_path: PathBuf::from("space_explorer.log"),
        }
    }
}

impl GameConfig {
    /// Wall-clock budget of one frame at the configured rate.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    /// True when a point has left the arena rectangle.
    pub fn out_of_bounds(&self, x: f32, y: f32) -> bool {
        x < 0.0 || x > self.width || y < 0.0 || y > self.height
    }
}
