//! Session orchestrator: the Playing / GameOver state machine around
//! `compute::tick`, the cooperative running flag, and high-score persistence.

use tracing::{error, info};

use crate::compute::{init_state, reset, tick};
use crate::config::GameConfig;
use crate::entities::{GameState, GameStatus};
use crate::error::Result;
use crate::highscore::HighScoreStore;
use crate::input::FrameInput;
use crate::random::GameRng;

/// State change produced by one call to `Game::frame`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    None,
    /// The player died this frame; carries the final score.
    GameOver { final_score: u32 },
    Restarted,
}

pub struct Game {
    config: GameConfig,
    state: GameState,
    store: HighScoreStore,
    running: bool,
}

impl Game {
    /// Load the stored high score and start a fresh session.
    pub fn new(config: GameConfig) -> Result<Self> {
        let store = HighScoreStore::new(config.high_score_path.clone());
        Self::with_store(config, store)
    }

    pub fn with_store(config: GameConfig, store: HighScoreStore) -> Result<Self> {
        let high_score = store.load()?;
        let state = init_state(&config, high_score);
        info!(high_score, "session started");
        Ok(Self {
            config,
            state,
            store,
            running: true,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted scenarios.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Process one frame of input.
    ///
    /// Quit only clears the running flag; the rest of the frame still runs.
    /// The error case is a failed high-score save on game over, after which
    /// the session is still in a consistent GameOver state.
    pub fn frame(&mut self, input: &FrameInput, rng: &mut impl GameRng) -> Result<Transition> {
        if input.quit && self.running {
            info!("quit requested");
            self.running = false;
        }

        match self.state.status {
            GameStatus::Playing => {
                self.state = tick(&self.state, input, &self.config, rng);
                if self.state.status == GameStatus::GameOver {
                    let final_score = self.state.player.score;
                    info!(
                        final_score,
                        wave = self.state.wave,
                        kills = self.state.kills,
                        "game over"
                    );
                    if let Err(err) = self.store.save(self.state.high_score) {
                        error!(%err, "could not persist high score");
                        return Err(err);
                    }
                    return Ok(Transition::GameOver { final_score });
                }
                Ok(Transition::None)
            }
            GameStatus::GameOver => {
                if input.restart {
                    self.restart();
                    return Ok(Transition::Restarted);
                }
                Ok(Transition::None)
            }
        }
    }

    /// Fresh entities and counters; the in-memory high score carries over.
    pub fn restart(&mut self) {
        self.state = reset(&self.state, &self.config);
        info!(high_score = self.state.high_score, "restarted");
    }
}
