//! Per-frame simulation.
//!
//! `tick` takes an immutable reference to the current `GameState` (plus the
//! frame's input and an RNG handle) and returns a brand-new `GameState`.
//! Side effects are limited to the injected RNG.

use crate::behavior;
use crate::collision;
use crate::config::GameConfig;
use crate::entities::{GameState, GameStatus, Player};
use crate::input::FrameInput;
use crate::random::GameRng;
use crate::spawner;

/// Distance of the player's start position above the arena floor.
const PLAYER_START_LIFT: f32 = 100.0;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh session: wave 1, nothing on screen, timers ready to fire.
pub fn init_state(config: &GameConfig, high_score: u32) -> GameState {
    GameState {
        player: Player::new(config.center_x(), config.height - PLAYER_START_LIFT),
        bullets: Vec::new(),
        enemy_bullets: Vec::new(),
        enemies: Vec::new(),
        boss: None,
        power_ups: Vec::new(),
        particles: Vec::new(),
        enemy_spawn_timer: 0,
        power_up_spawn_timer: 0,
        wave: 1,
        kills: 0,
        boss_spawned: false,
        high_score,
        status: GameStatus::Playing,
        frame: 0,
    }
}

/// Start over, keeping only the best score.
pub fn reset(state: &GameState, config: &GameConfig) -> GameState {
    init_state(config, state.high_score.max(state.player.score))
}

// ── Per-frame tick (nearly pure, RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  A state that is already over is
/// returned unchanged.
pub fn tick(
    state: &GameState,
    input: &FrameInput,
    config: &GameConfig,
    rng: &mut impl GameRng,
) -> GameState {
    let mut next = state.clone();
    if next.status == GameStatus::GameOver {
        return next;
    }
    step(&mut next, input, config, rng);
    next
}

/// The frame body, in place.
fn step(state: &mut GameState, input: &FrameInput, config: &GameConfig, rng: &mut impl GameRng) {
    state.frame += 1;

    // ── 1. Player ────────────────────────────────────────────────────────────
    behavior::update_player(&mut state.player, input, config);
    if input.shoot {
        behavior::shoot(&mut state.player, &mut state.bullets);
    }

    // ── 2. Advance and prune ─────────────────────────────────────────────────
    for bullet in &mut state.bullets {
        behavior::advance_bullet(bullet);
    }
    state.bullets.retain(|b| !config.out_of_bounds(b.x, b.y));

    for bullet in &mut state.enemy_bullets {
        behavior::advance_bullet(bullet);
    }
    state.enemy_bullets.retain(|b| !config.out_of_bounds(b.x, b.y));

    for enemy in &mut state.enemies {
        behavior::update_enemy(enemy, &state.player, &mut state.enemy_bullets, rng);
    }
    state.enemies.retain(|e| e.y <= config.height);

    if let Some(boss) = state.boss.as_mut() {
        behavior::update_boss(boss, &state.player, &mut state.enemy_bullets, config, rng);
    }

    for power_up in &mut state.power_ups {
        behavior::advance_power_up(power_up);
    }
    state.power_ups.retain(|p| p.y <= config.height);

    for particle in &mut state.particles {
        behavior::advance_particle(particle);
    }
    state.particles.retain(|p| p.lifetime > 0);

    // ── 3. Spawning ──────────────────────────────────────────────────────────
    spawner::run(state, config, rng);

    // ── 4. Collisions ────────────────────────────────────────────────────────
    collision::resolve(state, rng);

    // ── 5. Score bookkeeping & terminal check ────────────────────────────────
    state.high_score = state.high_score.max(state.player.score);
    if !state.player.is_alive() {
        state.status = GameStatus::GameOver;
    }
}
