//! Spawn cadence: enemy timer, power-up timer, and the boss trigger.
//!
//! Timers count down once per frame and fire at `<= 0`.  All rolls go
//! through the injected `GameRng`.

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::entities::{Boss, Enemy, EnemyKind, GameState, PowerUp, PowerUpKind};
use crate::random::GameRng;

/// Horizontal keep-out from each arena edge for new spawns.
const SPAWN_MARGIN: i32 = 50;
/// New enemies and pickups appear just above the visible arena.
const SPAWN_Y: f32 = -20.0;
const SMART_CHANCE: f64 = 0.3;
const POWER_UP_CHANCE: f64 = 0.3;
/// Kills needed per wave before the boss shows up.
const KILLS_PER_WAVE: u32 = 10;
const BOSS_Y: f32 = 100.0;

/// Frames between enemy spawns; shrinks as the wave number grows.
pub fn enemy_spawn_interval(wave: u32) -> i32 {
    let wave = wave.min(i32::MAX as u32) as i32;
    120_i32.saturating_sub(wave.saturating_mul(10)).max(30)
}

fn spawn_x(config: &GameConfig, rng: &mut impl GameRng) -> f32 {
    let right = (config.width as i32 - SPAWN_MARGIN).max(SPAWN_MARGIN);
    rng.range_i32(SPAWN_MARGIN, right) as f32
}

/// Roll a fresh enemy above the arena.
pub fn spawn_enemy(config: &GameConfig, rng: &mut impl GameRng) -> Enemy {
    let x = spawn_x(config, rng);
    let kind = if rng.chance(SMART_CHANCE) {
        EnemyKind::Smart
    } else {
        EnemyKind::Basic
    };
    let speed = rng.range_f32(1.0, 3.0);
    let shoot_cooldown = rng.range_i32(30, 90);
    Enemy::new(x, SPAWN_Y, kind, speed, shoot_cooldown)
}

/// Roll a fresh power-up of a uniformly random kind above the arena.
pub fn spawn_power_up(config: &GameConfig, rng: &mut impl GameRng) -> PowerUp {
    let x = spawn_x(config, rng);
    let last = PowerUpKind::ALL.len() as i32 - 1;
    let kind = PowerUpKind::ALL[rng.range_i32(0, last) as usize];
    PowerUp { x, y: SPAWN_Y, kind }
}

/// True when the kill quota for the current wave is met and no boss is
/// active or already spawned for this wave.
pub fn boss_due(state: &GameState) -> bool {
    state.kills >= state.wave.saturating_mul(KILLS_PER_WAVE)
        && !state.boss_spawned
        && state.boss.is_none()
}

/// Run all three timers for one frame.
pub fn run(state: &mut GameState, config: &GameConfig, rng: &mut impl GameRng) {
    state.enemy_spawn_timer -= 1;
    if state.enemy_spawn_timer <= 0 && state.boss.is_none() {
        let enemy = spawn_enemy(config, rng);
        debug!(x = enemy.x, kind = ?enemy.kind, "enemy spawned");
        state.enemies.push(enemy);
        state.enemy_spawn_timer = enemy_spawn_interval(state.wave);
    }

    state.power_up_spawn_timer -= 1;
    if state.power_up_spawn_timer <= 0 {
        if rng.chance(POWER_UP_CHANCE) {
            let power_up = spawn_power_up(config, rng);
            debug!(x = power_up.x, kind = ?power_up.kind, "power-up spawned");
            state.power_ups.push(power_up);
        }
        state.power_up_spawn_timer = rng.range_i32(300, 600);
    }

    if boss_due(state) {
        info!(wave = state.wave, kills = state.kills, "boss incoming");
        state.boss = Some(Boss::new(config.center_x(), BOSS_Y));
        state.boss_spawned = true;
        state.enemies.clear();
    }
}
