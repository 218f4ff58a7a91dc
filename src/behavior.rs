//! Per-entity update steps.
//!
//! Each function advances one entity by a single frame.  Anything the step
//! creates (bullets, particles) is appended to the sink it is handed; nothing
//! here removes entities, that is left to the pruning and collision passes.

use std::f32::consts::PI;

use crate::config::GameConfig;
use crate::entities::{
    Boss, BossPhase, Bullet, Enemy, EnemyKind, Palette, Particle, Player, PowerUp,
};
use crate::input::FrameInput;
use crate::random::GameRng;

const PLAYER_BULLET_SPEED: f32 = 8.0;
const MUZZLE_OFFSET: f32 = 20.0;

/// Enemies hold fire until they have descended past this line.
const ENEMY_FIRE_LINE: f32 = 50.0;
const SMART_DRIFT_DEADZONE: f32 = 5.0;
const BASIC_SHOT_SPEED: f32 = 4.0;
const SMART_SHOT_SPEED: f32 = 3.0;

const BOSS_DOWN_SHOT_SPEED: f32 = 5.0;
const BOSS_RADIAL_SPEED: f32 = 3.0;
const BOSS_AIMED_SPEED: f32 = 4.0;
const BOSS_AIM_JITTER: i32 = 50;

const PARTICLE_SPRAY: f32 = 5.0;

// ── Shared geometry ──────────────────────────────────────────────────────────

/// Velocity of magnitude `speed` along `(dx, dy)`, or `None` for a zero vector.
pub fn aim(dx: f32, dy: f32, speed: f32) -> Option<(f32, f32)> {
    let distance = (dx * dx + dy * dy).sqrt();
    if distance > 0.0 {
        Some((dx / distance * speed, dy / distance * speed))
    } else {
        None
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Apply movement, clamp to the arena, and tick the weapon cooldown.
pub fn update_player(player: &mut Player, input: &FrameInput, config: &GameConfig) {
    player.x += input.horizontal() * player.speed;
    player.y += input.vertical() * player.speed;

    let r = Player::RADIUS;
    player.x = player.x.clamp(r, config.width - r);
    player.y = player.y.clamp(r, config.height - r);

    player.weapon_cooldown = player.weapon_cooldown.saturating_sub(1);
}

/// Fire according to the weapon level.  Returns how many bullets were added;
/// zero while the weapon is cooling down.
pub fn shoot(player: &mut Player, bullets: &mut Vec<Bullet>) -> usize {
    if player.weapon_cooldown > 0 {
        return 0;
    }

    let y = player.y - MUZZLE_OFFSET;
    let vy = -PLAYER_BULLET_SPEED;
    let color = Palette::Yellow;
    let before = bullets.len();

    match player.power_level {
        0 | 1 => bullets.push(Bullet::new(player.x, y, 0.0, vy, color)),
        2 => {
            bullets.push(Bullet::new(player.x - 10.0, y, 0.0, vy, color));
            bullets.push(Bullet::new(player.x + 10.0, y, 0.0, vy, color));
        }
        _ => {
            bullets.push(Bullet::new(player.x, y, 0.0, vy, color));
            bullets.push(Bullet::new(player.x - 15.0, y, -2.0, vy, color));
            bullets.push(Bullet::new(player.x + 15.0, y, 2.0, vy, color));
        }
    }

    player.weapon_cooldown = Player::WEAPON_COOLDOWN;
    bullets.len() - before
}

// ── Enemies ──────────────────────────────────────────────────────────────────

pub fn update_enemy(
    enemy: &mut Enemy,
    player: &Player,
    enemy_bullets: &mut Vec<Bullet>,
    rng: &mut impl GameRng,
) {
    enemy.y += enemy.speed;

    if enemy.kind == EnemyKind::Smart {
        let dx = player.x - enemy.x;
        if dx.abs() > SMART_DRIFT_DEADZONE {
            enemy.x += dx.signum();
        }
    }

    enemy.shoot_cooldown -= 1;
    if enemy.shoot_cooldown > 0 || enemy.y <= ENEMY_FIRE_LINE {
        return;
    }

    match enemy.kind {
        EnemyKind::Basic => {
            enemy_bullets.push(Bullet::new(
                enemy.x,
                enemy.y + 15.0,
                0.0,
                BASIC_SHOT_SPEED,
                Palette::Red,
            ));
            enemy.shoot_cooldown = rng.range_i32(60, 120);
        }
        EnemyKind::Smart => {
            // Zero distance: skip the shot, still re-arm.
            if let Some((vx, vy)) = aim(player.x - enemy.x, player.y - enemy.y, SMART_SHOT_SPEED) {
                enemy_bullets.push(Bullet::new(enemy.x, enemy.y, vx, vy, Palette::Purple));
            }
            enemy.shoot_cooldown = rng.range_i32(40, 80);
        }
    }
}

// ── Boss ─────────────────────────────────────────────────────────────────────

pub fn update_boss(
    boss: &mut Boss,
    player: &Player,
    enemy_bullets: &mut Vec<Bullet>,
    config: &GameConfig,
    rng: &mut impl GameRng,
) {
    boss.x += Boss::SPEED * boss.direction;
    if boss.x <= Boss::RADIUS || boss.x >= config.width - Boss::RADIUS {
        boss.direction = -boss.direction;
    }

    boss.shoot_cooldown -= 1;
    if boss.shoot_cooldown > 0 {
        return;
    }

    match boss.phase() {
        BossPhase::One => {
            enemy_bullets.push(Bullet::new(
                boss.x,
                boss.y + 20.0,
                0.0,
                BOSS_DOWN_SHOT_SPEED,
                Palette::Red,
            ));
            boss.shoot_cooldown = 30;
        }
        BossPhase::Two => {
            for step in 0..8 {
                let angle = step as f32 * PI / 4.0;
                enemy_bullets.push(Bullet::new(
                    boss.x,
                    boss.y,
                    angle.cos() * BOSS_RADIAL_SPEED,
                    angle.sin() * BOSS_RADIAL_SPEED,
                    Palette::Orange,
                ));
            }
            boss.shoot_cooldown = 60;
        }
        BossPhase::Three => {
            for _ in 0..3 {
                let jitter = rng.range_i32(-BOSS_AIM_JITTER, BOSS_AIM_JITTER) as f32;
                let dx = player.x - boss.x + jitter;
                let dy = player.y - boss.y;
                if let Some((vx, vy)) = aim(dx, dy, BOSS_AIMED_SPEED) {
                    enemy_bullets.push(Bullet::new(boss.x, boss.y, vx, vy, Palette::Purple));
                }
            }
            boss.shoot_cooldown = 40;
        }
    }
}

// ── Projectiles, pickups, effects ────────────────────────────────────────────

pub fn advance_bullet(bullet: &mut Bullet) {
    bullet.x += bullet.vx;
    bullet.y += bullet.vy;
}

pub fn advance_power_up(power_up: &mut PowerUp) {
    power_up.y += PowerUp::FALL_SPEED;
}

pub fn advance_particle(particle: &mut Particle) {
    particle.x += particle.vx;
    particle.y += particle.vy;
    particle.lifetime = particle.lifetime.saturating_sub(1);
}

/// Spray `count` particles from `(x, y)` in random directions.
pub fn explosion(
    particles: &mut Vec<Particle>,
    x: f32,
    y: f32,
    color: Palette,
    count: usize,
    rng: &mut impl GameRng,
) {
    particles.extend((0..count).map(|_| Particle {
        x,
        y,
        vx: rng.range_f32(-PARTICLE_SPRAY, PARTICLE_SPRAY),
        vy: rng.range_f32(-PARTICLE_SPRAY, PARTICLE_SPRAY),
        color,
        lifetime: Particle::MAX_LIFETIME,
    }));
}
