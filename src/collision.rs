//! Collision & interaction passes.
//!
//! Runs once per frame after every entity has moved.  The six passes run in
//! a fixed order.  Within a pass, removals are only marked; each collection
//! is compacted once when its pass ends, so nothing is removed from a `Vec`
//! while it is being scanned and a spent bullet can never hit twice.

use tracing::{debug, info};

use crate::behavior::explosion;
use crate::entities::{
    Boss, Bullet, Enemy, GameState, Palette, Player, PowerUp, PowerUpKind,
};
use crate::random::GameRng;

pub const BULLET_DAMAGE: u32 = 10;
pub const ENEMY_BULLET_DAMAGE: u32 = 10;
pub const ENEMY_CONTACT_DAMAGE: u32 = 20;
pub const BOSS_CONTACT_DAMAGE: u32 = 30;
pub const BOSS_KILL_SCORE: u32 = 100;
pub const SCORE_PICKUP: u32 = 50;
pub const HEAL_AMOUNT: u32 = 30;
pub const SHIELD_AMOUNT: u32 = 50;

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Anything with a circular hitbox.
pub trait Circle {
    fn center(&self) -> (f32, f32);
    fn radius(&self) -> f32;
}

macro_rules! circle {
    ($ty:ty, $radius:expr) => {
        impl Circle for $ty {
            fn center(&self) -> (f32, f32) {
                (self.x, self.y)
            }
            fn radius(&self) -> f32 {
                $radius
            }
        }
    };
}

circle!(Player, Player::RADIUS);
circle!(Enemy, Enemy::RADIUS);
circle!(Boss, Boss::RADIUS);
circle!(Bullet, Bullet::RADIUS);
circle!(PowerUp, PowerUp::RADIUS);

/// Strict overlap: touching at exactly the sum of radii is a miss.
pub fn overlaps(a: &impl Circle, b: &impl Circle) -> bool {
    let (ax, ay) = a.center();
    let (bx, by) = b.center();
    let (dx, dy) = (ax - bx, ay - by);
    (dx * dx + dy * dy).sqrt() < a.radius() + b.radius()
}

/// Drop every element whose flag is set.
fn compact<T>(items: &mut Vec<T>, removed: &[bool]) {
    let mut index = 0;
    items.retain(|_| {
        let keep = !removed[index];
        index += 1;
        keep
    });
}

/// Shield takes the whole hit while it is up; otherwise health does.
pub fn apply_damage(player: &mut Player, amount: u32) {
    if player.shield > 0 {
        player.shield = player.shield.saturating_sub(amount);
    } else {
        player.health = player.health.saturating_sub(amount);
    }
}

pub fn apply_power_up(player: &mut Player, kind: PowerUpKind) {
    match kind {
        PowerUpKind::Health => {
            player.health = player.health.saturating_add(HEAL_AMOUNT).min(player.max_health);
        }
        PowerUpKind::Shield => {
            player.shield = player.shield.saturating_add(SHIELD_AMOUNT).min(Player::MAX_SHIELD);
        }
        PowerUpKind::Weapon => {
            player.power_level = (player.power_level + 1).min(Player::MAX_POWER_LEVEL);
        }
        PowerUpKind::Score => {
            player.score = player.score.saturating_add(SCORE_PICKUP);
        }
    }
}

// ── Passes ───────────────────────────────────────────────────────────────────

/// What a collision run changed, for logging and callers that care.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub enemies_destroyed: u32,
    pub boss_defeated: bool,
    pub player_hits: u32,
    pub pickups: u32,
}

/// Run all six passes in order.
pub fn resolve(state: &mut GameState, rng: &mut impl GameRng) -> Outcome {
    let mut outcome = Outcome::default();
    bullets_vs_enemies(state, rng, &mut outcome);
    bullets_vs_boss(state, rng, &mut outcome);
    enemy_bullets_vs_player(state, rng, &mut outcome);
    enemies_vs_player(state, rng, &mut outcome);
    boss_vs_player(state, rng, &mut outcome);
    power_ups_vs_player(state, rng, &mut outcome);
    outcome
}

/// Pass 1.  Each bullet hits at most the first live enemy it overlaps.
fn bullets_vs_enemies(state: &mut GameState, rng: &mut impl GameRng, outcome: &mut Outcome) {
    let GameState {
        player,
        bullets,
        enemies,
        particles,
        kills,
        ..
    } = state;

    let mut spent = vec![false; bullets.len()];
    let mut destroyed = vec![false; enemies.len()];

    for (bi, bullet) in bullets.iter().enumerate() {
        let target = enemies
            .iter()
            .enumerate()
            .position(|(ei, enemy)| !destroyed[ei] && overlaps(bullet, enemy));
        let Some(ei) = target else {
            continue;
        };

        spent[bi] = true;
        let enemy = &mut enemies[ei];
        enemy.health = enemy.health.saturating_sub(BULLET_DAMAGE);
        explosion(particles, enemy.x, enemy.y, enemy.color(), 5, rng);

        if enemy.health == 0 {
            destroyed[ei] = true;
            *kills += 1;
            player.score = player.score.saturating_add(enemy.kind.score_value());
            explosion(particles, enemy.x, enemy.y, enemy.color(), 15, rng);
            outcome.enemies_destroyed += 1;
        }
    }

    compact(bullets, &spent);
    compact(enemies, &destroyed);
}

/// Pass 2.  A boss kill advances the wave and re-arms the boss trigger.
fn bullets_vs_boss(state: &mut GameState, rng: &mut impl GameRng, outcome: &mut Outcome) {
    let GameState {
        player,
        bullets,
        boss: boss_slot,
        particles,
        wave,
        boss_spawned,
        ..
    } = state;

    let mut spent = vec![false; bullets.len()];

    for (bi, bullet) in bullets.iter().enumerate() {
        let Some(boss) = boss_slot.as_mut() else {
            break;
        };
        if !overlaps(bullet, &*boss) {
            continue;
        }

        spent[bi] = true;
        boss.health = boss.health.saturating_sub(BULLET_DAMAGE);
        explosion(particles, boss.x, boss.y, Palette::Red, 8, rng);

        if boss.health == 0 {
            player.score = player.score.saturating_add(BOSS_KILL_SCORE);
            explosion(particles, boss.x, boss.y, Palette::Red, 30, rng);
            *boss_slot = None;
            *boss_spawned = false;
            *wave += 1;
            outcome.boss_defeated = true;
            info!(wave = *wave, "boss defeated, wave advanced");
        }
    }

    compact(bullets, &spent);
}

/// Pass 3.
fn enemy_bullets_vs_player(state: &mut GameState, rng: &mut impl GameRng, outcome: &mut Outcome) {
    let GameState {
        player,
        enemy_bullets,
        particles,
        ..
    } = state;

    let mut spent = vec![false; enemy_bullets.len()];
    for (bi, bullet) in enemy_bullets.iter().enumerate() {
        if overlaps(bullet, &*player) {
            spent[bi] = true;
            apply_damage(player, ENEMY_BULLET_DAMAGE);
            explosion(particles, player.x, player.y, Palette::Red, 5, rng);
            outcome.player_hits += 1;
        }
    }
    compact(enemy_bullets, &spent);
}

/// Pass 4.  Ramming consumes the enemy without scoring a kill.
fn enemies_vs_player(state: &mut GameState, rng: &mut impl GameRng, outcome: &mut Outcome) {
    let GameState {
        player,
        enemies,
        particles,
        ..
    } = state;

    let mut rammed = vec![false; enemies.len()];
    for (ei, enemy) in enemies.iter().enumerate() {
        if overlaps(enemy, &*player) {
            rammed[ei] = true;
            apply_damage(player, ENEMY_CONTACT_DAMAGE);
            explosion(particles, player.x, player.y, Palette::Red, 10, rng);
            outcome.player_hits += 1;
        }
    }
    compact(enemies, &rammed);
}

/// Pass 5.  The boss survives contact and hurts again on every overlapping frame.
fn boss_vs_player(state: &mut GameState, rng: &mut impl GameRng, outcome: &mut Outcome) {
    let GameState {
        player,
        boss,
        particles,
        ..
    } = state;

    if let Some(boss) = boss.as_ref() {
        if overlaps(boss, &*player) {
            apply_damage(player, BOSS_CONTACT_DAMAGE);
            explosion(particles, player.x, player.y, Palette::Red, 15, rng);
            outcome.player_hits += 1;
        }
    }
}

/// Pass 6.
fn power_ups_vs_player(state: &mut GameState, rng: &mut impl GameRng, outcome: &mut Outcome) {
    let GameState {
        player,
        power_ups,
        particles,
        ..
    } = state;

    let mut taken = vec![false; power_ups.len()];
    for (pi, power_up) in power_ups.iter().enumerate() {
        if overlaps(power_up, &*player) {
            taken[pi] = true;
            apply_power_up(player, power_up.kind);
            explosion(particles, power_up.x, power_up.y, power_up.kind.color(), 8, rng);
            debug!(kind = ?power_up.kind, "power-up collected");
            outcome.pickups += 1;
        }
    }
    compact(power_ups, &taken);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_drops_flagged_in_order() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        compact(&mut items, &[false, true, false, true]);
        assert_eq!(items, vec!['a', 'c']);
    }

    #[test]
    fn shield_absorbs_whole_hit_without_spill() {
        let mut player = Player::new(0.0, 0.0);
        player.shield = 5;
        apply_damage(&mut player, 20);
        assert_eq!(player.shield, 0);
        assert_eq!(player.health, 100);

        apply_damage(&mut player, 20);
        assert_eq!(player.health, 80);
    }

    #[test]
    fn health_saturates_at_zero() {
        let mut player = Player::new(0.0, 0.0);
        player.health = 15;
        apply_damage(&mut player, 30);
        assert_eq!(player.health, 0);
    }
}
