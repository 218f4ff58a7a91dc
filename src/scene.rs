//! Render model.
//!
//! `build` turns a `GameState` into a flat list of draw commands in arena
//! coordinates.  Entities never draw themselves; a front end only has to
//! know how to put a `Shape` and a `Text` on its surface.

use crate::collision::Circle;
use crate::config::GameConfig;
use crate::entities::{Boss, Enemy, EnemyKind, GameState, GameStatus, Palette, Particle, Player};

const STAR_COUNT: u32 = 50;

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Background star, one point.
    Star { x: f32, y: f32 },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Palette,
        /// False draws only the outline.
        filled: bool,
    },
    /// Upward-pointing ship triangle centred on `(x, y)`.
    Ship { x: f32, y: f32, size: f32, color: Palette },
    /// Health bar; `fill` is the filled fraction in `[0, 1]`.
    Bar {
        x: f32,
        y: f32,
        width: f32,
        fill: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub x: f32,
    pub y: f32,
    pub align: Align,
    pub color: Palette,
    pub text: String,
}

impl Text {
    fn left(x: f32, y: f32, color: Palette, text: impl Into<String>) -> Self {
        Self { x, y, align: Align::Left, color, text: text.into() }
    }

    fn centered(x: f32, y: f32, color: Palette, text: impl Into<String>) -> Self {
        Self { x, y, align: Align::Center, color, text: text.into() }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub shapes: Vec<Shape>,
    pub texts: Vec<Text>,
    /// Set while the game-over summary is up; front ends dim the playfield.
    pub overlay: bool,
}

/// Build the frame.  `elapsed_ms` only drives the starfield scroll.
pub fn build(state: &GameState, config: &GameConfig, elapsed_ms: u64) -> Scene {
    let mut scene = Scene::default();

    stars(&mut scene, config, elapsed_ms);
    player(&mut scene, &state.player);

    for bullet in state.bullets.iter().chain(&state.enemy_bullets) {
        scene.shapes.push(disc(bullet.x, bullet.y, bullet.radius(), bullet.color));
    }
    for enemy in &state.enemies {
        enemy_shape(&mut scene, enemy);
    }
    if let Some(boss) = &state.boss {
        boss_shape(&mut scene, boss);
    }
    for power_up in &state.power_ups {
        scene
            .shapes
            .push(disc(power_up.x, power_up.y, power_up.radius(), power_up.kind.color()));
    }
    for particle in &state.particles {
        scene
            .shapes
            .push(disc(particle.x, particle.y, Particle::RADIUS, particle.color));
    }

    hud(&mut scene, state, config);
    if state.status == GameStatus::GameOver {
        game_over(&mut scene, state, config);
    }
    scene
}

fn disc(x: f32, y: f32, radius: f32, color: Palette) -> Shape {
    Shape::Circle { x, y, radius, color, filled: true }
}

fn fraction(current: u32, max: u32) -> f32 {
    if max == 0 {
        0.0
    } else {
        (current as f32 / max as f32).clamp(0.0, 1.0)
    }
}

// ── Playfield ─────────────────────────────────────────────────────────────────

fn stars(scene: &mut Scene, config: &GameConfig, elapsed_ms: u64) {
    let width = config.width.max(1.0) as u64;
    let height = config.height.max(1.0) as u64;
    let scroll = elapsed_ms / 50;
    for i in 0..STAR_COUNT as u64 {
        let x = (i * 23) % width;
        let y = (i * 17 + scroll) % height;
        scene.shapes.push(Shape::Star { x: x as f32, y: y as f32 });
    }
}

fn player(scene: &mut Scene, player: &Player) {
    if player.shield > 0 {
        scene.shapes.push(Shape::Circle {
            x: player.x,
            y: player.y,
            radius: Player::RADIUS + 5.0,
            color: Palette::Cyan,
            filled: false,
        });
    }
    scene.shapes.push(Shape::Ship {
        x: player.x,
        y: player.y,
        size: Player::RADIUS,
        color: Palette::Green,
    });
    scene.shapes.push(Shape::Bar {
        x: player.x - 30.0,
        y: player.y - Player::RADIUS - 15.0,
        width: 60.0,
        fill: fraction(player.health, player.max_health),
    });
}

fn enemy_shape(scene: &mut Scene, enemy: &Enemy) {
    scene.shapes.push(disc(enemy.x, enemy.y, Enemy::RADIUS, enemy.color()));
    // Only the sturdier variant shows its health.
    if enemy.kind == EnemyKind::Smart {
        scene.shapes.push(Shape::Bar {
            x: enemy.x - 15.0,
            y: enemy.y - Enemy::RADIUS - 8.0,
            width: 30.0,
            fill: fraction(enemy.health, enemy.max_health),
        });
    }
}

fn boss_shape(scene: &mut Scene, boss: &Boss) {
    scene.shapes.push(disc(boss.x, boss.y, Boss::RADIUS, Palette::Red));
    scene
        .shapes
        .push(disc(boss.x, boss.y, Boss::RADIUS - 10.0, Palette::Orange));
    scene.shapes.push(Shape::Bar {
        x: boss.x - 50.0,
        y: boss.y - Boss::RADIUS - 20.0,
        width: 100.0,
        fill: fraction(boss.health, boss.max_health),
    });
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn hud(scene: &mut Scene, state: &GameState, config: &GameConfig) {
    let right = config.width - 200.0;
    let p = &state.player;

    scene.texts.push(Text::left(10.0, 10.0, Palette::White, format!("Score: {}", p.score)));
    scene.texts.push(Text::left(
        10.0,
        50.0,
        Palette::White,
        format!("High Score: {}", state.high_score),
    ));
    scene.texts.push(Text::left(10.0, 80.0, Palette::White, format!("Wave: {}", state.wave)));

    scene.texts.push(Text::left(right, 10.0, Palette::White, format!("Health: {}", p.health)));
    if p.shield > 0 {
        scene.texts.push(Text::left(right, 50.0, Palette::Cyan, format!("Shield: {}", p.shield)));
    }
    scene.texts.push(Text::left(
        right,
        90.0,
        Palette::Yellow,
        format!("Weapon Level: {}", p.power_level),
    ));

    let hints = ["WASD/Arrow Keys: Move", "Space: Shoot", "ESC: Quit"];
    for (i, hint) in hints.iter().enumerate() {
        let y = config.height - 80.0 + i as f32 * 20.0;
        scene.texts.push(Text::left(right, y, Palette::White, *hint));
    }
}

fn game_over(scene: &mut Scene, state: &GameState, config: &GameConfig) {
    scene.overlay = true;
    let lines = [
        (Palette::Red, "GAME OVER".to_string()),
        (Palette::White, format!("Final Score: {}", state.player.score)),
        (Palette::Yellow, format!("High Score: {}", state.high_score)),
        (Palette::White, "Press R to Restart or ESC to Quit".to_string()),
    ];
    let mut y = config.height / 2.0 - 100.0;
    for (color, line) in lines {
        scene.texts.push(Text::centered(config.center_x(), y, color, line));
        y += 50.0;
    }
}
