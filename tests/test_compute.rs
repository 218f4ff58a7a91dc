use space_explorer::compute::*;
use space_explorer::config::GameConfig;
use space_explorer::entities::*;
use space_explorer::input::FrameInput;
use space_explorer::random::ConstantRng;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn config() -> GameConfig {
    GameConfig::default()
}

/// Fresh state with both spawn timers pushed far out so nothing appears
/// unless a test puts it there.
fn quiet_state() -> GameState {
    let mut s = init_state(&config(), 0);
    s.enemy_spawn_timer = 10_000;
    s.power_up_spawn_timer = 10_000;
    s
}

fn idle() -> FrameInput {
    FrameInput::default()
}

// ── init / reset ──────────────────────────────────────────────────────────────

#[test]
fn init_state_starts_wave_one_with_empty_arena() {
    let s = init_state(&config(), 1234);
    assert_eq!((s.player.x, s.player.y), (600.0, 700.0));
    assert_eq!(s.wave, 1);
    assert_eq!(s.kills, 0);
    assert_eq!(s.high_score, 1234);
    assert_eq!(s.status, GameStatus::Playing);
    assert!(s.bullets.is_empty() && s.enemies.is_empty() && s.boss.is_none());
    assert!(!s.boss_spawned);
}

#[test]
fn reset_keeps_best_score_only() {
    let mut s = quiet_state();
    s.high_score = 80;
    s.player.score = 120;
    s.wave = 3;
    s.enemies.push(Enemy::new(1.0, 1.0, EnemyKind::Basic, 1.0, 10));

    let fresh = reset(&s, &config());
    assert_eq!(fresh.high_score, 120);
    assert_eq!(fresh.player.score, 0);
    assert_eq!(fresh.wave, 1);
    assert!(fresh.enemies.is_empty());
}

// ── tick basics ───────────────────────────────────────────────────────────────

#[test]
fn tick_leaves_input_state_untouched() {
    let s = quiet_state();
    let input = FrameInput { left: true, ..Default::default() };
    let next = tick(&s, &input, &config(), &mut ConstantRng::new(0.5));

    assert_eq!(s.frame, 0);
    assert_eq!(s.player.x, 600.0);
    assert_eq!(next.frame, 1);
    assert_eq!(next.player.x, 595.0);
}

#[test]
fn first_tick_spawns_an_enemy() {
    let s = init_state(&config(), 0);
    let next = tick(&s, &idle(), &config(), &mut ConstantRng::new(0.5));
    assert_eq!(next.enemies.len(), 1);
    assert_eq!(next.enemy_spawn_timer, 110);
}

#[test]
fn shooting_through_tick() {
    let s = quiet_state();
    let fire = FrameInput { shoot: true, ..Default::default() };

    let s = tick(&s, &fire, &config(), &mut ConstantRng::new(0.5));
    assert_eq!(s.bullets.len(), 1);
    // Spawned at y 680, then advanced once
    assert_eq!(s.bullets[0].y, 672.0);

    // Still cooling down on the next frame
    let s = tick(&s, &fire, &config(), &mut ConstantRng::new(0.5));
    assert_eq!(s.bullets.len(), 1);
    assert_eq!(s.bullets[0].y, 664.0);
}

#[test]
fn player_cannot_leave_arena() {
    let mut s = quiet_state();
    s.player.x = 16.0;
    let input = FrameInput { left: true, ..Default::default() };
    let s = tick(&s, &input, &config(), &mut ConstantRng::new(0.5));
    assert_eq!(s.player.x, 15.0);
}

// ── pruning ───────────────────────────────────────────────────────────────────

#[test]
fn bullets_leaving_any_edge_are_pruned() {
    let mut s = quiet_state();
    s.bullets.push(Bullet::new(600.0, 5.0, 0.0, -8.0, Palette::Yellow));
    s.bullets.push(Bullet::new(2.0, 400.0, -3.0, -8.0, Palette::Yellow));
    s.bullets.push(Bullet::new(600.0, 400.0, 0.0, -8.0, Palette::Yellow));
    s.enemy_bullets.push(Bullet::new(100.0, 798.0, 0.0, 4.0, Palette::Red));
    s.enemy_bullets.push(Bullet::new(1199.0, 300.0, 3.0, 0.0, Palette::Orange));

    let s = tick(&s, &idle(), &config(), &mut ConstantRng::new(0.5));

    assert_eq!(s.bullets.len(), 1);
    assert_eq!(s.bullets[0].y, 392.0);
    assert!(s.enemy_bullets.is_empty());
}

#[test]
fn enemies_and_power_ups_below_floor_are_pruned() {
    let mut s = quiet_state();
    s.enemies.push(Enemy::new(100.0, 799.0, EnemyKind::Basic, 2.0, 100));
    s.enemies.push(Enemy::new(300.0, 400.0, EnemyKind::Basic, 2.0, 100));
    s.power_ups.push(PowerUp { x: 100.0, y: 799.0, kind: PowerUpKind::Score });

    let s = tick(&s, &idle(), &config(), &mut ConstantRng::new(0.5));

    assert_eq!(s.enemies.len(), 1);
    assert_eq!(s.enemies[0].y, 402.0);
    assert!(s.power_ups.is_empty());
}

#[test]
fn expired_particles_are_pruned() {
    let mut s = quiet_state();
    s.particles.push(Particle {
        x: 10.0,
        y: 10.0,
        vx: 1.0,
        vy: 1.0,
        color: Palette::Red,
        lifetime: 1,
    });
    s.particles.push(Particle {
        x: 10.0,
        y: 10.0,
        vx: 1.0,
        vy: 1.0,
        color: Palette::Red,
        lifetime: 5,
    });

    let s = tick(&s, &idle(), &config(), &mut ConstantRng::new(0.5));

    assert_eq!(s.particles.len(), 1);
    assert_eq!(s.particles[0].lifetime, 4);
    assert_eq!((s.particles[0].x, s.particles[0].y), (11.0, 11.0));
}

// ── scoring and termination ───────────────────────────────────────────────────

#[test]
fn high_score_follows_score() {
    let mut s = quiet_state();
    s.high_score = 30;
    // Lands on the player after falling 2 units
    s.power_ups.push(PowerUp { x: 600.0, y: 698.0, kind: PowerUpKind::Score });

    let s = tick(&s, &idle(), &config(), &mut ConstantRng::new(0.5));

    assert_eq!(s.player.score, 50);
    assert_eq!(s.high_score, 50);
}

#[test]
fn lethal_hit_ends_the_game() {
    let mut s = quiet_state();
    s.player.health = 10;
    s.enemy_bullets.push(Bullet::new(600.0, 686.0, 0.0, 4.0, Palette::Red));

    let s = tick(&s, &idle(), &config(), &mut ConstantRng::new(0.5));
    assert_eq!(s.player.health, 0);
    assert_eq!(s.status, GameStatus::GameOver);

    // Frozen from here on
    let input = FrameInput { left: true, ..Default::default() };
    let after = tick(&s, &input, &config(), &mut ConstantRng::new(0.5));
    assert_eq!(after, s);
}

#[test]
fn boss_arrives_the_frame_after_the_quota_kill() {
    let mut s = quiet_state();
    s.kills = 9;
    let mut enemy = Enemy::new(300.0, 300.0, EnemyKind::Basic, 0.0, 100);
    enemy.health = 10;
    s.enemies.push(enemy);
    s.bullets.push(Bullet::new(300.0, 308.0, 0.0, -8.0, Palette::Yellow));

    let s = tick(&s, &idle(), &config(), &mut ConstantRng::new(0.5));
    assert_eq!(s.kills, 10);
    assert!(s.boss.is_none());

    let s = tick(&s, &idle(), &config(), &mut ConstantRng::new(0.5));
    let boss = s.boss.as_ref().expect("boss after quota");
    assert!(s.boss_spawned);
    // Spawned at the centre, then no movement until next frame
    assert_eq!((boss.x, boss.y), (600.0, 100.0));
}

// ── long-run properties ───────────────────────────────────────────────────────

#[test]
fn seeded_session_keeps_invariants() {
    let cfg = config();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut keys = StdRng::seed_from_u64(7);
    let mut s = init_state(&cfg, 0);
    let mut games = 0;

    for _ in 0..20_000 {
        let input = FrameInput {
            up: keys.gen_bool(0.2),
            down: keys.gen_bool(0.2),
            left: keys.gen_bool(0.4),
            right: keys.gen_bool(0.4),
            shoot: keys.gen_bool(0.8),
            ..Default::default()
        };
        let prev_score = s.player.score;
        let next = tick(&s, &input, &cfg, &mut rng);

        let p = &next.player;
        assert!(p.health <= p.max_health);
        assert!(p.shield <= Player::MAX_SHIELD);
        assert!((1..=Player::MAX_POWER_LEVEL).contains(&p.power_level));
        assert!(p.x >= Player::RADIUS && p.x <= cfg.width - Player::RADIUS);
        assert!(p.y >= Player::RADIUS && p.y <= cfg.height - Player::RADIUS);
        assert!(p.score >= prev_score);
        assert!(next.high_score >= p.score);
        if next.boss.is_some() {
            assert!(next.enemies.is_empty());
            assert!(next.boss_spawned);
        }
        assert!(next.enemies.iter().all(|e| e.health > 0 && e.y <= cfg.height));
        assert!(next.particles.iter().all(|pt| pt.lifetime > 0));
        assert!(next.bullets.iter().all(|b| !cfg.out_of_bounds(b.x, b.y)));
        assert_eq!(next.status == GameStatus::GameOver, p.health == 0);

        s = if next.status == GameStatus::GameOver {
            games += 1;
            reset(&next, &cfg)
        } else {
            next
        };
    }
    // Not a property, just proof the run reached the interesting states
    assert!(games > 0 || s.wave > 1 || s.kills > 0);
}
