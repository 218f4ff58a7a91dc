use space_explorer::compute::init_state;
use space_explorer::config::GameConfig;
use space_explorer::entities::*;

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq, so equality comparisons must work
    assert_eq!(EnemyKind::Basic, EnemyKind::Basic);
    assert_ne!(EnemyKind::Basic, EnemyKind::Smart);
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_ne!(PowerUpKind::Health, PowerUpKind::Shield);

    let kind = EnemyKind::Smart;
    assert_eq!(kind.clone(), EnemyKind::Smart);
}

#[test]
fn enemy_stats_follow_variant() {
    let basic = Enemy::new(10.0, 20.0, EnemyKind::Basic, 2.0, 45);
    assert_eq!(basic.health, 20);
    assert_eq!(basic.max_health, 20);
    assert_eq!(basic.color(), Palette::Red);
    assert_eq!(basic.kind.score_value(), 10);

    let smart = Enemy::new(10.0, 20.0, EnemyKind::Smart, 2.0, 45);
    assert_eq!(smart.health, 50);
    assert_eq!(smart.color(), Palette::Purple);
    assert_eq!(smart.kind.score_value(), 25);
}

#[test]
fn boss_phase_derives_from_health() {
    let mut boss = Boss::new(600.0, 100.0);
    assert_eq!(boss.health, 200);
    assert_eq!(boss.phase(), BossPhase::One);

    boss.health = 151;
    assert_eq!(boss.phase(), BossPhase::One);
    boss.health = 150;
    assert_eq!(boss.phase(), BossPhase::Two);
    boss.health = 76;
    assert_eq!(boss.phase(), BossPhase::Two);
    boss.health = 75;
    assert_eq!(boss.phase(), BossPhase::Three);
    boss.health = 0;
    assert_eq!(boss.phase(), BossPhase::Three);
}

#[test]
fn power_up_colors() {
    assert_eq!(PowerUpKind::Health.color(), Palette::Green);
    assert_eq!(PowerUpKind::Shield.color(), Palette::Cyan);
    assert_eq!(PowerUpKind::Weapon.color(), Palette::Yellow);
    assert_eq!(PowerUpKind::Score.color(), Palette::White);
    assert_eq!(PowerUpKind::ALL.len(), 4);
}

#[test]
fn fresh_player_defaults() {
    let p = Player::new(1.0, 2.0);
    assert_eq!(p.health, 100);
    assert_eq!(p.max_health, 100);
    assert_eq!(p.shield, 0);
    assert_eq!(p.power_level, 1);
    assert_eq!(p.weapon_cooldown, 0);
    assert_eq!(p.speed, 5.0);
    assert!(p.is_alive());
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(&GameConfig::default(), 0);
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.player.score = 999;
    cloned
        .enemies
        .push(Enemy::new(5.0, 5.0, EnemyKind::Basic, 1.0, 30));

    assert_eq!(original.player.x, 600.0);
    assert_eq!(original.player.score, 0);
    assert!(original.enemies.is_empty());
}
