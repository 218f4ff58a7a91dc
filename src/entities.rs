//! All game entity types: pure data, no per-frame logic.
//!
//! Behavior lives in `behavior`, `spawner` and `collision`; drawing lives in
//! `scene`.  The small methods here only derive values from the data itself.

// ── Palette ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Palette {
    White,
    Red,
    Green,
    Yellow,
    Purple,
    Orange,
    Cyan,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Player ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub health: u32,
    pub max_health: u32,
    /// Monotonically non-decreasing within a session.
    pub score: u32,
    /// Absorbs whole hits while positive; clamped to `[0, MAX_SHIELD]`.
    pub shield: u32,
    /// 1 = single shot, 2 = twin shot, 3 = spread.
    pub power_level: u32,
    /// Frames until the next shot is allowed.
    pub weapon_cooldown: u32,
}

impl Player {
    pub const RADIUS: f32 = 15.0;
    pub const SPEED: f32 = 5.0;
    pub const MAX_HEALTH: u32 = 100;
    pub const MAX_SHIELD: u32 = 100;
    pub const MAX_POWER_LEVEL: u32 = 3;
    pub const WEAPON_COOLDOWN: u32 = 10;

    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            speed: Self::SPEED,
            health: Self::MAX_HEALTH,
            max_health: Self::MAX_HEALTH,
            score: 0,
            shield: 0,
            power_level: 1,
            weapon_cooldown: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

// ── Enemies ──────────────────────────────────────────────────────────────────

/// Fixed at creation; an enemy never changes variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    /// Falls straight and fires straight down.
    Basic,
    /// Drifts toward the player and fires aimed shots.
    Smart,
}

impl EnemyKind {
    pub fn color(self) -> Palette {
        match self {
            EnemyKind::Basic => Palette::Red,
            EnemyKind::Smart => Palette::Purple,
        }
    }

    pub fn max_health(self) -> u32 {
        match self {
            EnemyKind::Basic => 20,
            EnemyKind::Smart => 50,
        }
    }

    /// Score awarded when destroyed.
    pub fn score_value(self) -> u32 {
        match self {
            EnemyKind::Basic => 10,
            EnemyKind::Smart => 25,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub kind: EnemyKind,
    /// Descent per frame, rolled at spawn.
    pub speed: f32,
    pub health: u32,
    pub max_health: u32,
    /// May run negative while the enemy is still above the firing line.
    pub shoot_cooldown: i32,
}

impl Enemy {
    pub const RADIUS: f32 = 12.0;

    pub fn new(x: f32, y: f32, kind: EnemyKind, speed: f32, shoot_cooldown: i32) -> Self {
        Self {
            x,
            y,
            kind,
            speed,
            health: kind.max_health(),
            max_health: kind.max_health(),
            shoot_cooldown,
        }
    }

    pub fn color(&self) -> Palette {
        self.kind.color()
    }
}

// ── Boss ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BossPhase {
    /// health > 150: single downward shots.
    One,
    /// 75 < health ≤ 150: eight-way radial bursts.
    Two,
    /// health ≤ 75: jittered shots aimed at the player.
    Three,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boss {
    pub x: f32,
    pub y: f32,
    pub health: u32,
    pub max_health: u32,
    /// +1.0 moving right, −1.0 moving left.
    pub direction: f32,
    pub shoot_cooldown: i32,
}

impl Boss {
    pub const RADIUS: f32 = 40.0;
    pub const SPEED: f32 = 2.0;
    pub const MAX_HEALTH: u32 = 200;

    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            health: Self::MAX_HEALTH,
            max_health: Self::MAX_HEALTH,
            direction: 1.0,
            shoot_cooldown: 0,
        }
    }

    /// Behavior tier derived from remaining health.
    pub fn phase(&self) -> BossPhase {
        if self.health > 150 {
            BossPhase::One
        } else if self.health > 75 {
            BossPhase::Two
        } else {
            BossPhase::Three
        }
    }
}

// ── Projectiles ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub color: Palette,
}

impl Bullet {
    pub const RADIUS: f32 = 3.0;

    pub fn new(x: f32, y: f32, vx: f32, vy: f32, color: Palette) -> Self {
        Self { x, y, vx, vy, color }
    }
}

// ── Pickups ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Heals 30, capped at max health.
    Health,
    /// Adds 50 shield, capped at 100.
    Shield,
    /// Raises the weapon level by one, capped at 3.
    Weapon,
    /// Flat +50 score.
    Score,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Health,
        PowerUpKind::Shield,
        PowerUpKind::Weapon,
        PowerUpKind::Score,
    ];

    pub fn color(self) -> Palette {
        match self {
            PowerUpKind::Health => Palette::Green,
            PowerUpKind::Shield => Palette::Cyan,
            PowerUpKind::Weapon => Palette::Yellow,
            PowerUpKind::Score => Palette::White,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub const RADIUS: f32 = 8.0;
    pub const FALL_SPEED: f32 = 2.0;
}

// ── Effects ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub color: Palette,
    /// Frames left; the particle is pruned at 0.
    pub lifetime: u32,
}

impl Particle {
    pub const MAX_LIFETIME: u32 = 30;
    pub const RADIUS: f32 = 3.0;
}

// ── Master game state ────────────────────────────────────────────────────────

/// The entire simulation state of one session.  Cloneable so the pure
/// `compute::tick` can return a new copy without mutating its input.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    /// Player-owned projectiles.
    pub bullets: Vec<Bullet>,
    /// Projectiles fired by enemies and the boss.
    pub enemy_bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    /// At most one boss is ever active.
    pub boss: Option<Boss>,
    pub power_ups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    pub enemy_spawn_timer: i32,
    pub power_up_spawn_timer: i32,
    /// Difficulty tier, starting at 1; advances when a boss dies.
    pub wave: u32,
    /// Cumulative enemy kills this session.
    pub kills: u32,
    /// Set when the current wave's boss has appeared; cleared on its death.
    pub boss_spawned: bool,
    /// Best score seen so far, carried across restarts.
    pub high_score: u32,
    pub status: GameStatus,
    pub frame: u64,
}
