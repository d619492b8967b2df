/// All game entity types: pure data, no logic.

use glam::Vec2;

// ── Static spec tables ────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    Goblin,
    Skeleton,
    Zombie,
}

/// Immutable stats shared by every enemy of one kind.
#[derive(Clone, Copy, Debug)]
pub struct EnemyStats {
    pub name: &'static str,
    pub max_health: i32,
    /// Movement toward the player, units per tick.
    pub speed: f32,
    /// Health drained from the player on every overlapping tick.
    pub attack_damage: i32,
    pub score: u32,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Goblin, EnemyKind::Skeleton, EnemyKind::Zombie];

    pub fn stats(self) -> EnemyStats {
        match self {
            EnemyKind::Goblin => EnemyStats {
                name: "Goblin",
                max_health: 20,
                speed: 0.8,
                attack_damage: 5,
                score: 10,
            },
            EnemyKind::Skeleton => EnemyStats {
                name: "Skeleton",
                max_health: 30,
                speed: 0.6,
                attack_damage: 10,
                score: 15,
            },
            EnemyKind::Zombie => EnemyStats {
                name: "Zombie",
                max_health: 40,
                speed: 0.4,
                attack_damage: 15,
                score: 20,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeaponKind {
    Pistol,
    Shotgun,
    MachineGun,
}

/// Immutable stats for one weapon slot.
#[derive(Clone, Copy, Debug)]
pub struct WeaponStats {
    pub name: &'static str,
    pub ammo_cost: u32,
    /// Min ticks required between successive shots.
    pub fire_rate: u32,
    /// Projectile speed, units per tick.
    pub bullet_speed: f32,
    /// Projectiles spawned per trigger pull.
    pub bullet_count: u32,
    /// Max random angular deviation per projectile, degrees.
    pub spread_deg: f32,
}

impl WeaponKind {
    pub fn stats(self) -> WeaponStats {
        match self {
            WeaponKind::Pistol => WeaponStats {
                name: "Pistol",
                ammo_cost: 1,
                fire_rate: 15,
                bullet_speed: 4.0,
                bullet_count: 1,
                spread_deg: 5.0,
            },
            WeaponKind::Shotgun => WeaponStats {
                name: "Shotgun",
                ammo_cost: 5,
                fire_rate: 40,
                bullet_speed: 3.0,
                bullet_count: 6,
                spread_deg: 30.0,
            },
            WeaponKind::MachineGun => WeaponStats {
                name: "Machine Gun",
                ammo_cost: 1,
                fire_rate: 5,
                bullet_speed: 5.0,
                bullet_count: 1,
                spread_deg: 10.0,
            },
        }
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    /// Top-left corner of the 8x8 sprite, clamped to the field.
    pub pos: Vec2,
    /// May go negative on the killing blow; displayed as max(0, health).
    pub health: i32,
    pub ammo: u32,
    pub weapon: WeaponKind,
    /// Health packs carried, not yet used.
    pub health_packs: u32,
    /// Ticks since the last shot; gates the fire rate.
    pub ticks_since_shot: u32,
}

#[derive(Clone, Debug)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub pos: Vec2,
    pub kind: EnemyKind,
    pub health: i32,
}

#[derive(Clone, Debug)]
pub struct HealthPack {
    pub pos: Vec2,
}

// ── Input snapshot ────────────────────────────────────────────────────────────

/// One tick's worth of input, sampled once at the start of the update
/// phase.  `up`..`fire` are held states; the remaining flags are
/// edge-triggered (pressed this tick only).
#[derive(Clone, Debug, Default)]
pub struct InputFrame {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Left mouse button held.
    pub fire: bool,
    /// Pointer position in field units.
    pub pointer: Vec2,
    pub select_weapon: Option<WeaponKind>,
    pub use_pack: bool,
    pub melee: bool,
    /// Only honored while the game is over.
    pub restart: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub packs: Vec<HealthPack>,
    pub score: u32,
    /// True while any enemy is inside the warning radius.
    pub warning_active: bool,
    pub status: GameStatus,
    pub frame: u64,
    /// Logical field size in units (not the terminal size).
    pub width: f32,
    pub height: f32,
}
