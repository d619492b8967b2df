/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (plus the tick's input snapshot and an RNG handle) and
/// returns a brand-new `GameState`.  Side effects are limited to the
/// injected RNG.

use glam::{vec2, Vec2};
use rand::Rng;

use crate::entities::{
    Enemy, EnemyKind, GameState, GameStatus, HealthPack, InputFrame, Player, Projectile,
    WeaponKind,
};

// ── Gameplay constants ───────────────────────────────────────────────────────

/// Logical field size in units; the display scales this onto the terminal.
pub const FIELD_WIDTH: f32 = 256.0;
pub const FIELD_HEIGHT: f32 = 256.0;

/// Side length of the player/enemy sprites.  The player clamp keeps the
/// whole sprite on the field.
pub const SPRITE_SIZE: f32 = 8.0;

/// Player movement per held direction per tick.
pub const PLAYER_SPEED: f32 = 1.5;

pub const MAX_HEALTH: i32 = 100;
pub const START_AMMO: u32 = 100;
pub const HEALTH_PACK_HEAL: i32 = 25;

/// Flat damage per projectile hit.
pub const PROJECTILE_DAMAGE: i32 = 25;

/// Axis-aligned overlap range for projectile/enemy and enemy/player hits.
pub const HIT_RANGE: f32 = 6.0;
/// Axis-aligned overlap range for pack pickup.
pub const PICKUP_RANGE: f32 = 8.0;
/// Kill radius of the melee sweep (Euclidean).
pub const MELEE_RANGE: f32 = 12.0;

/// Inset margin for health-pack spawns.
pub const PACK_MARGIN: f32 = 20.0;
/// An enemy closer than this lights the warning indicator.
pub const WARNING_DISTANCE: f32 = 40.0;

pub const INITIAL_ENEMIES: usize = 5;
pub const INITIAL_PACKS: usize = 3;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state for a given field size: player centered
/// with full health and ammo, five enemies on the edges, three packs.
pub fn init_state(width: f32, height: f32, rng: &mut impl Rng) -> GameState {
    let mut enemies = Vec::with_capacity(INITIAL_ENEMIES);
    for _ in 0..INITIAL_ENEMIES {
        enemies.push(spawn_enemy(width, height, rng));
    }
    let mut packs = Vec::with_capacity(INITIAL_PACKS);
    for _ in 0..INITIAL_PACKS {
        packs.push(spawn_health_pack(width, height, rng));
    }

    GameState {
        player: Player {
            pos: vec2(width / 2.0, height / 2.0),
            health: MAX_HEALTH,
            ammo: START_AMMO,
            weapon: WeaponKind::Pistol,
            health_packs: 0,
            ticks_since_shot: 0,
        },
        projectiles: Vec::new(),
        enemies,
        packs,
        score: 0,
        warning_active: false,
        status: GameStatus::Running,
        frame: 0,
        width,
        height,
    }
}

// ── Spawning ─────────────────────────────────────────────────────────────────

/// Spawn one enemy of a random kind exactly on a random field edge.
pub fn spawn_enemy(width: f32, height: f32, rng: &mut impl Rng) -> Enemy {
    let pos = match rng.gen_range(0..4) {
        0 => vec2(rng.gen_range(0.0..=width), 0.0),    // top
        1 => vec2(rng.gen_range(0.0..=width), height), // bottom
        2 => vec2(0.0, rng.gen_range(0.0..=height)),   // left
        _ => vec2(width, rng.gen_range(0.0..=height)), // right
    };
    let kind = EnemyKind::ALL[rng.gen_range(0..EnemyKind::ALL.len())];
    Enemy {
        pos,
        kind,
        health: kind.stats().max_health,
    }
}

/// Spawn one health pack uniformly inside the inset margin.
pub fn spawn_health_pack(width: f32, height: f32, rng: &mut impl Rng) -> HealthPack {
    HealthPack {
        pos: vec2(
            rng.gen_range(PACK_MARGIN..=width - PACK_MARGIN),
            rng.gen_range(PACK_MARGIN..=height - PACK_MARGIN),
        ),
    }
}

// ── Per-tick update (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one tick.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
pub fn tick(state: &GameState, input: &InputFrame, rng: &mut impl Rng) -> GameState {
    // ── Game-over gate ───────────────────────────────────────────────────────
    // The simulation is frozen but the frame clock keeps running so the
    // overlay can blink.  Restart rebuilds everything from scratch.
    if state.status == GameStatus::GameOver {
        if input.restart {
            return init_state(state.width, state.height, rng);
        }
        return GameState {
            frame: state.frame + 1,
            ..state.clone()
        };
    }

    let frame = state.frame + 1;

    // ── 1. Player: movement, weapon select, pack use ─────────────────────────
    let mut player = state.player.clone();
    if input.up {
        player.pos.y = (player.pos.y - PLAYER_SPEED).max(0.0);
    }
    if input.down {
        player.pos.y = (player.pos.y + PLAYER_SPEED).min(state.height - SPRITE_SIZE);
    }
    if input.left {
        player.pos.x = (player.pos.x - PLAYER_SPEED).max(0.0);
    }
    if input.right {
        player.pos.x = (player.pos.x + PLAYER_SPEED).min(state.width - SPRITE_SIZE);
    }

    if let Some(weapon) = input.select_weapon {
        player.weapon = weapon;
    }

    if input.use_pack && player.health_packs > 0 && player.health < MAX_HEALTH {
        player.health_packs -= 1;
        player.health = (player.health + HEALTH_PACK_HEAL).min(MAX_HEALTH);
    }

    // ── 2. Firing ────────────────────────────────────────────────────────────
    let mut projectiles = state.projectiles.clone();
    let weapon = player.weapon.stats();
    if input.fire && player.ammo >= weapon.ammo_cost && player.ticks_since_shot > weapon.fire_rate
    {
        player.ticks_since_shot = 0;
        player.ammo -= weapon.ammo_cost;

        let muzzle = player.pos + Vec2::splat(SPRITE_SIZE / 2.0);
        let aim = input.pointer - player.pos;
        let aim_angle = aim.y.atan2(aim.x);
        for _ in 0..weapon.bullet_count {
            let angle = aim_angle
                + rng
                    .gen_range(-weapon.spread_deg..=weapon.spread_deg)
                    .to_radians();
            projectiles.push(Projectile {
                pos: muzzle,
                vel: Vec2::from_angle(angle) * weapon.bullet_speed,
            });
        }
    }
    player.ticks_since_shot += 1;

    // ── 3. Melee sweep ───────────────────────────────────────────────────────
    let mut enemies = state.enemies.clone();
    let mut score = state.score;
    let mut respawns = 0usize;
    if input.melee {
        let mut survivors = Vec::with_capacity(enemies.len());
        for enemy in enemies {
            if player.pos.distance(enemy.pos) < MELEE_RANGE {
                score += enemy.kind.stats().score;
                respawns += 1;
            } else {
                survivors.push(enemy);
            }
        }
        enemies = survivors;
    }

    // ── 4. Projectiles: advance, cull, hit detection ─────────────────────────
    let mut killed = vec![false; enemies.len()];
    let mut surviving = Vec::with_capacity(projectiles.len());
    for projectile in projectiles {
        let pos = projectile.pos + projectile.vel;

        // Strict bounds: touching the edge exactly also removes.
        if !(pos.x > 0.0 && pos.x < state.width && pos.y > 0.0 && pos.y < state.height) {
            continue;
        }

        // At most one enemy hit per projectile per tick.
        let mut consumed = false;
        for (i, enemy) in enemies.iter_mut().enumerate() {
            if killed[i] {
                continue;
            }
            if (pos.x - enemy.pos.x).abs() < HIT_RANGE && (pos.y - enemy.pos.y).abs() < HIT_RANGE
            {
                enemy.health -= PROJECTILE_DAMAGE;
                if enemy.health <= 0 {
                    killed[i] = true;
                    score += enemy.kind.stats().score;
                    respawns += 1;
                }
                consumed = true;
                break;
            }
        }
        if !consumed {
            surviving.push(Projectile {
                pos,
                ..projectile
            });
        }
    }
    let projectiles = surviving;

    let mut enemies: Vec<Enemy> = enemies
        .into_iter()
        .zip(killed)
        .filter(|(_, dead)| !*dead)
        .map(|(enemy, _)| enemy)
        .collect();

    // Kills replace one-for-one; replacements appear on a random edge and
    // start acting on this same tick.
    for _ in 0..respawns {
        enemies.push(spawn_enemy(state.width, state.height, rng));
    }

    // ── 5. Enemies: seek the player, contact damage ──────────────────────────
    let mut status = GameStatus::Running;
    for enemy in &mut enemies {
        let stats = enemy.kind.stats();

        // Re-aim every tick; no steering inertia.
        let to_player = player.pos - enemy.pos;
        let angle = to_player.y.atan2(to_player.x);
        enemy.pos += Vec2::from_angle(angle) * stats.speed;

        // Repeated damage on every overlapping tick; no debounce.
        if (player.pos.x - enemy.pos.x).abs() < HIT_RANGE
            && (player.pos.y - enemy.pos.y).abs() < HIT_RANGE
        {
            player.health -= stats.attack_damage;
            if player.health <= 0 {
                status = GameStatus::GameOver;
            }
        }
    }

    // ── 6. Health packs: pickup and replacement ──────────────────────────────
    let mut packs = Vec::with_capacity(state.packs.len());
    let mut collected = 0u32;
    for pack in &state.packs {
        if (player.pos.x - pack.pos.x).abs() < PICKUP_RANGE
            && (player.pos.y - pack.pos.y).abs() < PICKUP_RANGE
        {
            collected += 1;
        } else {
            packs.push(pack.clone());
        }
    }
    player.health_packs += collected;
    for _ in 0..collected {
        packs.push(spawn_health_pack(state.width, state.height, rng));
    }

    // ── 7. Proximity warning ─────────────────────────────────────────────────
    let warning_active = nearest_enemy_distance(&player, &enemies) < WARNING_DISTANCE;

    GameState {
        player,
        projectiles,
        enemies,
        packs,
        score,
        warning_active,
        status,
        frame,
        width: state.width,
        height: state.height,
    }
}

/// Euclidean distance to the closest enemy, or infinity when none exist.
pub fn nearest_enemy_distance(player: &Player, enemies: &[Enemy]) -> f32 {
    enemies
        .iter()
        .map(|enemy| player.pos.distance(enemy.pos))
        .fold(f32::INFINITY, f32::min)
}
