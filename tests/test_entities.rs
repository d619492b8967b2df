use arena_shooter::entities::*;

use glam::vec2;

#[test]
fn enemy_stats_tables() {
    let goblin = EnemyKind::Goblin.stats();
    assert_eq!(goblin.name, "Goblin");
    assert_eq!(goblin.max_health, 20);
    assert_eq!(goblin.speed, 0.8);
    assert_eq!(goblin.attack_damage, 5);
    assert_eq!(goblin.score, 10);

    let skeleton = EnemyKind::Skeleton.stats();
    assert_eq!(skeleton.max_health, 30);
    assert_eq!(skeleton.speed, 0.6);
    assert_eq!(skeleton.attack_damage, 10);
    assert_eq!(skeleton.score, 15);

    let zombie = EnemyKind::Zombie.stats();
    assert_eq!(zombie.max_health, 40);
    assert_eq!(zombie.speed, 0.4);
    assert_eq!(zombie.attack_damage, 15);
    assert_eq!(zombie.score, 20);
}

#[test]
fn weapon_stats_tables() {
    let pistol = WeaponKind::Pistol.stats();
    assert_eq!(pistol.name, "Pistol");
    assert_eq!(pistol.ammo_cost, 1);
    assert_eq!(pistol.fire_rate, 15);
    assert_eq!(pistol.bullet_speed, 4.0);
    assert_eq!(pistol.bullet_count, 1);
    assert_eq!(pistol.spread_deg, 5.0);

    let shotgun = WeaponKind::Shotgun.stats();
    assert_eq!(shotgun.name, "Shotgun");
    assert_eq!(shotgun.ammo_cost, 5);
    assert_eq!(shotgun.fire_rate, 40);
    assert_eq!(shotgun.bullet_count, 6);
    assert_eq!(shotgun.spread_deg, 30.0);

    let machine_gun = WeaponKind::MachineGun.stats();
    assert_eq!(machine_gun.name, "Machine Gun");
    assert_eq!(machine_gun.ammo_cost, 1);
    assert_eq!(machine_gun.fire_rate, 5);
    assert_eq!(machine_gun.bullet_count, 1);
    assert_eq!(machine_gun.spread_deg, 10.0);
}

#[test]
fn enemy_kind_all_covers_every_variant() {
    assert_eq!(EnemyKind::ALL.len(), 3);
    assert!(EnemyKind::ALL.contains(&EnemyKind::Goblin));
    assert!(EnemyKind::ALL.contains(&EnemyKind::Skeleton));
    assert!(EnemyKind::ALL.contains(&EnemyKind::Zombie));
}

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq — equality comparisons must work
    assert_eq!(EnemyKind::Goblin, EnemyKind::Goblin);
    assert_ne!(EnemyKind::Goblin, EnemyKind::Zombie);
    assert_eq!(WeaponKind::Pistol, WeaponKind::Pistol);
    assert_ne!(WeaponKind::Pistol, WeaponKind::MachineGun);
    assert_eq!(GameStatus::Running, GameStatus::Running);
    assert_ne!(GameStatus::Running, GameStatus::GameOver);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: Player {
            pos: vec2(128.0, 128.0),
            health: 100,
            ammo: 100,
            weapon: WeaponKind::Pistol,
            health_packs: 0,
            ticks_since_shot: 0,
        },
        projectiles: Vec::new(),
        enemies: Vec::new(),
        packs: Vec::new(),
        score: 0,
        warning_active: false,
        status: GameStatus::Running,
        frame: 0,
        width: 256.0,
        height: 256.0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.pos.x = 99.0;
    cloned.score = 999;
    cloned.enemies.push(Enemy {
        pos: vec2(5.0, 5.0),
        kind: EnemyKind::Goblin,
        health: 20,
    });

    assert_eq!(original.player.pos.x, 128.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}

#[test]
fn input_frame_default_is_all_idle() {
    let input = InputFrame::default();
    assert!(!input.up && !input.down && !input.left && !input.right);
    assert!(!input.fire && !input.use_pack && !input.melee && !input.restart);
    assert!(input.select_weapon.is_none());
}
