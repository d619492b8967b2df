//! Property tests: the spec invariants must survive arbitrary input
//! sequences, not just the hand-picked scenarios in `test_compute.rs`.

use arena_shooter::compute::*;
use arena_shooter::entities::*;

use glam::vec2;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn arb_input() -> impl Strategy<Value = InputFrame> {
    (
        any::<[bool; 4]>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        0u8..4,
        (0.0f32..FIELD_WIDTH, 0.0f32..FIELD_HEIGHT),
    )
        .prop_map(|(dirs, fire, use_pack, melee, weapon, (px, py))| InputFrame {
            up: dirs[0],
            down: dirs[1],
            left: dirs[2],
            right: dirs[3],
            fire,
            pointer: vec2(px, py),
            select_weapon: match weapon {
                0 => Some(WeaponKind::Pistol),
                1 => Some(WeaponKind::Shotgun),
                2 => Some(WeaponKind::MachineGun),
                _ => None,
            },
            use_pack,
            melee,
            restart: false,
        })
}

proptest! {
    #[test]
    fn player_never_leaves_the_field(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(arb_input(), 1..120),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = init_state(FIELD_WIDTH, FIELD_HEIGHT, &mut rng);
        for input in &inputs {
            state = tick(&state, input, &mut rng);
            prop_assert!(state.player.pos.x >= 0.0);
            prop_assert!(state.player.pos.x <= FIELD_WIDTH - SPRITE_SIZE);
            prop_assert!(state.player.pos.y >= 0.0);
            prop_assert!(state.player.pos.y <= FIELD_HEIGHT - SPRITE_SIZE);
        }
    }

    #[test]
    fn populations_hold_steady(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(arb_input(), 1..120),
    ) {
        // Every kill and every pickup replaces one-for-one, so the
        // populations never drift from their starting sizes.
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = init_state(FIELD_WIDTH, FIELD_HEIGHT, &mut rng);
        for input in &inputs {
            state = tick(&state, input, &mut rng);
            prop_assert_eq!(state.enemies.len(), INITIAL_ENEMIES);
            prop_assert_eq!(state.packs.len(), INITIAL_PACKS);
        }
    }

    #[test]
    fn warning_matches_nearest_distance(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(arb_input(), 1..120),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = init_state(FIELD_WIDTH, FIELD_HEIGHT, &mut rng);
        for input in &inputs {
            let was_over = state.status == GameStatus::GameOver;
            state = tick(&state, input, &mut rng);
            if !was_over {
                let nearest = nearest_enemy_distance(&state.player, &state.enemies);
                prop_assert_eq!(state.warning_active, nearest < WARNING_DISTANCE);
            }
        }
    }

    #[test]
    fn ammo_only_ever_decreases(
        seed in any::<u64>(),
        inputs in proptest::collection::vec(arb_input(), 1..120),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = init_state(FIELD_WIDTH, FIELD_HEIGHT, &mut rng);
        let mut previous = state.player.ammo;
        for input in &inputs {
            state = tick(&state, input, &mut rng);
            prop_assert!(state.player.ammo <= previous);
            previous = state.player.ammo;
        }
    }
}
