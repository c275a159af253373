use space_survival::arena::ObjectStore;
use space_survival::config::GameConfig;
use space_survival::entities::{ObjectKind, Ship};
use space_survival::rng::GameRng;
use space_survival::spawner::{spawn_objects, DRAWS_PER_TICK};

/// High enough that every gate passes: 400 * 0.25 = 100 > any roll.
const ALWAYS: u32 = 400;

fn setup() -> (ObjectStore, Ship, GameConfig, GameRng) {
    let config = GameConfig::default();
    let ship = Ship::from_config(&config);
    (ObjectStore::new(), ship, config, GameRng::seeded(42))
}

#[test]
fn zero_rate_never_spawns() {
    let (mut store, ship, config, mut rng) = setup();
    for _ in 0..100 {
        assert!(spawn_objects(&mut store, &ship, 0, &config, &mut rng).is_empty());
    }
    assert!(store.is_empty());
}

#[test]
fn open_gates_spawn_one_of_each_on_the_top_row() {
    let (mut store, ship, config, mut rng) = setup();
    let spawned = spawn_objects(&mut store, &ship, ALWAYS, &config, &mut rng);
    assert_eq!(spawned.len(), 3);

    let objects: Vec<_> = store.iter().map(|(_, o)| *o).collect();
    assert_eq!(objects[0].kind, ObjectKind::Asteroid);
    assert_eq!(objects[1].kind, ObjectKind::Enemy);
    assert!(objects[2].kind.is_power_up());
    for o in &objects {
        assert_eq!(o.pos.y, 0);
        assert!((0..config.width).contains(&o.pos.x));
    }
}

#[test]
fn draw_count_is_fixed_regardless_of_outcome() {
    for rate in [0, 2, 7, 50, ALWAYS] {
        let (mut store, ship, config, mut rng) = setup();
        for tick in 1..=20u64 {
            spawn_objects(&mut store, &ship, rate, &config, &mut rng);
            assert_eq!(rng.draws(), tick * DRAWS_PER_TICK, "rate {}", rate);
        }
    }
}

#[test]
fn ship_on_spawn_cell_suppresses_spawn_but_not_draws() {
    // A one-column grid puts every spawn at x = 0.
    let config = GameConfig {
        width: 1,
        ship_start: (0, 0),
        ..GameConfig::default()
    };
    let ship = Ship::from_config(&config);
    let mut store = ObjectStore::new();
    let mut rng = GameRng::seeded(9);

    let spawned = spawn_objects(&mut store, &ship, ALWAYS, &config, &mut rng);
    assert!(spawned.is_empty());
    assert!(store.is_empty());
    assert_eq!(rng.draws(), DRAWS_PER_TICK);
}

#[test]
fn same_seed_spawns_same_objects() {
    let run = || {
        let (mut store, ship, config, mut rng) = setup();
        for _ in 0..50 {
            spawn_objects(&mut store, &ship, 30, &config, &mut rng);
        }
        store.iter().map(|(_, o)| *o).collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn seed_42_rate_30_spawn_list() {
    let (mut store, ship, config, mut rng) = setup();
    let mut per_call = Vec::new();
    for _ in 0..5 {
        let handles = spawn_objects(&mut store, &ship, 30, &config, &mut rng);
        let spawned: Vec<_> = handles
            .iter()
            .map(|h| {
                let o = store.get(*h).unwrap();
                (o.kind, o.pos.x, o.pos.y)
            })
            .collect();
        per_call.push(spawned);
    }

    use ObjectKind::*;
    assert_eq!(
        per_call,
        vec![
            vec![],
            vec![(HealthPowerUp, 5, 0)],
            vec![],
            vec![(Asteroid, 5, 0)],
            vec![(Asteroid, 5, 0), (ShieldPowerUp, 9, 0)],
        ]
    );
    assert_eq!(store.len(), 4);
    assert_eq!(rng.draws(), 5 * DRAWS_PER_TICK);
}

#[test]
fn both_power_up_kinds_appear() {
    let (mut store, ship, config, mut rng) = setup();
    for _ in 0..200 {
        spawn_objects(&mut store, &ship, ALWAYS, &config, &mut rng);
    }
    let kinds: Vec<ObjectKind> = store.iter().map(|(_, o)| o.kind).collect();
    assert!(kinds.contains(&ObjectKind::HealthPowerUp));
    assert!(kinds.contains(&ObjectKind::ShieldPowerUp));
}
