//! Probabilistic spawning along the top row.
//!
//! Each tick runs three gates (asteroid, enemy, power-up). Every gate takes
//! its roll and its column whether or not it passes, and the power-up gate
//! always takes its type coin as well, so a tick costs exactly
//! [`DRAWS_PER_TICK`] draws. Seeded runs therefore replay identically no
//! matter which gates fired.

use log::debug;

use crate::arena::{Handle, ObjectStore};
use crate::config::GameConfig;
use crate::entities::{ObjectKind, Position, Ship, SpaceObject};
use crate::rng::GameRng;

pub const DRAWS_PER_TICK: u64 = 7;

/// Run the three spawn gates once. Returns the handles of new objects.
pub fn spawn_objects(
    objects: &mut ObjectStore,
    ship: &Ship,
    spawn_rate: u32,
    config: &GameConfig,
    rng: &mut GameRng,
) -> Vec<Handle> {
    let columns = config.width as u32;
    let rate = f64::from(spawn_rate);
    let mut spawned = Vec::new();

    // ── Asteroid ─────────────────────────────────────────────────────────────
    let roll = rng.next_int(100);
    let x = rng.next_int(columns) as i32;
    if roll < spawn_rate {
        spawned.extend(place(objects, ship, ObjectKind::Asteroid, x));
    }

    // ── Enemy ────────────────────────────────────────────────────────────────
    let roll = rng.next_int(100);
    let x = rng.next_int(columns) as i32;
    if f64::from(roll) < rate * config.enemy_spawn_factor {
        spawned.extend(place(objects, ship, ObjectKind::Enemy, x));
    }

    // ── Power-up ─────────────────────────────────────────────────────────────
    let roll = rng.next_int(100);
    let x = rng.next_int(columns) as i32;
    let shield = rng.next_bool();
    if f64::from(roll) < rate * config.power_up_spawn_factor {
        let kind = if shield {
            ObjectKind::ShieldPowerUp
        } else {
            ObjectKind::HealthPowerUp
        };
        spawned.extend(place(objects, ship, kind, x));
    }

    spawned
}

/// Put `kind` at the top of column `x` unless the ship is sitting there.
fn place(objects: &mut ObjectStore, ship: &Ship, kind: ObjectKind, x: i32) -> Option<Handle> {
    if ship.pos == Position::new(x, 0) {
        debug!("Suppressed {:?} spawn under the ship at ({}, 0)", kind, x);
        return None;
    }
    let handle = objects.insert(SpaceObject::new(kind, x, 0));
    debug!("Spawned {:?} at ({}, 0)", kind, x);
    Some(handle)
}
