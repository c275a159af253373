//! Same-cell collision resolution.
//!
//! Both passes read the store as it was when resolution started; removals
//! are applied once at the end.

use log::debug;

use crate::arena::{Handle, ObjectStore};
use crate::config::GameConfig;
use crate::entities::{contact_effect, ObjectKind, Ship};

/// Result of one resolution pass, mostly for logging and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Objects that touched the ship, in insertion order.
    pub ship_contacts: Vec<(Handle, ObjectKind)>,
    /// Bullet/enemy pairs that destroyed each other.
    pub shot_down: Vec<(Handle, Handle)>,
    pub removed: usize,
}

pub fn check_collisions(
    objects: &mut ObjectStore,
    ship: &mut Ship,
    config: &GameConfig,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    let mut marked: Vec<Handle> = Vec::new();

    // ── 1. Ship contacts ─────────────────────────────────────────────────────
    for (handle, object) in objects.iter() {
        if object.pos != ship.pos {
            continue;
        }
        let Some(effect) = contact_effect(object.kind, config) else {
            continue;
        };
        if object.kind.is_power_up() {
            debug!("Power-up collected: {}", object.kind.graphic().text);
        } else {
            debug!("Ship hit by {:?} at ({}, {})", object.kind, ship.pos.x, ship.pos.y);
        }
        ship.apply(effect);
        marked.push(handle);
        report.ship_contacts.push((handle, object.kind));
    }

    // ── 2. Bullets ↔ enemies (asteroids are immune) ─────────────────────────
    for (bullet, shot) in objects.iter().filter(|(_, o)| o.kind == ObjectKind::Bullet) {
        let hits = objects
            .iter()
            .filter(|(_, o)| o.kind == ObjectKind::Enemy && o.pos == shot.pos);
        let mut hit_any = false;
        for (enemy, _) in hits {
            marked.push(enemy);
            report.shot_down.push((bullet, enemy));
            hit_any = true;
        }
        if hit_any {
            marked.push(bullet);
        }
    }

    report.removed = objects.remove_all(&marked);
    report
}
