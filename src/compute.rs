//! Simulation clock: object movement, off-grid culling and level progression.

use log::{info, trace};

use crate::arena::{Handle, ObjectStore};
use crate::config::GameConfig;
use crate::entities::{ObjectKind, SpaceObject};

// ── Movement & culling ───────────────────────────────────────────────────────

/// True when `object` would leave the grid on its next tick.
///
/// Falling objects leave through the bottom edge once `y + 1 > height`.
/// Bullets leave through the top: a bullet on row 0 would reach row -1,
/// where nothing else can ever be, so it is dropped instead. Such bullets
/// never reappear in the live set or in a render frame, unlike falling
/// objects which stay tracked down to row `height`.
pub fn leaves_grid(object: &SpaceObject, height: i32) -> bool {
    match object.kind {
        ObjectKind::Bullet => object.pos.y - 1 < 0,
        _ => object.pos.y + 1 > height,
    }
}

/// Tick every object that stays on the grid and drop the rest.
/// Returns the culled handles.
pub fn update_objects(objects: &mut ObjectStore, height: i32, tick: u64) -> Vec<Handle> {
    let mut culled = Vec::new();
    for (handle, object) in objects.iter_mut() {
        if leaves_grid(object, height) {
            culled.push(handle);
        } else {
            object.tick(tick);
        }
    }
    if !culled.is_empty() {
        trace!("Culled off-grid objects: {:?}", culled);
        objects.remove_all(&culled);
    }
    culled
}

// ── Level progression ────────────────────────────────────────────────────────

/// Current difficulty. Both fields only ever grow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progression {
    pub level: u32,
    /// Percentage chance per tick of an asteroid spawn.
    pub spawn_rate: u32,
}

impl Progression {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            level: config.start_level,
            spawn_rate: config.start_spawn_rate,
        }
    }

    /// Score needed for the next promotion. Saturates instead of overflowing
    /// for very large configured thresholds.
    pub fn threshold(&self, config: &GameConfig) -> u64 {
        u64::from(self.level).saturating_mul(config.score_threshold)
    }

    /// Promote at most one level. A score that jumps several thresholds at
    /// once is caught up one level per tick.
    pub fn level_up(&mut self, score: u64, config: &GameConfig) -> bool {
        if score < self.threshold(config) {
            return false;
        }
        self.level += 1;
        self.spawn_rate = self.spawn_rate.saturating_add(config.spawn_rate_increase);
        info!(
            "Level up! Now level {} (spawn rate {}%)",
            self.level, self.spawn_rate
        );
        true
    }
}
