//! Game objects: the ship and everything that shares the grid with it.
//!
//! Objects are plain data plus a per-tick update rule. What happens on
//! contact with the ship is decided by [`contact_effect`], keyed on the
//! object kind, so the ship never needs to know about object types.

use crate::config::GameConfig;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// A grid cell. (0, 0) is the top-left corner; y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// ── Render descriptors ────────────────────────────────────────────────────────

/// How the presentation layer should draw an object: a text symbol for
/// terminals and an image path for graphical front-ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectGraphic {
    pub text: &'static str,
    pub image_path: &'static str,
}

impl ObjectGraphic {
    pub const SHIP: ObjectGraphic = ObjectGraphic::new("🚀", "assets/ship.png");

    pub const fn new(text: &'static str, image_path: &'static str) -> Self {
        Self { text, image_path }
    }
}

/// One entry of a render frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Drawable {
    pub pos: Position,
    pub graphic: ObjectGraphic,
}

// ── Object kinds ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Fired by the ship; climbs one row per tick.
    Bullet,
    Asteroid,
    /// Destroyed by bullets, unlike asteroids.
    Enemy,
    HealthPowerUp,
    ShieldPowerUp,
}

impl ObjectKind {
    pub fn graphic(self) -> ObjectGraphic {
        match self {
            ObjectKind::Bullet => ObjectGraphic::new("🔺", "assets/bullet.png"),
            ObjectKind::Asteroid => ObjectGraphic::new("🌑", "assets/asteroid.png"),
            ObjectKind::Enemy => ObjectGraphic::new("👾", "assets/enemy.png"),
            ObjectKind::HealthPowerUp => ObjectGraphic::new("❤️", "assets/health.png"),
            ObjectKind::ShieldPowerUp => ObjectGraphic::new("💠", "assets/shield.png"),
        }
    }

    pub fn is_power_up(self) -> bool {
        matches!(self, ObjectKind::HealthPowerUp | ObjectKind::ShieldPowerUp)
    }

    /// Asteroids, enemies and power-ups all fall toward the bottom edge.
    pub fn descends(self) -> bool {
        !matches!(self, ObjectKind::Bullet)
    }
}

/// What a ship contact does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Damage(u32),
    Heal(u32),
    Score(u64),
}

/// Effect of `kind` touching the ship, or `None` if the contact is harmless
/// and the object stays in play.
pub fn contact_effect(kind: ObjectKind, config: &GameConfig) -> Option<Effect> {
    match kind {
        ObjectKind::Bullet => None,
        ObjectKind::Asteroid => Some(Effect::Damage(config.asteroid_damage)),
        ObjectKind::Enemy => Some(Effect::Damage(config.enemy_damage)),
        ObjectKind::HealthPowerUp => Some(Effect::Heal(config.heal_amount)),
        ObjectKind::ShieldPowerUp => Some(Effect::Score(config.shield_score)),
    }
}

// ── Space objects ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpaceObject {
    pub kind: ObjectKind,
    pub pos: Position,
}

impl SpaceObject {
    pub fn new(kind: ObjectKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            pos: Position::new(x, y),
        }
    }

    /// Advance one row. The tick number does not affect any object.
    pub fn tick(&mut self, _tick: u64) {
        if self.kind.descends() {
            self.pos.y += 1;
        } else {
            self.pos.y -= 1;
        }
    }

    pub fn drawable(&self) -> Drawable {
        Drawable {
            pos: self.pos,
            graphic: self.kind.graphic(),
        }
    }
}

// ── Ship ──────────────────────────────────────────────────────────────────────

/// The player's ship. Health stays within `0..=max_health` on every path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ship {
    pub pos: Position,
    health: u32,
    max_health: u32,
    score: u64,
}

impl Ship {
    pub fn new(x: i32, y: i32, max_health: u32) -> Self {
        Self {
            pos: Position::new(x, y),
            health: max_health,
            max_health,
            score: 0,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        let (x, y) = config.ship_start;
        Self::new(x, y, config.max_health)
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    pub fn take_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(damage);
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    pub fn add_score(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Damage(damage) => self.take_damage(damage),
            Effect::Heal(amount) => self.heal(amount),
            Effect::Score(points) => self.add_score(points),
        }
    }

    pub fn drawable(&self) -> Drawable {
        Drawable {
            pos: self.pos,
            graphic: ObjectGraphic::SHIP,
        }
    }
}
