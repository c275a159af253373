//! The game model: owns the ship, the live objects, the difficulty and the
//! random source, and advances them one tick at a time.

use log::{debug, info, trace};

use crate::arena::{Handle, ObjectStore};
use crate::collision::{self, CollisionReport};
use crate::compute::{self, Progression};
use crate::config::GameConfig;
use crate::entities::{Drawable, ObjectKind, Position, Ship, SpaceObject};
use crate::error::Result;
use crate::movement::{self, Direction};
use crate::rng::GameRng;
use crate::spawner;

#[derive(Clone, Debug)]
pub struct GameModel {
    config: GameConfig,
    ship: Ship,
    objects: ObjectStore,
    progression: Progression,
    rng: GameRng,
    ticks: u64,
}

impl GameModel {
    /// Validate `config` and start a fresh run.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// A default run with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        })
    }

    fn build(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::seeded(seed),
            None => GameRng::from_os(),
        };
        let model = Self {
            ship: Ship::from_config(&config),
            objects: ObjectStore::new(),
            progression: Progression::new(&config),
            rng,
            ticks: 0,
            config,
        };
        info!(
            "Game model initialized: level {}, spawn rate {}",
            model.progression.level, model.progression.spawn_rate
        );
        model
    }

    /// Restart the random sequence. Tests only; gameplay never reseeds.
    #[doc(hidden)]
    pub fn set_random_seed(&mut self, seed: u64) {
        self.rng.set_seed(seed);
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    pub fn objects(&self) -> &ObjectStore {
        &self.objects
    }

    pub fn level(&self) -> u32 {
        self.progression.level
    }

    pub fn spawn_rate(&self) -> u32 {
        self.progression.spawn_rate
    }

    /// Ticks advanced so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn rng_draws(&self) -> u64 {
        self.rng.draws()
    }

    /// The ship first, then every live object in insertion order.
    pub fn render_descriptors(&self) -> Vec<Drawable> {
        std::iter::once(self.ship.drawable())
            .chain(self.objects.iter().map(|(_, o)| o.drawable()))
            .collect()
    }

    // ── Commands ─────────────────────────────────────────────────────────────

    pub fn add_object(&mut self, object: SpaceObject) -> Handle {
        trace!("Added {:?} at ({}, {})", object.kind, object.pos.x, object.pos.y);
        self.objects.insert(object)
    }

    pub fn move_ship(&mut self, direction: Direction) -> Result<Position> {
        let pos = movement::move_ship(
            &mut self.ship,
            direction,
            self.config.width,
            self.config.height,
        )?;
        debug!("Ship moved to ({}, {})", pos.x, pos.y);
        Ok(pos)
    }

    pub fn fire_bullet(&mut self) -> Handle {
        let Position { x, y } = self.ship.pos;
        debug!("Bullet fired from ({}, {})", x, y);
        self.add_object(SpaceObject::new(ObjectKind::Bullet, x, y))
    }

    // ── Tick pipeline ────────────────────────────────────────────────────────

    /// Advance the simulation by exactly one step.
    pub fn advance_tick(&mut self, tick: u64) {
        self.update_game(tick);
        self.check_collisions();
        self.spawn_objects();
        self.level_up();
        self.ticks += 1;
    }

    /// Move every object one row and cull those leaving the grid.
    pub fn update_game(&mut self, tick: u64) -> Vec<Handle> {
        compute::update_objects(&mut self.objects, self.config.height, tick)
    }

    pub fn check_collisions(&mut self) -> CollisionReport {
        collision::check_collisions(&mut self.objects, &mut self.ship, &self.config)
    }

    pub fn spawn_objects(&mut self) -> Vec<Handle> {
        spawner::spawn_objects(
            &mut self.objects,
            &self.ship,
            self.progression.spawn_rate,
            &self.config,
            &mut self.rng,
        )
    }

    pub fn level_up(&mut self) -> bool {
        self.progression.level_up(self.ship.score(), &self.config)
    }
}
