//! Space survival: a tick-driven grid shooter.
//!
//! The simulation core is deterministic for a given seed:
//! - One tick runs culling, collisions, spawning and level progression in that order
//! - Every tick consumes exactly seven random draws
//! - No rendering, terminal or clock dependencies
//!
//! The terminal front-end in `main.rs` only talks to [`GameController`].

pub mod arena;
pub mod collision;
pub mod compute;
pub mod config;
pub mod controller;
pub mod entities;
pub mod error;
pub mod model;
pub mod movement;
pub mod rng;
pub mod spawner;

pub use arena::{Handle, ObjectStore};
pub use config::GameConfig;
pub use controller::{Command, GameController, Stat};
pub use entities::{Drawable, ObjectGraphic, ObjectKind, Position, Ship, SpaceObject};
pub use error::{GameError, Result};
pub use model::GameModel;
pub use movement::Direction;
pub use rng::GameRng;
