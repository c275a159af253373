//! Tuning constants for a simulation run.
//!
//! Defaults reproduce the classic game; a JSON file may override any subset
//! of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

// ── Defaults ──────────────────────────────────────────────────────────────────

pub const GAME_WIDTH: i32 = 10;
pub const GAME_HEIGHT: i32 = 20;
/// Percentage chance per tick that an asteroid spawns.
pub const START_SPAWN_RATE: u32 = 2;
/// Added to the spawn rate on every level promotion.
pub const SPAWN_RATE_INCREASE: u32 = 5;
pub const START_LEVEL: u32 = 1;
/// Score needed per level; the next promotion happens at `level * SCORE_THRESHOLD`.
pub const SCORE_THRESHOLD: u64 = 100;
pub const ASTEROID_DAMAGE: u32 = 10;
pub const ENEMY_DAMAGE: u32 = 20;
/// Enemy spawn chance as a fraction of the asteroid spawn chance.
pub const ENEMY_SPAWN_FACTOR: f64 = 0.5;
/// Power-up spawn chance as a fraction of the asteroid spawn chance.
pub const POWER_UP_SPAWN_FACTOR: f64 = 0.25;
pub const HEAL_AMOUNT: u32 = 20;
pub const SHIELD_SCORE: u64 = 50;
pub const MAX_HEALTH: u32 = 100;
pub const SHIP_START: (i32, i32) = (5, 10);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub start_spawn_rate: u32,
    pub spawn_rate_increase: u32,
    pub start_level: u32,
    pub score_threshold: u64,
    pub asteroid_damage: u32,
    pub enemy_damage: u32,
    pub enemy_spawn_factor: f64,
    pub power_up_spawn_factor: f64,
    pub heal_amount: u32,
    pub shield_score: u64,
    pub max_health: u32,
    pub ship_start: (i32, i32),
    /// Fixed seed for the spawner. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
            start_spawn_rate: START_SPAWN_RATE,
            spawn_rate_increase: SPAWN_RATE_INCREASE,
            start_level: START_LEVEL,
            score_threshold: SCORE_THRESHOLD,
            asteroid_damage: ASTEROID_DAMAGE,
            enemy_damage: ENEMY_DAMAGE,
            enemy_spawn_factor: ENEMY_SPAWN_FACTOR,
            power_up_spawn_factor: POWER_UP_SPAWN_FACTOR,
            heal_amount: HEAL_AMOUNT,
            shield_score: SHIELD_SCORE,
            max_health: MAX_HEALTH,
            ship_start: SHIP_START,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| GameError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| GameError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GameError::Config(format!(
                "grid must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        let (x, y) = self.ship_start;
        if !(0..=self.width).contains(&x) || !(0..=self.height).contains(&y) {
            return Err(GameError::Config(format!(
                "ship start ({}, {}) is outside the grid",
                x, y
            )));
        }
        if self.start_level == 0 {
            return Err(GameError::Config("start level must be at least 1".into()));
        }
        if self.score_threshold == 0 {
            return Err(GameError::Config("score threshold must be positive".into()));
        }
        if self.max_health == 0 {
            return Err(GameError::Config("max health must be positive".into()));
        }
        for (name, factor) in [
            ("enemy_spawn_factor", self.enemy_spawn_factor),
            ("power_up_spawn_factor", self.power_up_spawn_factor),
        ] {
            if !factor.is_finite() || factor < 0.0 {
                return Err(GameError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, factor
                )));
            }
        }
        Ok(())
    }
}
