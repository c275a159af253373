//! Command dispatch and statistics for front-ends.
//!
//! The controller owns the model and the pause gate. Front-ends feed it key
//! symbols and tick numbers, and read back a render frame plus named stats.

use std::time::Duration;

use log::{info, warn};

use crate::entities::Drawable;
use crate::error::{GameError, Result};
use crate::model::GameModel;
use crate::movement::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Fire,
    Pause,
}

impl Command {
    /// Map a key symbol (case-insensitive) to a command.
    pub fn parse(input: &str) -> Result<Command> {
        match input.trim().to_uppercase().as_str() {
            "W" => Ok(Command::Move(Direction::Up)),
            "A" => Ok(Command::Move(Direction::Left)),
            "S" => Ok(Command::Move(Direction::Down)),
            "D" => Ok(Command::Move(Direction::Right)),
            "F" => Ok(Command::Fire),
            "P" => Ok(Command::Pause),
            _ => Err(GameError::InvalidInput(input.to_string())),
        }
    }
}

/// A labelled value for the stats display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stat {
    pub name: &'static str,
    pub value: String,
}

impl Stat {
    fn new(name: &'static str, value: impl ToString) -> Self {
        Self {
            name,
            value: value.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct GameController {
    model: GameModel,
    paused: bool,
}

impl GameController {
    pub fn new(model: GameModel) -> Self {
        Self {
            model,
            paused: false,
        }
    }

    pub fn model(&self) -> &GameModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut GameModel {
        &mut self.model
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            info!("Game paused.");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            info!("Game resumed.");
        }
    }

    /// Parse and run one key symbol. `P` toggles the pause gate.
    ///
    /// Errors leave the model untouched.
    pub fn handle_input(&mut self, input: &str) -> Result<Command> {
        let command = Command::parse(input).map_err(|e| {
            warn!("{}", e);
            e
        })?;
        self.execute(command)?;
        Ok(command)
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Move(direction) => {
                if let Err(e) = self.model.move_ship(direction) {
                    warn!("{}", e);
                    return Err(e);
                }
            }
            Command::Fire => {
                self.model.fire_bullet();
            }
            Command::Pause => {
                if self.paused {
                    self.resume();
                } else {
                    self.pause();
                }
            }
        }
        Ok(())
    }

    /// Advance the model unless paused. Returns whether a tick ran.
    pub fn on_tick(&mut self, tick: u64) -> bool {
        if self.paused {
            return false;
        }
        self.model.advance_tick(tick);
        true
    }

    pub fn frame(&self) -> Vec<Drawable> {
        self.model.render_descriptors()
    }

    /// Score, health, level and time survived, in display order.
    pub fn stats(&self, elapsed: Duration) -> Vec<Stat> {
        let ship = self.model.ship();
        vec![
            Stat::new("Score", ship.score()),
            Stat::new("Health", ship.health()),
            Stat::new("Level", self.model.level()),
            Stat::new("Time Survived", format!("{} seconds", elapsed.as_secs())),
        ]
    }
}
