//! Boundary-checked movement for the ship.

use std::fmt;

use crate::entities::{Position, Ship};
use crate::error::{GameError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// The cell one step from `pos` in `direction`.
///
/// Valid cells span `0..=width` by `0..=height`; anything past those edges
/// is rejected with [`GameError::BoundaryExceeded`].
pub fn step(pos: Position, direction: Direction, width: i32, height: i32) -> Result<Position> {
    let next = match direction {
        Direction::Up => Position::new(pos.x, pos.y - 1),
        Direction::Down => Position::new(pos.x, pos.y + 1),
        Direction::Left => Position::new(pos.x - 1, pos.y),
        Direction::Right => Position::new(pos.x + 1, pos.y),
    };
    if next.x < 0 || next.y < 0 || next.x > width || next.y > height {
        return Err(GameError::BoundaryExceeded(direction));
    }
    Ok(next)
}

/// Move the ship one cell. On error the ship is left where it was.
pub fn move_ship(ship: &mut Ship, direction: Direction, width: i32, height: i32) -> Result<Position> {
    ship.pos = step(ship.pos, direction, width, height)?;
    Ok(ship.pos)
}
