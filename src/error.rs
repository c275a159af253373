//! Error types for the simulation core.
//!
//! Every error is recoverable and local to the command that raised it:
//! neither the live objects nor the random sequence are touched on failure.

use thiserror::Error;

use crate::movement::Direction;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The ship tried to leave the grid.
    #[error("Cannot move {0}. Out of bounds!")]
    BoundaryExceeded(Direction),

    /// A command symbol outside W, A, S, D, F, P.
    #[error("Invalid input. Use W, A, S, D, F, or P.")]
    InvalidInput(String),

    /// The configuration could not be read, parsed or validated.
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
