//! Errors raised by the board model.
//!
//! Both families are programmer errors in the host: a bad board setup, or a
//! mutation attempted after the game has already ended.

use crate::game::types::{GameOutcome, Position};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("grid size must be at least 1")]
    EmptyGrid,
    #[error("grid size {grid_size} exceeds the maximum of {max}")]
    GridTooLarge { grid_size: usize, max: usize },
    #[error("{what} at {pos} lies outside the {grid_size}x{grid_size} grid")]
    Configuration {
        what: &'static str,
        pos: Position,
        grid_size: usize,
    },
    #[error("pit at {pos} overlaps the {what}")]
    Overlap { what: &'static str, pos: Position },
    #[error("cannot place {needed} markers on {free} free cells")]
    Crowded { needed: usize, free: usize },
    #[error("the game is over ({0:?}); the agent can no longer move")]
    IllegalState(GameOutcome),
}

impl GameError {
    /// True for every invalid-board variant.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, GameError::IllegalState(_))
    }

    /// Stable error code sent to clients.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::EmptyGrid
            | GameError::GridTooLarge { .. }
            | GameError::Configuration { .. }
            | GameError::Overlap { .. }
            | GameError::Crowded { .. } => "CONFIGURATION_ERROR",
            GameError::IllegalState(_) => "ILLEGAL_STATE",
        }
    }
}
