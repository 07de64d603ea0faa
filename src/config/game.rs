//! Game configuration constants.
//!
//! This module defines the classic board: grid dimensions, the agent's
//! starting cell and heading, and the fixed gold and hazard locations.

use crate::game::types::{Direction, Position};

/// Number of cells along each side of the square grid.
pub const GRID_SIZE: usize = 4;

/// Largest grid side accepted for custom and random boards.
pub const MAX_GRID_SIZE: usize = 64;

/// Cell the agent starts on.
pub const START_POS: Position = Position { x: 0, y: 0 };

/// Heading the agent starts with.
pub const START_DIRECTION: Direction = Direction::East;

/// Location of the gold on the classic board.
pub const GOLD_POS: Position = Position { x: 3, y: 3 };

/// Locations of the pits on the classic board.
pub const PIT_POSITIONS: [Position; 2] = [Position { x: 1, y: 2 }, Position { x: 2, y: 0 }];

/// Location of the Wumpus on the classic board.
pub const WUMPUS_POS: Position = Position { x: 2, y: 2 };

/// Number of pits placed on a randomly generated board.
pub const RANDOM_PIT_COUNT: usize = 2;
