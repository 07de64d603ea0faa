//! Shared vocabulary: cells, headings, outcomes and move results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four canonical headings. `y` grows southwards.
///
/// Deserializes from the full name or from the single-letter affordance
/// names (`"N"`, `"S"`, `"E"`, `"W"`) used by picking front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(alias = "N")]
    North,
    #[serde(alias = "S")]
    South,
    #[serde(alias = "E")]
    East,
    #[serde(alias = "W")]
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit step for this heading as `(dx, dy)`.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction: {0:?}")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "s" | "south" => Ok(Direction::South),
            "e" | "east" => Ok(Direction::East),
            "w" | "west" => Ok(Direction::West),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Won,
    LostToPit,
    LostToWumpus,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// Text shown to the player once the game reaches this outcome.
    pub fn message(self) -> &'static str {
        match self {
            GameOutcome::InProgress => "The hunt goes on.",
            GameOutcome::Won => "You found the gold! You win!",
            GameOutcome::LostToPit => "You fell into a pit! Game Over.",
            GameOutcome::LostToWumpus => "Wumpus got you! Game Over.",
        }
    }
}

/// Position and heading of the single agent token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentState {
    pub pos: Position,
    pub dir: Direction,
}

/// What a single move produced. Sent as-is to renderers and clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub position: Position,
    pub direction: Direction,
    pub outcome: GameOutcome,
}
