//! Static board layout.
//!
//! Holds the grid size and the fixed gold, pit and Wumpus cells. A layout
//! never changes once a game has been built from it.

use serde::{Deserialize, Serialize};

use crate::config::game::{GOLD_POS, GRID_SIZE, MAX_GRID_SIZE, PIT_POSITIONS, START_POS, WUMPUS_POS};
use crate::game::error::GameError;
use crate::game::types::Position;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub grid_size: usize,
    pub gold: Position,
    pub pits: Vec<Position>,
    pub wumpus: Position,
}

impl BoardLayout {
    pub fn new(grid_size: usize, gold: Position, pits: Vec<Position>, wumpus: Position) -> Self {
        Self {
            grid_size,
            gold,
            pits,
            wumpus,
        }
    }

    /// The 4x4 board with gold at (3,3), pits at (1,2) and (2,0), and the Wumpus at (2,2).
    pub fn classic() -> Self {
        Self::new(GRID_SIZE, GOLD_POS, PIT_POSITIONS.to_vec(), WUMPUS_POS)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.grid_size && pos.y < self.grid_size
    }

    pub fn is_pit(&self, pos: Position) -> bool {
        self.pits.contains(&pos)
    }

    /// Check that the grid size is within `1..=MAX_GRID_SIZE` and every marker,
    /// plus the start cell, is on it.
    pub fn validate_bounds(&self) -> Result<(), GameError> {
        check_grid_size(self.grid_size)?;
        let markers = std::iter::once(("start cell", START_POS))
            .chain(std::iter::once(("gold", self.gold)))
            .chain(std::iter::once(("Wumpus", self.wumpus)))
            .chain(self.pits.iter().map(|&p| ("pit", p)));
        for (what, pos) in markers {
            if !self.contains(pos) {
                return Err(GameError::Configuration {
                    what,
                    pos,
                    grid_size: self.grid_size,
                });
            }
        }
        Ok(())
    }

    /// Check that no pit shares a cell with the gold or the Wumpus.
    pub fn validate_distinct(&self) -> Result<(), GameError> {
        for &pos in &self.pits {
            if pos == self.gold {
                return Err(GameError::Overlap { what: "gold", pos });
            }
            if pos == self.wumpus {
                return Err(GameError::Overlap { what: "Wumpus", pos });
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), GameError> {
        self.validate_bounds()?;
        self.validate_distinct()
    }
}

/// Reject empty and oversized grids.
pub fn check_grid_size(grid_size: usize) -> Result<(), GameError> {
    if grid_size == 0 {
        return Err(GameError::EmptyGrid);
    }
    if grid_size > MAX_GRID_SIZE {
        return Err(GameError::GridTooLarge {
            grid_size,
            max: MAX_GRID_SIZE,
        });
    }
    Ok(())
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_board_is_valid() {
        let layout = BoardLayout::classic();
        assert_eq!(layout.grid_size, 4);
        assert_eq!(layout.pits.len(), 2);
        assert_eq!(layout.validate(), Ok(()));
    }

    #[test]
    fn rejects_marker_off_the_grid() {
        let layout = BoardLayout::new(4, Position::new(4, 3), vec![], Position::new(2, 2));
        assert_eq!(
            layout.validate_bounds(),
            Err(GameError::Configuration {
                what: "gold",
                pos: Position::new(4, 3),
                grid_size: 4,
            })
        );

        let layout = BoardLayout::new(4, Position::new(3, 3), vec![Position::new(0, 9)], Position::new(2, 2));
        assert!(matches!(
            layout.validate_bounds(),
            Err(GameError::Configuration { what: "pit", .. })
        ));
    }

    #[test]
    fn rejects_empty_grid() {
        let layout = BoardLayout::new(0, Position::new(0, 0), vec![], Position::new(0, 0));
        assert_eq!(layout.validate_bounds(), Err(GameError::EmptyGrid));
    }

    #[test]
    fn rejects_oversized_grid() {
        let layout = BoardLayout::new(usize::MAX, Position::new(3, 3), vec![], Position::new(2, 2));
        assert_eq!(
            layout.validate_bounds(),
            Err(GameError::GridTooLarge {
                grid_size: usize::MAX,
                max: MAX_GRID_SIZE,
            })
        );
        assert!(layout.validate().unwrap_err().is_configuration());

        let largest = BoardLayout::new(MAX_GRID_SIZE, Position::new(3, 3), vec![], Position::new(2, 2));
        assert_eq!(largest.validate(), Ok(()));
    }

    #[test]
    fn rejects_pit_on_wumpus_or_gold() {
        let layout = BoardLayout::new(4, Position::new(3, 3), vec![Position::new(2, 2)], Position::new(2, 2));
        assert_eq!(layout.validate_bounds(), Ok(()));
        assert_eq!(
            layout.validate_distinct(),
            Err(GameError::Overlap {
                what: "Wumpus",
                pos: Position::new(2, 2),
            })
        );

        let layout = BoardLayout::new(4, Position::new(3, 3), vec![Position::new(3, 3)], Position::new(2, 2));
        assert!(layout.validate().unwrap_err().is_configuration());
    }
}
