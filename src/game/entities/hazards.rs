//! Hazard and goal placement.
//!
//! This module builds random boards: gold, Wumpus and pits on distinct cells,
//! never on the agent's starting cell.

use log::debug;
use rand::Rng;
use rand::seq::{IteratorRandom, SliceRandom};

use crate::config::game::{MAX_GRID_SIZE, START_POS};
use crate::game::error::GameError;
use crate::game::grid::{BoardLayout, check_grid_size};
use crate::game::types::Position;

/// Generate a board of `grid_size` cells per side holding `pit_count` pits.
/// Fails if the grid size is out of range or has fewer free cells than markers to place.
pub fn random_layout<R: Rng + ?Sized>(
    grid_size: usize,
    pit_count: usize,
    rng: &mut R,
) -> Result<BoardLayout, GameError> {
    check_grid_size(grid_size)?;

    let free = grid_size
        .checked_mul(grid_size)
        .map(|cells| cells - 1)
        .ok_or(GameError::GridTooLarge {
            grid_size,
            max: MAX_GRID_SIZE,
        })?;
    let needed = pit_count.saturating_add(2);
    if needed > free {
        return Err(GameError::Crowded { needed, free });
    }

    // Collect every cell the agent does not start on.
    let free_positions = (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| Position { x, y }))
        .filter(|pos| *pos != START_POS);

    let mut cells = free_positions.choose_multiple(rng, needed);
    // choose_multiple does not randomize order.
    cells.shuffle(rng);

    let gold = cells[0];
    let wumpus = cells[1];
    let pits = cells[2..].to_vec();
    debug!(
        "[Hazards] Random layout: gold={} wumpus={} pits={:?}",
        gold, wumpus, pits
    );

    let layout = BoardLayout::new(grid_size, gold, pits, wumpus);
    layout.validate()?;
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn markers_never_overlap_or_cover_start() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let layout = random_layout(4, 2, &mut rng).unwrap();
            let mut seen = HashSet::new();
            assert!(seen.insert(layout.gold));
            assert!(seen.insert(layout.wumpus));
            for pit in &layout.pits {
                assert!(seen.insert(*pit));
            }
            assert!(!seen.contains(&START_POS));
            assert_eq!(layout.pits.len(), 2);
            assert!(layout.validate().is_ok());
        }
    }

    #[test]
    fn fills_every_free_cell_when_asked() {
        let mut rng = StdRng::seed_from_u64(1);
        let layout = random_layout(3, 6, &mut rng).unwrap();
        assert_eq!(layout.pits.len(), 6);
    }

    #[test]
    fn refuses_overcrowded_board() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            random_layout(2, 2, &mut rng),
            Err(GameError::Crowded { needed: 4, free: 3 })
        );
        assert_eq!(random_layout(0, 0, &mut rng), Err(GameError::EmptyGrid));
        assert_eq!(
            random_layout(4, usize::MAX, &mut rng),
            Err(GameError::Crowded { needed: usize::MAX, free: 15 })
        );
    }

    #[test]
    fn refuses_oversized_grid_without_walking_it() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            random_layout(1usize << 32, 2, &mut rng),
            Err(GameError::GridTooLarge {
                grid_size: 1usize << 32,
                max: MAX_GRID_SIZE,
            })
        );
        assert!(random_layout(MAX_GRID_SIZE + 1, 2, &mut rng).unwrap_err().is_configuration());
        assert!(random_layout(MAX_GRID_SIZE, 2, &mut rng).is_ok());
    }

    #[test]
    fn same_seed_same_board() {
        let a = random_layout(4, 2, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = random_layout(4, 2, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }
}
