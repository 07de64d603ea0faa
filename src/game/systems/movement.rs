//! Agent movement system.
//!
//! This module is the only place the agent moves and the only place the
//! game outcome changes.

use log::{debug, info, warn};

use crate::game::error::GameError;
use crate::game::state::GameState;
use crate::game::systems::rules::classify;
use crate::game::types::{Direction, GameOutcome, MoveResult, Position};

fn step_axis(coord: usize, delta: isize, max: usize) -> usize {
    match delta {
        d if d < 0 => coord.saturating_sub(1),
        d if d > 0 => coord.saturating_add(1),
        _ => coord,
    }
    .min(max)
}

/// One step from `pos` towards `direction`, clamped to the grid on each axis.
pub fn clamp_step(pos: Position, direction: Direction, grid_size: usize) -> Position {
    let (dx, dy) = direction.delta();
    let max = grid_size.saturating_sub(1);
    Position {
        x: step_axis(pos.x, dx, max),
        y: step_axis(pos.y, dy, max),
    }
}

/// Move the agent one cell towards `direction` and classify where it lands.
///
/// Walking into a wall leaves the agent on the edge cell but still turns it
/// to face `direction`. Once the game is over this is a no-op that reports
/// the frozen agent and the final outcome.
pub fn apply_move(state: &mut GameState, direction: Direction) -> MoveResult {
    if state.outcome().is_terminal() {
        debug!(
            "[Movement] Ignoring {:?}: game already ended with {:?}",
            direction,
            state.outcome()
        );
        return current_result(state);
    }

    match commit(state, direction) {
        Ok(outcome) => {
            let agent = state.current_agent();
            debug!(
                "[Movement] Move {} {:?} -> {} outcome={:?}",
                state.moves(),
                direction,
                agent.pos,
                outcome
            );
            if outcome.is_terminal() {
                info!("[Movement] Game over after {} moves: {:?}", state.moves(), outcome);
            }
            MoveResult {
                position: agent.pos,
                direction: agent.dir,
                outcome,
            }
        }
        Err(err) => {
            warn!("[Movement] Move {:?} rejected: {}", direction, err);
            current_result(state)
        }
    }
}

fn commit(state: &mut GameState, direction: Direction) -> Result<GameOutcome, GameError> {
    let new_pos = clamp_step(state.current_agent().pos, direction, state.grid_size());
    state.set_agent(new_pos, direction)?;
    let outcome = classify(state.layout(), new_pos);
    state.set_outcome(outcome)?;
    Ok(outcome)
}

/// Snapshot of the agent and outcome without moving.
pub fn current_result(state: &GameState) -> MoveResult {
    let agent = state.current_agent();
    MoveResult {
        position: agent.pos,
        direction: agent.dir,
        outcome: state.outcome(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::BoardLayout;

    #[test]
    fn clamp_keeps_edges() {
        assert_eq!(clamp_step(Position::new(0, 2), Direction::West, 4), Position::new(0, 2));
        assert_eq!(clamp_step(Position::new(2, 0), Direction::North, 4), Position::new(2, 0));
        assert_eq!(clamp_step(Position::new(3, 1), Direction::East, 4), Position::new(3, 1));
        assert_eq!(clamp_step(Position::new(1, 3), Direction::South, 4), Position::new(1, 3));
        assert_eq!(clamp_step(Position::new(1, 1), Direction::South, 4), Position::new(1, 2));
    }

    #[test]
    fn single_cell_grid_never_moves() {
        for dir in Direction::ALL {
            assert_eq!(clamp_step(Position::new(0, 0), dir, 1), Position::new(0, 0));
        }
    }

    #[test]
    fn clamp_handles_huge_grids() {
        let edge = usize::MAX - 1;
        assert_eq!(clamp_step(Position::new(3, 3), Direction::East, usize::MAX), Position::new(4, 3));
        assert_eq!(clamp_step(Position::new(edge, 0), Direction::East, usize::MAX), Position::new(edge, 0));
        assert_eq!(clamp_step(Position::new(edge, edge), Direction::South, usize::MAX), Position::new(edge, edge));
    }

    #[test]
    fn move_counts_and_faces() {
        let mut state = GameState::new(BoardLayout::classic()).unwrap();
        let result = apply_move(&mut state, Direction::South);
        assert_eq!(result.position, Position::new(0, 1));
        assert_eq!(result.direction, Direction::South);
        assert_eq!(result.outcome, GameOutcome::InProgress);
        assert_eq!(state.moves(), 1);
    }

    #[test]
    fn no_op_after_end_does_not_count() {
        let mut state = GameState::new(BoardLayout::classic()).unwrap();
        apply_move(&mut state, Direction::East);
        let lost = apply_move(&mut state, Direction::East);
        assert_eq!(lost.outcome, GameOutcome::LostToPit);

        let again = apply_move(&mut state, Direction::South);
        assert_eq!(again, lost);
        assert_eq!(state.moves(), 2);
    }
}
