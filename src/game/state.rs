//! Session state: the board layout, the agent, and the outcome so far.

use serde::{Deserialize, Serialize};

use crate::game::error::GameError;
use crate::game::grid::BoardLayout;
use crate::game::types::{AgentState, Direction, GameOutcome, Position};

/// Authoritative board and agent data for one session.
///
/// Only the movement system mutates it, through [`GameState::set_agent`] and
/// [`GameState::set_outcome`]. Once the outcome is terminal the agent is frozen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    layout: BoardLayout,
    agent: AgentState,
    outcome: GameOutcome,
    moves: u64,
}

impl GameState {
    /// Build a fresh game on `layout`. Fails if the grid is empty or any
    /// marker lies off the grid.
    pub fn new(layout: BoardLayout) -> Result<Self, GameError> {
        layout.validate_bounds()?;
        Ok(GameState {
            layout,
            agent: AgentState::spawn(),
            outcome: GameOutcome::InProgress,
            moves: 0,
        })
    }

    pub fn current_agent(&self) -> AgentState {
        self.agent
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn grid_size(&self) -> usize {
        self.layout.grid_size
    }

    /// Number of accepted moves so far.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    pub(crate) fn set_agent(&mut self, pos: Position, dir: Direction) -> Result<(), GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::IllegalState(self.outcome));
        }
        debug_assert!(self.layout.contains(pos));
        self.agent = AgentState { pos, dir };
        self.moves = self.moves.saturating_add(1);
        Ok(())
    }

    /// Record the outcome of the latest move. A terminal outcome is written once.
    pub(crate) fn set_outcome(&mut self, outcome: GameOutcome) -> Result<(), GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::IllegalState(self.outcome));
        }
        self.outcome = outcome;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin_facing_east() {
        let state = GameState::new(BoardLayout::classic()).unwrap();
        assert_eq!(state.current_agent(), AgentState::new(Position::new(0, 0), Direction::East));
        assert_eq!(state.outcome(), GameOutcome::InProgress);
        assert_eq!(state.moves(), 0);
    }

    #[test]
    fn construct_rejects_out_of_range_marker() {
        let layout = BoardLayout::new(4, Position::new(3, 3), vec![Position::new(1, 2)], Position::new(2, 7));
        let err = GameState::new(layout).unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(err.code(), "CONFIGURATION_ERROR");
    }

    #[test]
    fn set_agent_refused_after_end() {
        let mut state = GameState::new(BoardLayout::classic()).unwrap();
        state.set_agent(Position::new(1, 0), Direction::East).unwrap();
        state.set_outcome(GameOutcome::Won).unwrap();

        let err = state.set_agent(Position::new(2, 0), Direction::East).unwrap_err();
        assert_eq!(err, GameError::IllegalState(GameOutcome::Won));
        assert_eq!(state.current_agent().pos, Position::new(1, 0));
        assert_eq!(state.moves(), 1);
    }

    #[test]
    fn move_counter_saturates() {
        let mut state = GameState::new(BoardLayout::classic()).unwrap();
        state.moves = u64::MAX;
        state.set_agent(Position::new(0, 0), Direction::West).unwrap();
        assert_eq!(state.moves(), u64::MAX);
    }

    #[test]
    fn terminal_outcome_written_once() {
        let mut state = GameState::new(BoardLayout::classic()).unwrap();
        state.set_outcome(GameOutcome::LostToPit).unwrap();
        assert!(state.set_outcome(GameOutcome::Won).is_err());
        assert_eq!(state.outcome(), GameOutcome::LostToPit);
    }
}
