//! Agent entity.
//!
//! The single controllable token: where it stands and which way it faces.

use crate::config::game::{START_DIRECTION, START_POS};
use crate::game::types::{AgentState, Direction, Position};

impl AgentState {
    pub fn new(pos: Position, dir: Direction) -> Self {
        Self { pos, dir }
    }

    /// Agent at the start cell, facing east.
    pub fn spawn() -> Self {
        Self::new(START_POS, START_DIRECTION)
    }
}

impl Default for AgentState {
    fn default() -> Self {
        Self::spawn()
    }
}
