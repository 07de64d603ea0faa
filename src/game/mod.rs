//! Board model and movement rules.
//!
//! Pure game logic with no knowledge of sockets or drawing: the board
//! layout, the session state, and the systems that move the agent and decide
//! how the game ends.

pub mod error;
pub mod types;
pub mod state;

pub mod demo;
pub mod entities;
pub mod grid;
pub mod systems;
