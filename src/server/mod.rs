// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the hosted side of the board, including:
//! - Application state management
//! - HTTP/WebSocket routing
//! - The JSON game API
//! - Game session orchestration (one isolated actor per game)

pub mod state;
pub mod router;
pub mod api;
pub mod error;
pub mod game_session;
