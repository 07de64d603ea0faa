//! Game entities module.
//!
//! This module organizes agent and hazard entity logic.

pub mod agent;
pub mod hazards;

pub use hazards::*;
