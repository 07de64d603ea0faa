//! Outcome rules: what landing on a cell means.

use crate::game::grid::BoardLayout;
use crate::game::types::{GameOutcome, Position};

/// Classify the cell the agent landed on.
///
/// Markers are matched by exact coordinates in this order: Wumpus, pit, gold.
/// The order only matters on boards where markers overlap.
pub fn classify(layout: &BoardLayout, pos: Position) -> GameOutcome {
    if pos == layout.wumpus {
        GameOutcome::LostToWumpus
    } else if layout.is_pit(pos) {
        GameOutcome::LostToPit
    } else if pos == layout.gold {
        GameOutcome::Won
    } else {
        GameOutcome::InProgress
    }
}
