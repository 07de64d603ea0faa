//! Presentation seam.
//!
//! The game never draws anything itself. After each move it hands the
//! [`MoveResult`] to a [`Renderer`], which keeps its view of the agent in sync
//! and tells the player how the game ended. [`TerminalRenderer`] is the text
//! implementation used by the standalone demo.

use std::io::{self, Write};

use crate::game::grid::BoardLayout;
use crate::game::types::{AgentState, Direction, GameOutcome, MoveResult, Position};

pub trait Renderer {
    /// Move the agent's visual to the committed position and heading.
    fn sync(&mut self, update: &MoveResult);

    /// Show the final outcome. Called once per game.
    fn announce(&mut self, outcome: GameOutcome);
}

/// Feed a move result to `renderer`. `previous` is the outcome before the
/// move; the outcome is announced only on the transition into a terminal state.
pub fn dispatch<R: Renderer + ?Sized>(previous: GameOutcome, result: &MoveResult, renderer: &mut R) {
    renderer.sync(result);
    if !previous.is_terminal() && result.outcome.is_terminal() {
        renderer.announce(result.outcome);
    }
}

/// World-space placement of a cell's centre as `[x, y, z]`, with the board
/// centred on the origin and lying in the `y = 0` plane.
pub fn grid_to_world(pos: Position, grid_size: usize) -> [f32; 3] {
    let offset = (grid_size as f32 - 1.0) / 2.0;
    [pos.x as f32 - offset, 0.0, pos.y as f32 - offset]
}

fn agent_symbol(dir: Direction) -> &'static str {
    match dir {
        Direction::North => "A^",
        Direction::South => "Av",
        Direction::East => "A>",
        Direction::West => "A<",
    }
}

/// Draw the whole board as text, one row per line, north at the top.
pub fn render_board(layout: &BoardLayout, agent: AgentState) -> String {
    let mut out = String::new();
    for y in 0..layout.grid_size {
        for x in 0..layout.grid_size {
            let pos = Position { x, y };
            // Agent is drawn over whatever it stands on.
            let symbol = if pos == agent.pos {
                agent_symbol(agent.dir)
            } else if pos == layout.wumpus {
                "W "
            } else if layout.is_pit(pos) {
                "P "
            } else if pos == layout.gold {
                "G "
            } else {
                "██"
            };
            out.push_str(&format!("{:<3}", symbol));
        }
        out.push('\n');
    }
    out
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    layout: BoardLayout,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, layout: BoardLayout) -> Self {
        Self { out, layout }
    }

    pub fn draw(&mut self, agent: AgentState) -> io::Result<()> {
        writeln!(self.out, "{}", render_board(&self.layout, agent))?;
        writeln!(self.out, "Agent at {} facing {:?}", agent.pos, agent.dir)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn sync(&mut self, update: &MoveResult) {
        let agent = AgentState::new(update.position, update.direction);
        if let Err(err) = self.draw(agent) {
            log::error!("[Render] Failed to draw board: {}", err);
        }
    }

    fn announce(&mut self, outcome: GameOutcome) {
        if let Err(err) = writeln!(self.out, "{}", outcome.message()) {
            log::error!("[Render] Failed to announce outcome: {}", err);
        }
    }
}
