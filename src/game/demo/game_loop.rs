//! Standalone game loop for local testing/demo.
//!
//! This module provides an interactive loop for playing the board in the terminal.

use std::io::{self, BufRead, Write};

use crate::game::grid::BoardLayout;
use crate::game::state::GameState;
use crate::game::systems::{TerminalRenderer, apply_move, dispatch};
use crate::game::types::{Direction, GameOutcome};

enum Command {
    Move(Direction),
    Quit,
    Unknown,
}

/// Decode one line of input: a direction name or letter, an arrow key escape, or `q`.
fn parse_command(line: &str) -> Command {
    match line.trim() {
        "\x1b[A" => Command::Move(Direction::North),
        "\x1b[B" => Command::Move(Direction::South),
        "\x1b[C" => Command::Move(Direction::East),
        "\x1b[D" => Command::Move(Direction::West),
        "q" | "quit" => Command::Quit,
        other => other.parse().map(Command::Move).unwrap_or(Command::Unknown),
    }
}

/// Play one game on `layout`, reading moves from `input` and drawing to `output`.
/// Returns the outcome when the game ends, the player quits, or input runs out.
pub fn run_game_loop<I: BufRead, W: Write>(
    input: I,
    output: W,
    layout: BoardLayout,
) -> io::Result<GameOutcome> {
    let mut state = GameState::new(layout.clone()).map_err(io::Error::other)?;
    let mut renderer = TerminalRenderer::new(output, layout);

    renderer.draw(state.current_agent())?;

    for line in input.lines() {
        let line = line?;
        let direction = match parse_command(&line) {
            Command::Move(direction) => direction,
            Command::Quit => break,
            Command::Unknown => {
                log::warn!("[Demo] Unrecognised input: {:?}", line);
                continue;
            }
        };

        let previous = state.outcome();
        let result = apply_move(&mut state, direction);
        dispatch(previous, &result, &mut renderer);

        if result.outcome.is_terminal() {
            break;
        }
    }

    Ok(state.outcome())
}

/// Run the demo on stdin/stdout with the classic board.
pub fn run_standalone() -> io::Result<()> {
    println!("Move with n/s/e/w (or arrow keys) then Enter, q to quit.");
    let stdin = io::stdin();
    let outcome = run_game_loop(stdin.lock(), io::stdout(), BoardLayout::classic())?;
    log::info!("[Demo] Session finished: {:?}", outcome);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(script: &str) -> (GameOutcome, String) {
        let mut out = Vec::new();
        let outcome = run_game_loop(script.as_bytes(), &mut out, BoardLayout::classic()).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn stops_on_wumpus() {
        let (outcome, text) = play("s\ne\ne\ns\nn\n");
        assert_eq!(outcome, GameOutcome::LostToWumpus);
        assert!(text.contains("Wumpus got you! Game Over."));
        // Input after the end is never applied.
        assert!(!text.contains("facing North"));
    }

    #[test]
    fn accepts_arrow_keys_and_names() {
        let (outcome, text) = play("\x1b[B\nSouth\nS\nE\nE\nEast\n");
        assert_eq!(outcome, GameOutcome::Won);
        assert!(text.contains("You found the gold! You win!"));
    }

    #[test]
    fn skips_garbage_and_quits() {
        let (outcome, text) = play("jump\nq\ne\n");
        assert_eq!(outcome, GameOutcome::InProgress);
        assert_eq!(text.matches("Agent at").count(), 1);
    }
}
