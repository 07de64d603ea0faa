// Demo module for the game. Provides the terminal game loop used by the
// `--standalone` mode of the binary.
pub mod game_loop;

pub use game_loop::run_standalone;
