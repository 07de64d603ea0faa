/// Main configuration module.
///
/// Re-exports submodules for board and server configuration.
pub mod game;
pub mod server;
