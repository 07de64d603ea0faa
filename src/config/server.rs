/// Server configuration constants.
///
/// This module defines where the HTTP/WebSocket server listens and how long
/// unattended game sessions are kept alive.
pub const BIND_HOST: &str = "127.0.0.1";

/// TCP port of the HTTP/WebSocket server.
pub const BIND_PORT: u16 = 8080;

/// Time (in seconds) a session with no connected socket survives after its last move.
pub const SESSION_IDLE_TIMEOUT: u64 = 600;

/// Time (in seconds) between two idle checks of a session.
pub const SESSION_REAP_INTERVAL: u64 = 30;
