pub mod server;
pub mod session;
pub mod messages;

pub use server::GameSession;
