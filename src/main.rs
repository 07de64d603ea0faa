//! Main entry point for the backend server.
//!
//! Initializes the actor system and launches the HTTP server with the game
//! API and WebSocket endpoints. With `--standalone`, plays the classic board
//! in the terminal instead.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use log::info;
use server::game_session::server::GameSessionManager;

mod config;
mod server;
mod game;

use config::server::{BIND_HOST, BIND_PORT};

fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if std::env::args().skip(1).any(|arg| arg == "--standalone") {
        return game::demo::run_standalone();
    }
    serve()
}

#[actix_web::main]
async fn serve() -> std::io::Result<()> {
    // Start the GameSessionManager actor (creates and indexes all game sessions).
    let game_session_manager = GameSessionManager::new().start();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(game_session_manager));

    info!("[Server] Listening on {}:{}", BIND_HOST, BIND_PORT);
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .wrap(actix_web::middleware::Logger::default())
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((BIND_HOST, BIND_PORT))?
    .run()
    .await
}
