//! HTTP handlers for game creation, inspection and moves.
//!
//! These mirror the WebSocket flow for clients that prefer plain requests:
//! each handler forwards to the session actor and returns its answer as JSON.

use actix_web::{HttpResponse, web};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use uuid::Uuid;

use crate::config::game::{GRID_SIZE, RANDOM_PIT_COUNT};
use crate::game::entities::random_layout;
use crate::game::error::GameError;
use crate::game::grid::BoardLayout;
use crate::game::types::Direction;
use crate::server::error::SessionError;
use crate::server::game_session::messages::{GetSnapshot, ProcessMove};
use crate::server::game_session::server::{CreateGame, GetGameSession};
use crate::server::state::AppState;

fn default_grid_size() -> usize {
    GRID_SIZE
}

fn default_pit_count() -> usize {
    RANDOM_PIT_COUNT
}

/// Body of `POST /games`. An empty body starts the classic board.
#[derive(Deserialize, Debug, Default)]
#[serde(tag = "layout", rename_all = "lowercase")]
pub enum NewGameRequest {
    #[default]
    Classic,
    Random {
        #[serde(default = "default_grid_size")]
        grid_size: usize,
        #[serde(default = "default_pit_count")]
        pits: usize,
        seed: Option<u64>,
    },
    Custom {
        board: BoardLayout,
    },
}

impl NewGameRequest {
    pub fn into_layout(self) -> Result<BoardLayout, GameError> {
        match self {
            NewGameRequest::Classic => Ok(BoardLayout::classic()),
            NewGameRequest::Random {
                grid_size,
                pits,
                seed,
            } => match seed {
                Some(seed) => random_layout(grid_size, pits, &mut StdRng::seed_from_u64(seed)),
                None => random_layout(grid_size, pits, &mut rand::rng()),
            },
            NewGameRequest::Custom { board } => Ok(board),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct MoveRequest {
    pub direction: Direction,
}

/// `POST /games`
pub async fn create_game(
    body: Option<web::Json<NewGameRequest>>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, SessionError> {
    let request = body.map(web::Json::into_inner).unwrap_or_default();
    let layout = request.into_layout()?;
    let snapshot = data
        .game_session_manager
        .send(CreateGame { layout })
        .await??;
    Ok(HttpResponse::Created().json(snapshot))
}

/// `GET /games/{game_id}`
pub async fn get_game(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, SessionError> {
    let game_id = path.into_inner();
    let session = data
        .game_session_manager
        .send(GetGameSession { game_id })
        .await??;
    let snapshot = session.send(GetSnapshot).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

/// `POST /games/{game_id}/move`
pub async fn move_agent(
    path: web::Path<Uuid>,
    body: web::Json<MoveRequest>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, SessionError> {
    let game_id = path.into_inner();
    let session = data
        .game_session_manager
        .send(GetGameSession { game_id })
        .await??;
    let result = session
        .send(ProcessMove {
            direction: body.direction,
        })
        .await?;
    Ok(HttpResponse::Ok().json(result))
}
