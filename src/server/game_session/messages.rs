use actix::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::state::GameState;
use crate::game::types::{Direction, GameOutcome, MoveResult};

/// Client -> server WebSocket messages.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "action", content = "data")]
pub enum ClientWsMessage {
    Move(Direction),
    Ping,
}

/// Server -> client WebSocket messages.
#[derive(Message, Serialize, Deserialize, Clone, Debug)]
#[rtype(result = "()")]
#[serde(tag = "action", content = "data")]
pub enum ServerWsMessage {
    Snapshot(GameSnapshot),
    MoveUpdate(MoveResult),
    GameEnded {
        outcome: GameOutcome,
        message: String,
    },
    Error {
        code: String,
        message: String,
        context: String,
    },
}

impl ServerWsMessage {
    pub fn game_ended(outcome: GameOutcome) -> Self {
        Self::GameEnded {
            outcome,
            message: outcome.message().to_string(),
        }
    }

    pub fn error(code: &str, message: &str, context: Option<&str>) -> Self {
        Self::Error {
            code: code.to_string(),
            message: message.to_string(),
            context: context.unwrap_or("").to_string(),
        }
    }
}

/// Full view of one game, sent on connect and returned by the HTTP API.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GameSnapshot {
    pub game_id: Uuid,
    pub state: GameState,
}

/// Apply one move to a session. Moves are handled one at a time by the session actor.
#[derive(Message)]
#[rtype(result = "MoveResult")]
pub struct ProcessMove {
    pub direction: Direction,
}

#[derive(Message)]
#[rtype(result = "GameSnapshot")]
pub struct GetSnapshot;

/// Subscribe a socket to a session's move updates.
#[derive(Message)]
#[rtype(result = "()")]
pub struct RegisterSocket {
    pub socket_id: Uuid,
    pub addr: Recipient<ServerWsMessage>,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct UnregisterSocket {
    pub socket_id: Uuid,
}

/// Sent by a session to the manager when it stops.
#[derive(Message)]
#[rtype(result = "()")]
pub struct SessionClosed {
    pub game_id: Uuid,
}
