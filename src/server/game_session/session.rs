//! WebSocket session handler for a single game.
//!
//! This actor manages one client connection to a game session. It forwards
//! directional intents to the session actor and serializes every update the
//! session pushes back (snapshot on connect, move updates, the final outcome).

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{debug, error, warn};
use uuid::Uuid;

use super::messages::{ClientWsMessage, ProcessMove, RegisterSocket, ServerWsMessage, UnregisterSocket};
use super::server::{GameSession, GetGameSession};
use crate::server::state::AppState;

pub struct GameSocket {
    pub game_id: Uuid,
    pub socket_id: Uuid,
    pub session_addr: Addr<GameSession>,
}

impl Actor for GameSocket {
    type Context = ws::WebsocketContext<Self>;

    /// Subscribes to the game; the session answers with a snapshot.
    fn started(&mut self, ctx: &mut Self::Context) {
        self.session_addr.do_send(RegisterSocket {
            socket_id: self.socket_id,
            addr: ctx.address().recipient(),
        });
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.session_addr.do_send(UnregisterSocket {
            socket_id: self.socket_id,
        });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for GameSocket {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => match serde_json::from_str::<ClientWsMessage>(&text) {
                Ok(ClientWsMessage::Move(direction)) => {
                    // The update reaches this socket through the session broadcast.
                    self.session_addr.do_send(ProcessMove { direction });
                }
                Ok(ClientWsMessage::Ping) => {}
                Err(e) => {
                    warn!("[GameSocket] Invalid client message on game {}: {}", self.game_id, e);
                    let reply = ServerWsMessage::error(
                        "INVALID_ACTION",
                        "Expected {\"action\":\"Move\",\"data\":<direction>}",
                        Some(&self.game_id.to_string()),
                    );
                    self.send(reply, ctx);
                }
            },
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                warn!("[GameSocket] Protocol error on game {}: {}", self.game_id, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

impl GameSocket {
    fn send(&self, msg: ServerWsMessage, ctx: &mut ws::WebsocketContext<Self>) {
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                error!("[GameSocket] Failed to serialize ServerWsMessage: {}", e);
                ctx.close(Some(ws::CloseReason {
                    code: ws::CloseCode::Error,
                    description: Some("Internal server error".into()),
                }));
                ctx.stop();
            }
        }
    }
}

impl Handler<ServerWsMessage> for GameSocket {
    type Result = ();

    fn handle(&mut self, msg: ServerWsMessage, ctx: &mut Self::Context) {
        debug!("[GameSocket] -> {}: {:?}", self.socket_id, msg);
        self.send(msg, ctx);
    }
}

/// WebSocket endpoint for a game: `/ws/game/{game_id}`.
pub async fn ws_game(
    req: HttpRequest,
    stream: web::Payload,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let game_id = path.into_inner();
    let session_addr = data
        .game_session_manager
        .send(GetGameSession { game_id })
        .await
        .map_err(crate::server::error::SessionError::from)??;

    ws::start(
        GameSocket {
            game_id,
            socket_id: Uuid::new_v4(),
            session_addr,
        },
        &req,
        stream,
    )
}
