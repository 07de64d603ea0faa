use actix::prelude::*;
use actix::MessageResult;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use uuid::Uuid;
use log::{debug, info, warn};

use crate::config::server::{SESSION_IDLE_TIMEOUT, SESSION_REAP_INTERVAL};
use crate::game::error::GameError;
use crate::game::grid::BoardLayout;
use crate::game::state::GameState;
use crate::game::systems::{Renderer, apply_move, dispatch};
use crate::game::types::{GameOutcome, MoveResult};
use crate::server::error::SessionError;
use crate::server::game_session::messages::{
    GameSnapshot, GetSnapshot, ProcessMove, RegisterSocket, ServerWsMessage, SessionClosed,
    UnregisterSocket,
};

/// One game: owns its board exclusively and applies moves in mailbox order.
pub struct GameSession {
    pub game_id: Uuid,
    game_state: GameState,
    sockets: HashMap<Uuid, Recipient<ServerWsMessage>>,
    manager: Addr<GameSessionManager>,
    last_activity: Instant,
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        ctx.run_interval(Duration::from_secs(SESSION_REAP_INTERVAL), |act, ctx| {
            if act.is_idle() {
                info!("[GameSession] Closing idle game {}", act.game_id);
                ctx.stop();
            }
        });
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.manager.do_send(SessionClosed { game_id: self.game_id });
    }
}

/// Pushes committed moves to every socket watching the game.
struct SocketBroadcast<'a> {
    sockets: &'a HashMap<Uuid, Recipient<ServerWsMessage>>,
}

impl Renderer for SocketBroadcast<'_> {
    fn sync(&mut self, update: &MoveResult) {
        for addr in self.sockets.values() {
            addr.do_send(ServerWsMessage::MoveUpdate(*update));
        }
    }

    fn announce(&mut self, outcome: GameOutcome) {
        for addr in self.sockets.values() {
            addr.do_send(ServerWsMessage::game_ended(outcome));
        }
    }
}

impl GameSession {
    fn new(game_id: Uuid, game_state: GameState, manager: Addr<GameSessionManager>) -> Self {
        Self {
            game_id,
            game_state,
            sockets: HashMap::new(),
            manager,
            last_activity: Instant::now(),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            game_id: self.game_id,
            state: self.game_state.clone(),
        }
    }

    fn is_idle(&self) -> bool {
        self.sockets.is_empty()
            && self.last_activity.elapsed() >= Duration::from_secs(SESSION_IDLE_TIMEOUT)
    }
}

impl Handler<ProcessMove> for GameSession {
    type Result = MessageResult<ProcessMove>;

    fn handle(&mut self, msg: ProcessMove, _: &mut Context<Self>) -> Self::Result {
        self.last_activity = Instant::now();
        let previous = self.game_state.outcome();
        let result = apply_move(&mut self.game_state, msg.direction);

        if previous.is_terminal() {
            warn!(
                "[GameSession] Move {:?} on finished game {} ignored",
                msg.direction, self.game_id
            );
            return MessageResult(result);
        }

        debug!(
            "[GameSession] Broadcast move: game_id={} sockets={} result={:?}",
            self.game_id,
            self.sockets.len(),
            result
        );
        dispatch(previous, &result, &mut SocketBroadcast { sockets: &self.sockets });
        if result.outcome.is_terminal() {
            info!("[GameSession] Game {} ended: {:?}", self.game_id, result.outcome);
        }
        MessageResult(result)
    }
}

impl Handler<GetSnapshot> for GameSession {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.snapshot())
    }
}

impl Handler<RegisterSocket> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: RegisterSocket, _: &mut Context<Self>) -> Self::Result {
        msg.addr.do_send(ServerWsMessage::Snapshot(self.snapshot()));
        if self.game_state.outcome().is_terminal() {
            msg.addr.do_send(ServerWsMessage::game_ended(self.game_state.outcome()));
        }
        self.sockets.insert(msg.socket_id, msg.addr);
        debug!("[GameSession] Socket {} joined game {}", msg.socket_id, self.game_id);
    }
}

impl Handler<UnregisterSocket> for GameSession {
    type Result = ();

    fn handle(&mut self, msg: UnregisterSocket, _: &mut Context<Self>) -> Self::Result {
        self.sockets.remove(&msg.socket_id);
        self.last_activity = Instant::now();
        debug!("[GameSession] Socket {} left game {}", msg.socket_id, self.game_id);
    }
}

/// Index of live game sessions.
pub struct GameSessionManager {
    sessions: HashMap<Uuid, Addr<GameSession>>,
}

/// Start a game on `layout`. Hosted boards must be fully valid, overlaps included.
#[derive(Message)]
#[rtype(result = "Result<GameSnapshot, GameError>")]
pub struct CreateGame {
    pub layout: BoardLayout,
}

#[derive(Message)]
#[rtype(result = "Result<Addr<GameSession>, SessionError>")]
pub struct GetGameSession {
    pub game_id: Uuid,
}

impl GameSessionManager {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    pub fn create_game(
        &mut self,
        layout: BoardLayout,
        ctx: &mut Context<Self>,
    ) -> Result<GameSnapshot, GameError> {
        layout.validate()?;
        let game_state = GameState::new(layout)?;
        let game_id = Uuid::new_v4();

        let session = GameSession::new(game_id, game_state, ctx.address());
        let snapshot = session.snapshot();
        self.sessions.insert(game_id, session.start());

        info!(
            "[GameSessionManager] Created game {} ({} live)",
            game_id,
            self.sessions.len()
        );
        Ok(snapshot)
    }
}

impl Default for GameSessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for GameSessionManager {
    type Context = Context<Self>;
}

impl Handler<CreateGame> for GameSessionManager {
    type Result = Result<GameSnapshot, GameError>;

    fn handle(&mut self, msg: CreateGame, ctx: &mut Context<Self>) -> Self::Result {
        self.create_game(msg.layout, ctx)
    }
}

impl Handler<GetGameSession> for GameSessionManager {
    type Result = Result<Addr<GameSession>, SessionError>;

    fn handle(&mut self, msg: GetGameSession, _: &mut Context<Self>) -> Self::Result {
        self.sessions
            .get(&msg.game_id)
            .cloned()
            .ok_or(SessionError::NotFound(msg.game_id))
    }
}

impl Handler<SessionClosed> for GameSessionManager {
    type Result = ();

    fn handle(&mut self, msg: SessionClosed, _: &mut Context<Self>) -> Self::Result {
        if self.sessions.remove(&msg.game_id).is_some() {
            info!(
                "[GameSessionManager] Removed game {} ({} live)",
                msg.game_id,
                self.sessions.len()
            );
        }
    }
}
