//! Centralized error responses for the HTTP API.
//!
//! Every error body has the same shape: a code, a human-readable message and
//! an optional context (usually the game id).

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use uuid::Uuid;

use crate::game::error::GameError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("game session {0} not found")]
    NotFound(Uuid),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("game session unavailable: {0}")]
    Mailbox(#[from] actix::MailboxError),
}

impl SessionError {
    pub fn code(&self) -> &'static str {
        match self {
            SessionError::NotFound(_) => "GAME_NOT_FOUND",
            SessionError::Game(err) => err.code(),
            SessionError::Mailbox(_) => "SESSION_UNAVAILABLE",
        }
    }
}

/// Returns an HTTP error response with a JSON body.
///
/// # Arguments
/// - `code`: Unique error code.
/// - `message`: Human-readable error message.
/// - `context`: Optional context string.
/// - `status`: HTTP status code.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    HttpResponse::build(status).json(json!({
        "error": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(""),
        }
    }))
}

impl ResponseError for SessionError {
    fn status_code(&self) -> StatusCode {
        match self {
            SessionError::NotFound(_) => StatusCode::NOT_FOUND,
            SessionError::Game(GameError::IllegalState(_)) => StatusCode::CONFLICT,
            SessionError::Game(_) => StatusCode::BAD_REQUEST,
            SessionError::Mailbox(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let SessionError::Mailbox(e) = self {
            log::error!("[Server] Actor mailbox failure: {}", e);
        }
        let context = match self {
            SessionError::NotFound(game_id) => Some(game_id.to_string()),
            _ => None,
        };
        http_error_response(
            self.code(),
            &self.to_string(),
            context.as_deref(),
            self.status_code(),
        )
    }
}
