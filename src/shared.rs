use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::game::{GameError, GameRepository};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub game_repository: Arc<dyn GameRepository>,
}

impl AppState {
    pub fn new(game_repository: Arc<dyn GameRepository>) -> Self {
        Self { game_repository }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<GameError> for AppError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::GameNotFound(_) | GameError::PlayerNotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            GameError::GameAlreadyExists(_) => AppError::Internal(err.to_string()),
            GameError::CategoryDisabled(_)
            | GameError::NoCards(_)
            | GameError::UnknownCard { .. }
            | GameError::Unsupported { .. } => AppError::BadRequest(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
