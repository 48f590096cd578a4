// Library crate for the 7 Wonders score pad
// This file exposes the public API for the server binary and integration tests

pub mod config;
pub mod game;
pub mod scoring;
pub mod shared;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// Re-export commonly used types for easier access in tests
pub use config::{ConfigError, ServerConfig};
pub use game::{GameError, GameModel, GameRepository, InMemoryGameRepository};
pub use shared::{AppError, AppState};

/// Builds the full HTTP application around `state`
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(game::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
