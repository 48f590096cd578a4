use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    actions::ScoreAction,
    service::GameService,
    types::{
        ActionResponse, CatalogResponse, CreateGameRequest, GameResponse, PlayerResponse,
        PlayerUpdateRequest, ResultsResponse,
    },
};
use crate::scoring::{catalog::catalog, Category, Standing};
use crate::shared::{AppError, AppState};

fn service(state: &AppState) -> GameService {
    GameService::new(Arc::clone(&state.game_repository))
}

/// Routes for games, player sheets and the card catalog
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalog/:category", get(get_catalog))
        .route("/games", post(create_game))
        .route("/games/:game_id", get(get_game).delete(discard_game))
        .route("/games/:game_id/players/:player_id", patch(update_player))
        .route(
            "/games/:game_id/players/:player_id/actions",
            post(apply_action),
        )
        .route(
            "/games/:game_id/players/:player_id/available/:category",
            get(available_cards),
        )
        .route("/games/:game_id/standings", get(get_standings))
        .route("/games/:game_id/results", get(get_results))
        .route("/games/:game_id/summary", get(get_summary))
}

/// GET /catalog/:category
/// Returns every catalog card of a card category
#[instrument(name = "get_catalog")]
pub async fn get_catalog(
    Path(category): Path<Category>,
) -> Result<Json<CatalogResponse>, AppError> {
    if !category.holds_cards() {
        return Err(AppError::BadRequest(format!(
            "{} is not scored with cards",
            category.label()
        )));
    }

    Ok(Json(CatalogResponse {
        category,
        cards: catalog(category).iter().collect(),
    }))
}

/// POST /games
/// Starts a new game with every board at the table
#[instrument(name = "create_game", skip(state))]
pub async fn create_game(
    State(state): State<AppState>,
    Json(request): Json<CreateGameRequest>,
) -> Result<(StatusCode, Json<GameResponse>), AppError> {
    info!(title = ?request.title, "Creating new game");

    let game = service(&state).create_game(request).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

#[instrument(name = "get_game", skip(state))]
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<GameResponse>, AppError> {
    Ok(Json(service(&state).get_game(&game_id).await?))
}

#[instrument(name = "discard_game", skip(state))]
pub async fn discard_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<StatusCode, AppError> {
    service(&state).discard_game(&game_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /games/:game_id/players/:player_id
/// Renames a player, flips their board or removes it from the table
#[instrument(name = "update_player", skip(state))]
pub async fn update_player(
    State(state): State<AppState>,
    Path((game_id, player_id)): Path<(String, String)>,
    Json(request): Json<PlayerUpdateRequest>,
) -> Result<Json<PlayerResponse>, AppError> {
    let player = service(&state)
        .update_player(&game_id, &player_id, request)
        .await?;
    Ok(Json(player))
}

/// POST /games/:game_id/players/:player_id/actions
/// Applies one score edit and returns the refreshed sheet
#[instrument(name = "apply_action", skip(state))]
pub async fn apply_action(
    State(state): State<AppState>,
    Path((game_id, player_id)): Path<(String, String)>,
    Json(action): Json<ScoreAction>,
) -> Result<Json<ActionResponse>, AppError> {
    let response = service(&state)
        .apply_action(&game_id, &player_id, action)
        .await?;
    Ok(Json(response))
}

#[instrument(name = "available_cards", skip(state))]
pub async fn available_cards(
    State(state): State<AppState>,
    Path((game_id, player_id, category)): Path<(String, String, Category)>,
) -> Result<Json<CatalogResponse>, AppError> {
    let response = service(&state)
        .available_cards(&game_id, &player_id, category)
        .await?;
    Ok(Json(response))
}

#[instrument(name = "get_standings", skip(state))]
pub async fn get_standings(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<Vec<Standing>>, AppError> {
    Ok(Json(service(&state).standings(&game_id).await?))
}

#[instrument(name = "get_results", skip(state))]
pub async fn get_results(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<ResultsResponse>, AppError> {
    Ok(Json(service(&state).results(&game_id).await?))
}

/// GET /games/:game_id/summary
/// Plain-text summary for sharing
#[instrument(name = "get_summary", skip(state))]
pub async fn get_summary(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<String, AppError> {
    service(&state).summary(&game_id).await
}
