use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::actions::ActionOutcome;
use super::models::{GameModel, PlayerSlot};
use crate::scoring::{
    CatalogEntry, Category, CategoryState, Score, ScoreCard, Standing, Variant, Winner,
    WonderBoard, WonderSide,
};

/// Request payload for starting a new game
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CreateGameRequest {
    pub title: Option<String>,
    pub variant: Option<Variant>,
}

/// Request payload for editing a player slot. Absent fields are left as they are.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlayerUpdateRequest {
    pub name: Option<String>,
    pub side: Option<WonderSide>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerResponse {
    pub id: String,
    pub board: WonderBoard,
    pub wonder: String,
    pub side: WonderSide,
    pub name: String,
    pub active: bool,
    pub playing: bool,
    pub stage_points: Vec<Score>,
    pub states: BTreeMap<Category, CategoryState>,
    pub scores: ScoreCard,
    pub total: Score,
}

impl From<&PlayerSlot> for PlayerResponse {
    fn from(slot: &PlayerSlot) -> Self {
        Self {
            id: slot.id.clone(),
            board: slot.board,
            wonder: slot.board.wonder_name().to_string(),
            side: slot.side,
            name: slot.name.clone(),
            active: slot.active,
            playing: slot.is_playing(),
            stage_points: slot.stage_points().to_vec(),
            states: slot.states.clone(),
            scores: slot.scores.clone(),
            total: slot.total(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResponse {
    pub id: String,
    pub title: String,
    pub variant: Variant,
    pub created_at: DateTime<Utc>,
    pub players: Vec<PlayerResponse>,
    pub removed_boards: Vec<WonderBoard>,
}

impl From<&GameModel> for GameResponse {
    fn from(game: &GameModel) -> Self {
        Self {
            id: game.id.clone(),
            title: game.title.clone(),
            variant: game.variant,
            created_at: game.created_at,
            players: game.players.iter().map(PlayerResponse::from).collect(),
            removed_boards: game.removed_boards(),
        }
    }
}

/// Response for a score action: the outcome and the player's refreshed sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub outcome: ActionOutcome,
    pub player: PlayerResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub category: Category,
    pub cards: Vec<&'static CatalogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsResponse {
    pub standings: Vec<Standing>,
    pub winner: Option<Winner>,
    pub category_totals: BTreeMap<Category, Score>,
}
