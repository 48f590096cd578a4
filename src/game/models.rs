use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

use super::errors::GameError;
use crate::scoring::{
    stages, total_score, Category, CategoryState, PlayerTally, Score, ScoreCard, Variant,
    WonderBoard, WonderSide,
};

pub const DEFAULT_TITLE: &str = "7 Wonders";

/// One wonder board at the table and the player scoring it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSlot {
    pub id: String,
    pub board: WonderBoard,
    pub side: WonderSide,
    pub name: String,
    /// Removed boards are left out of standings and results.
    pub active: bool,
    pub states: BTreeMap<Category, CategoryState>,
    /// Last computed score per category, refreshed after every mutation.
    pub scores: ScoreCard,
}

impl PlayerSlot {
    pub fn new(board: WonderBoard, variant: Variant) -> Self {
        let states = variant
            .categories()
            .iter()
            .map(|category| (*category, CategoryState::empty(*category)))
            .collect();
        let scores = variant
            .categories()
            .iter()
            .map(|category| (*category, 0))
            .collect();

        Self {
            id: board.to_string(),
            board,
            side: WonderSide::default(),
            name: String::new(),
            active: true,
            states,
            scores,
        }
    }

    /// Active and named.
    pub fn is_playing(&self) -> bool {
        self.active && !self.name.trim().is_empty()
    }

    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            self.board.display_name()
        } else {
            name
        }
    }

    pub fn stage_points(&self) -> &'static [Score] {
        self.board.stage_points(self.side)
    }

    pub fn total(&self) -> Score {
        total_score(&self.scores)
    }

    pub fn state(&self, category: Category) -> Result<&CategoryState, GameError> {
        self.states
            .get(&category)
            .ok_or(GameError::CategoryDisabled(category))
    }

    pub fn state_mut(&mut self, category: Category) -> Result<&mut CategoryState, GameError> {
        self.states
            .get_mut(&category)
            .ok_or(GameError::CategoryDisabled(category))
    }

    /// Recomputes the stored score for `category` from its current state.
    pub fn rescore(&mut self, category: Category) -> Score {
        let stage_points = self.stage_points();
        let score = self
            .states
            .get(&category)
            .map(|state| state.score(stage_points))
            .unwrap_or_default();
        self.scores.insert(category, score);
        score
    }

    /// Flips the board. The completed stage prefix is kept, cut to the new side's length.
    pub fn set_side(&mut self, side: WonderSide) {
        self.side = side;
        let stage_count = self.board.stage_count(side);
        if let Some(track) = self
            .states
            .get_mut(&Category::Wonder)
            .and_then(CategoryState::stages_mut)
        {
            *track = stages::fit_to(track, stage_count);
        }
        self.rescore(Category::Wonder);
    }

    /// Adds the board to the table or removes it. Either change starts a blank sheet.
    pub fn set_active(&mut self, active: bool, variant: Variant) {
        if self.active == active {
            return;
        }
        let blank = PlayerSlot::new(self.board, variant);
        self.states = blank.states;
        self.scores = blank.scores;
        self.active = active;
    }

    pub fn tally(&self) -> PlayerTally {
        PlayerTally {
            player_id: self.id.clone(),
            name: self.display_name().to_string(),
            scores: self.scores.clone(),
        }
    }
}

/// One scoring session: a title, a ruleset and a slot per wonder board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameModel {
    pub id: String, // Random pet name generated ID
    pub title: String,
    pub variant: Variant,
    pub created_at: DateTime<Utc>,
    pub players: Vec<PlayerSlot>,
}

impl GameModel {
    /// Creates a game with every board active and unnamed.
    pub fn new(title: Option<String>, variant: Variant) -> Self {
        let id = petname::Petnames::default().generate_one(2, "-");
        let title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        Self {
            id,
            title,
            variant,
            created_at: Utc::now(),
            players: WonderBoard::iter()
                .map(|board| PlayerSlot::new(board, variant))
                .collect(),
        }
    }

    pub fn player(&self, player_id: &str) -> Result<&PlayerSlot, GameError> {
        self.players
            .iter()
            .find(|p| p.id == player_id)
            .ok_or_else(|| GameError::PlayerNotFound(player_id.to_string()))
    }

    pub fn player_mut(&mut self, player_id: &str) -> Result<&mut PlayerSlot, GameError> {
        self.players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or_else(|| GameError::PlayerNotFound(player_id.to_string()))
    }

    /// Tallies for every board still at the table, in board order.
    pub fn active_tallies(&self) -> Vec<PlayerTally> {
        self.players
            .iter()
            .filter(|p| p.active)
            .map(PlayerSlot::tally)
            .collect()
    }

    /// Tallies for the boards someone is actually playing.
    pub fn playing_tallies(&self) -> Vec<PlayerTally> {
        self.players
            .iter()
            .filter(|p| p.is_playing())
            .map(PlayerSlot::tally)
            .collect()
    }

    pub fn removed_boards(&self) -> Vec<WonderBoard> {
        self.players
            .iter()
            .filter(|p| !p.active)
            .map(|p| p.board)
            .collect()
    }
}
