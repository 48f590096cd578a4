use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    actions::ScoreAction,
    errors::GameError,
    models::GameModel,
    repository::GameRepository,
    summary::render_summary,
    types::{
        ActionResponse, CatalogResponse, CreateGameRequest, GameResponse, PlayerResponse,
        PlayerUpdateRequest, ResultsResponse,
    },
};
use crate::scoring::{
    available_cards, category_total_across_players, rank_and_find_winner, standings, Category,
    Standing,
};
use crate::shared::AppError;

/// Service for handling game and score sheet logic
pub struct GameService {
    repository: Arc<dyn GameRepository>,
}

impl GameService {
    pub fn new(repository: Arc<dyn GameRepository>) -> Self {
        Self { repository }
    }

    async fn load(&self, game_id: &str) -> Result<GameModel, AppError> {
        self.repository
            .get_game(game_id)
            .await?
            .ok_or_else(|| GameError::GameNotFound(game_id.to_string()).into())
    }

    /// Starts a new game with every board at the table
    #[instrument(skip(self))]
    pub async fn create_game(&self, request: CreateGameRequest) -> Result<GameResponse, AppError> {
        let game = GameModel::new(request.title, request.variant.unwrap_or_default());
        debug!(game_id = %game.id, "Generated game ID");

        self.repository.create_game(&game).await?;

        info!(
            game_id = %game.id,
            title = %game.title,
            variant = ?game.variant,
            "Game created successfully"
        );
        Ok(GameResponse::from(&game))
    }

    #[instrument(skip(self))]
    pub async fn get_game(&self, game_id: &str) -> Result<GameResponse, AppError> {
        let game = self.load(game_id).await?;
        Ok(GameResponse::from(&game))
    }

    /// Throws a game away. Starting over is just creating another one.
    #[instrument(skip(self))]
    pub async fn discard_game(&self, game_id: &str) -> Result<(), AppError> {
        if !self.repository.delete_game(game_id).await? {
            warn!("Tried to discard a missing game");
            return Err(GameError::GameNotFound(game_id.to_string()).into());
        }

        info!(game_id = %game_id, "Game discarded");
        Ok(())
    }

    /// Renames, flips or removes a board
    #[instrument(skip(self))]
    pub async fn update_player(
        &self,
        game_id: &str,
        player_id: &str,
        request: PlayerUpdateRequest,
    ) -> Result<PlayerResponse, AppError> {
        let mut game = self.load(game_id).await?;
        let variant = game.variant;
        let player = game.player_mut(player_id)?;

        if let Some(name) = request.name {
            player.name = name;
        }
        if let Some(side) = request.side {
            if side != player.side {
                debug!(?side, "Flipping wonder board");
                player.set_side(side);
            }
        }
        if let Some(active) = request.active {
            player.set_active(active, variant);
        }
        let response = PlayerResponse::from(&*player);

        self.repository.update_game(&game).await?;
        info!(
            game_id = %game_id,
            player_id = %player_id,
            active = response.active,
            "Player updated"
        );
        Ok(response)
    }

    #[instrument(skip(self))]
    pub async fn apply_action(
        &self,
        game_id: &str,
        player_id: &str,
        action: ScoreAction,
    ) -> Result<ActionResponse, AppError> {
        let mut game = self.load(game_id).await?;
        let player = game.player_mut(player_id)?;

        let outcome = player.apply(&action)?;
        let response = ActionResponse {
            outcome,
            player: PlayerResponse::from(&*player),
        };

        self.repository.update_game(&game).await?;
        debug!(?outcome, total = response.player.total, "Action applied");
        Ok(response)
    }

    /// Catalog cards of `category` the player does not hold yet
    #[instrument(skip(self))]
    pub async fn available_cards(
        &self,
        game_id: &str,
        player_id: &str,
        category: Category,
    ) -> Result<CatalogResponse, AppError> {
        let game = self.load(game_id).await?;
        let player = game.player(player_id)?;
        let held = player
            .state(category)?
            .cards()
            .ok_or(GameError::NoCards(category))?
            .held_names();

        Ok(CatalogResponse {
            category,
            cards: available_cards(category, &held),
        })
    }

    /// Live ranking of every board still at the table
    #[instrument(skip(self))]
    pub async fn standings(&self, game_id: &str) -> Result<Vec<Standing>, AppError> {
        let game = self.load(game_id).await?;
        Ok(standings(&game.active_tallies()))
    }

    /// Final results over the named players
    #[instrument(skip(self))]
    pub async fn results(&self, game_id: &str) -> Result<ResultsResponse, AppError> {
        let game = self.load(game_id).await?;
        let tallies = game.playing_tallies();

        let winner = rank_and_find_winner(&tallies);
        let category_totals = game
            .variant
            .categories()
            .iter()
            .map(|category| {
                (
                    *category,
                    category_total_across_players(&tallies, *category),
                )
            })
            .collect();

        if let Some(winner) = &winner {
            info!(
                game_id = %game_id,
                winner = %winner.name,
                score = winner.score,
                "Results computed"
            );
        }

        Ok(ResultsResponse {
            standings: standings(&tallies),
            winner,
            category_totals,
        })
    }

    #[instrument(skip(self))]
    pub async fn summary(&self, game_id: &str) -> Result<String, AppError> {
        let game = self.load(game_id).await?;
        Ok(render_summary(&game))
    }
}
