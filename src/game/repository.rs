use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::errors::GameError;
use super::models::GameModel;

/// Trait for game storage operations
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn create_game(&self, game: &GameModel) -> Result<(), GameError>;
    async fn get_game(&self, game_id: &str) -> Result<Option<GameModel>, GameError>;
    async fn update_game(&self, game: &GameModel) -> Result<(), GameError>;
    /// Returns whether a game was removed.
    async fn delete_game(&self, game_id: &str) -> Result<bool, GameError>;
}

/// In-memory game storage. Games live as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryGameRepository {
    games: Arc<RwLock<HashMap<String, GameModel>>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self {
            games: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    #[instrument(skip(self, game), fields(game_id = %game.id))]
    async fn create_game(&self, game: &GameModel) -> Result<(), GameError> {
        let mut games = self.games.write().await;
        if games.contains_key(&game.id) {
            warn!("Game already exists in memory");
            return Err(GameError::GameAlreadyExists(game.id.clone()));
        }
        games.insert(game.id.clone(), game.clone());

        debug!("Game created in memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_game(&self, game_id: &str) -> Result<Option<GameModel>, GameError> {
        let games = self.games.read().await;
        let game = games.get(game_id).cloned();

        if game.is_none() {
            debug!("Game not found in memory");
        }
        Ok(game)
    }

    #[instrument(skip(self, game), fields(game_id = %game.id))]
    async fn update_game(&self, game: &GameModel) -> Result<(), GameError> {
        let mut games = self.games.write().await;
        match games.get_mut(&game.id) {
            Some(stored) => {
                *stored = game.clone();
                Ok(())
            }
            None => Err(GameError::GameNotFound(game.id.clone())),
        }
    }

    #[instrument(skip(self))]
    async fn delete_game(&self, game_id: &str) -> Result<bool, GameError> {
        let mut games = self.games.write().await;
        let removed = games.remove(game_id).is_some();

        debug!(removed, "Game deleted from memory");
        Ok(removed)
    }
}
