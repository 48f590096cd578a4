use thiserror::Error;

use crate::scoring::Category;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Game not found: {0}")]
    GameNotFound(String),

    #[error("Game already exists: {0}")]
    GameAlreadyExists(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Category {0} is not scored in this game")]
    CategoryDisabled(Category),

    #[error("Category {0} does not hold cards")]
    NoCards(Category),

    #[error("Unknown {category} card: {name}")]
    UnknownCard { category: Category, name: String },

    #[error("Action {action} does not apply to category {category}")]
    Unsupported {
        action: &'static str,
        category: Category,
    },
}
