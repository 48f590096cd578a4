// Public API
pub use actions::{ActionOutcome, ScoreAction, StepDirection};
pub use errors::GameError;
pub use handlers::router;
pub use models::{GameModel, PlayerSlot, DEFAULT_TITLE};
pub use repository::{GameRepository, InMemoryGameRepository};
pub use service::GameService;
pub use summary::render_summary;
pub use types::{
    ActionResponse, CatalogResponse, CreateGameRequest, GameResponse, PlayerResponse,
    PlayerUpdateRequest, ResultsResponse,
};

// Internal modules
mod actions;
mod errors;
mod handlers;
mod models;
mod repository;
mod service;
mod summary;
mod types;
