//! The scoring engine: formulas, card catalogs, wonder stages and aggregation.
//!
//! Everything in here is synchronous and total. Rejected requests leave their
//! input unchanged instead of returning errors.

pub mod aggregate;
pub mod cards;
pub mod catalog;
pub mod category;
pub mod formulas;
pub mod stages;
pub mod state;
pub mod wonder;

pub use aggregate::{
    category_total_across_players, rank_and_find_winner, standings, total_score, PlayerTally,
    ScoreCard, Standing, Winner,
};
pub use cards::{AcquiredCard, CardCollection, CardId};
pub use catalog::{available_cards, find_entry, CardValue, CatalogEntry};
pub use category::{Category, Variant};
pub use formulas::{DebtTokens, MilitaryTokens, Score, ScienceSymbols};
pub use stages::toggle_stage;
pub use state::{CategoryState, CountInput, Counter};
pub use wonder::{WonderBoard, WonderSide};
