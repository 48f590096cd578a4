use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::catalog::{CardValue, CatalogEntry};
use super::formulas::Score;

/// Identity of one acquired card, independent of the catalog entry it came from.
pub type CardId = Uuid;

/// A card owned by a player in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquiredCard {
    pub id: CardId,
    /// Catalog name. `None` for free-form culture cards.
    pub name: Option<String>,
    pub description: Option<String>,
    pub score: Score,
    pub step: Score,
    pub max_score: Option<Score>,
    /// Fixed-value cards keep the points they were added with.
    pub editable: bool,
}

impl AcquiredCard {
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        let (score, step, max_score, editable) = match entry.value {
            CardValue::Variable { step, max_score } => (0, step, max_score, true),
            CardValue::Fixed { points } => (points, 1, None, false),
        };

        Self {
            id: Uuid::new_v4(),
            name: Some(entry.name.to_string()),
            description: Some(entry.description.to_string()),
            score,
            step,
            max_score,
            editable,
        }
    }

    pub fn free_form() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: None,
            description: None,
            score: 0,
            step: 1,
            max_score: None,
            editable: true,
        }
    }

    fn clamp(&self, score: Score) -> Score {
        score.clamp(0, self.max_score.unwrap_or(Score::MAX))
    }
}

/// An ordered collection of acquired cards.
///
/// Catalog cards are unique by name within a collection; free-form cards
/// have no name and are unlimited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCollection {
    cards: Vec<AcquiredCard>,
}

impl CardCollection {
    pub fn cards(&self) -> &[AcquiredCard] {
        &self.cards
    }

    pub fn held_names(&self) -> Vec<&str> {
        self.cards
            .iter()
            .filter_map(|card| card.name.as_deref())
            .collect()
    }

    pub fn holds(&self, name: &str) -> bool {
        self.cards
            .iter()
            .any(|card| card.name.as_deref() == Some(name))
    }

    pub fn get(&self, id: CardId) -> Option<&AcquiredCard> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Appends a card for `entry`. Returns `None` without changing anything
    /// if a card with that name is already held.
    pub fn add_card(&mut self, entry: &CatalogEntry) -> Option<CardId> {
        if self.holds(entry.name) {
            return None;
        }

        let card = AcquiredCard::from_entry(entry);
        let id = card.id;
        self.cards.push(card);
        Some(id)
    }

    pub fn add_free_form(&mut self) -> CardId {
        let card = AcquiredCard::free_form();
        let id = card.id;
        self.cards.push(card);
        id
    }

    /// Removes the card with `id`. Unknown ids are ignored.
    pub fn remove_card(&mut self, id: CardId) -> bool {
        let before = self.cards.len();
        self.cards.retain(|card| card.id != id);
        self.cards.len() != before
    }

    /// Applies `delta` to an editable card, clamped to `[0, max_score]`.
    /// Returns the card's new score, or `None` if no editable card has `id`.
    pub fn adjust_card_score(&mut self, id: CardId, delta: Score) -> Option<Score> {
        let card = self
            .cards
            .iter_mut()
            .find(|card| card.id == id && card.editable)?;
        card.score = card.clamp(card.score.saturating_add(delta));
        Some(card.score)
    }

    /// Moves an editable card one `step` up (`increment`) or down.
    pub fn step_card(&mut self, id: CardId, increment: bool) -> Option<Score> {
        let step = self.get(id)?.step;
        let delta = if increment { step } else { -step };
        self.adjust_card_score(id, delta)
    }

    /// Overwrites an editable card's score, clamped to `[0, max_score]`.
    pub fn set_card_score(&mut self, id: CardId, score: Score) -> Option<Score> {
        let card = self
            .cards
            .iter_mut()
            .find(|card| card.id == id && card.editable)?;
        card.score = card.clamp(score);
        Some(card.score)
    }
}
