use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::GameError;
use super::models::PlayerSlot;
use crate::scoring::state::adjust_count;
use crate::scoring::{
    find_entry, stages, CardCollection, CardId, Category, CategoryState, CountInput, Counter,
    Score,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDirection {
    Increment,
    Decrement,
}

/// A single edit to one category of a player's sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScoreAction {
    SetCount {
        counter: Counter,
        #[serde(default)]
        value: CountInput,
    },
    AdjustCount {
        counter: Counter,
        delta: i64,
    },
    AddCard {
        category: Category,
        name: String,
    },
    /// A culture card without a catalog entry, scored by hand.
    AddFreeFormCard,
    RemoveCard {
        category: Category,
        card_id: CardId,
    },
    AdjustCard {
        category: Category,
        card_id: CardId,
        delta: Score,
    },
    StepCard {
        category: Category,
        card_id: CardId,
        direction: StepDirection,
    },
    SetCardScore {
        category: Category,
        card_id: CardId,
        #[serde(default)]
        score: CountInput,
    },
    ToggleStage {
        index: usize,
    },
}

/// Whether an action changed the sheet. Rejected edits are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionOutcome {
    Applied,
    Ignored,
}

impl From<bool> for ActionOutcome {
    fn from(changed: bool) -> Self {
        if changed {
            ActionOutcome::Applied
        } else {
            ActionOutcome::Ignored
        }
    }
}

impl ScoreAction {
    pub fn category(&self) -> Category {
        match self {
            ScoreAction::SetCount { counter, .. } | ScoreAction::AdjustCount { counter, .. } => {
                counter.category()
            }
            ScoreAction::AddCard { category, .. }
            | ScoreAction::RemoveCard { category, .. }
            | ScoreAction::AdjustCard { category, .. }
            | ScoreAction::StepCard { category, .. }
            | ScoreAction::SetCardScore { category, .. } => *category,
            ScoreAction::AddFreeFormCard => Category::Culture,
            ScoreAction::ToggleStage { .. } => Category::Wonder,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScoreAction::SetCount { .. } => "set_count",
            ScoreAction::AdjustCount { .. } => "adjust_count",
            ScoreAction::AddCard { .. } => "add_card",
            ScoreAction::AddFreeFormCard => "add_free_form_card",
            ScoreAction::RemoveCard { .. } => "remove_card",
            ScoreAction::AdjustCard { .. } => "adjust_card",
            ScoreAction::StepCard { .. } => "step_card",
            ScoreAction::SetCardScore { .. } => "set_card_score",
            ScoreAction::ToggleStage { .. } => "toggle_stage",
        }
    }
}

fn counter_of<'a>(
    state: &'a mut CategoryState,
    counter: Counter,
    action: &'static str,
) -> Result<&'a mut u32, GameError> {
    let category = state.category();
    state
        .counter_mut(counter)
        .ok_or(GameError::Unsupported { action, category })
}

fn cards_of(state: &mut CategoryState) -> Result<&mut CardCollection, GameError> {
    let category = state.category();
    state.cards_mut().ok_or(GameError::NoCards(category))
}

impl PlayerSlot {
    /// Applies `action` and rescores the category it touched.
    pub fn apply(&mut self, action: &ScoreAction) -> Result<ActionOutcome, GameError> {
        let category = action.category();
        let stage_count = self.board.stage_count(self.side);
        let state = self.state_mut(category)?;

        let outcome = match action {
            ScoreAction::SetCount { counter, value } => {
                let count = counter_of(state, *counter, action.name())?;
                let next = value.value();
                let changed = *count != next;
                *count = next;
                ActionOutcome::from(changed)
            }
            ScoreAction::AdjustCount { counter, delta } => {
                let count = counter_of(state, *counter, action.name())?;
                let next = adjust_count(*count, *delta);
                let changed = *count != next;
                *count = next;
                ActionOutcome::from(changed)
            }
            ScoreAction::AddCard { category, name } => {
                let entry = find_entry(*category, name).ok_or_else(|| GameError::UnknownCard {
                    category: *category,
                    name: name.clone(),
                })?;
                ActionOutcome::from(cards_of(state)?.add_card(entry).is_some())
            }
            ScoreAction::AddFreeFormCard => {
                cards_of(state)?.add_free_form();
                ActionOutcome::Applied
            }
            ScoreAction::RemoveCard { card_id, .. } => {
                ActionOutcome::from(cards_of(state)?.remove_card(*card_id))
            }
            ScoreAction::AdjustCard { card_id, delta, .. } => {
                ActionOutcome::from(cards_of(state)?.adjust_card_score(*card_id, *delta).is_some())
            }
            ScoreAction::StepCard {
                card_id, direction, ..
            } => {
                let increment = *direction == StepDirection::Increment;
                ActionOutcome::from(cards_of(state)?.step_card(*card_id, increment).is_some())
            }
            ScoreAction::SetCardScore { card_id, score, .. } => {
                let score = Score::try_from(score.value()).unwrap_or(Score::MAX);
                ActionOutcome::from(cards_of(state)?.set_card_score(*card_id, score).is_some())
            }
            ScoreAction::ToggleStage { index } => {
                let track = state.stages_mut().ok_or(GameError::Unsupported {
                    action: action.name(),
                    category,
                })?;
                let before = stages::normalize(track, stage_count);
                let next = stages::toggle_stage(track, stage_count, *index);
                let changed = next != before;
                *track = next;
                ActionOutcome::from(changed)
            }
        };

        let score = self.rescore(category);
        debug!(
            player_id = %self.id,
            category = %category,
            action = action.name(),
            outcome = ?outcome,
            score,
            "Applied score action"
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{Variant, WonderBoard, WonderSide};

    fn slot() -> PlayerSlot {
        PlayerSlot::new(WonderBoard::Alexandria, Variant::Extended)
    }

    fn add(slot: &mut PlayerSlot, category: Category, name: &str) -> CardId {
        let action = ScoreAction::AddCard {
            category,
            name: name.to_string(),
        };
        assert_eq!(slot.apply(&action).unwrap(), ActionOutcome::Applied);
        slot.state(category).unwrap().cards().unwrap().cards().last().unwrap().id
    }

    #[test]
    fn set_count_coerces_text_and_rescores() {
        let mut slot = slot();
        let action = ScoreAction::SetCount {
            counter: Counter::Coins,
            value: CountInput::Text("10".to_string()),
        };
        slot.apply(&action).unwrap();
        assert_eq!(slot.scores[&Category::Wealth], 3);

        let action = ScoreAction::SetCount {
            counter: Counter::Coins,
            value: CountInput::Text("lots".to_string()),
        };
        slot.apply(&action).unwrap();
        assert_eq!(slot.scores[&Category::Wealth], 0);
    }

    #[test]
    fn huge_symbol_counts_saturate_the_score() {
        let mut slot = slot();
        let action = ScoreAction::SetCount {
            counter: Counter::Gear,
            value: CountInput::Text("99999999999999".to_string()),
        };
        slot.apply(&action).unwrap();
        assert_eq!(slot.scores[&Category::Science], Score::MAX);
        assert_eq!(slot.total(), Score::MAX);
    }

    #[test]
    fn adjusting_tokens_never_goes_negative_but_score_can() {
        let mut slot = slot();
        let down = ScoreAction::AdjustCount {
            counter: Counter::MilitaryOne,
            delta: -1,
        };
        assert_eq!(slot.apply(&down).unwrap(), ActionOutcome::Ignored);

        let defeats = ScoreAction::AdjustCount {
            counter: Counter::MilitaryMinusOne,
            delta: 3,
        };
        slot.apply(&defeats).unwrap();
        assert_eq!(slot.scores[&Category::Military], -3);

        let debt = ScoreAction::SetCount {
            counter: Counter::DebtFive,
            value: CountInput::Integer(2),
        };
        slot.apply(&debt).unwrap();
        assert_eq!(slot.scores[&Category::Debt], -10);
        assert_eq!(slot.total(), -13);
    }

    #[test]
    fn duplicate_card_is_ignored() {
        let mut slot = slot();
        add(&mut slot, Category::Guilds, "Workers Guild");

        let again = ScoreAction::AddCard {
            category: Category::Guilds,
            name: "Workers Guild".to_string(),
        };
        assert_eq!(slot.apply(&again).unwrap(), ActionOutcome::Ignored);
    }

    #[test]
    fn unknown_card_is_an_error() {
        let mut slot = slot();
        let action = ScoreAction::AddCard {
            category: Category::Commerce,
            name: "Palace".to_string(),
        };
        assert!(matches!(
            slot.apply(&action),
            Err(GameError::UnknownCard { .. })
        ));
    }

    #[test]
    fn cards_cannot_be_added_to_counter_categories() {
        let mut slot = slot();
        let action = ScoreAction::AddCard {
            category: Category::Science,
            name: "Arena".to_string(),
        };
        // The catalog lookup fails first: science has no catalog.
        assert!(slot.apply(&action).is_err());

        let action = ScoreAction::RemoveCard {
            category: Category::Wealth,
            card_id: uuid::Uuid::new_v4(),
        };
        assert_eq!(
            slot.apply(&action).unwrap_err(),
            GameError::NoCards(Category::Wealth)
        );
    }

    #[test]
    fn card_steps_update_category_score() {
        let mut slot = slot();
        let id = add(&mut slot, Category::City, "Guardhouse");
        let step = ScoreAction::StepCard {
            category: Category::City,
            card_id: id,
            direction: StepDirection::Increment,
        };
        slot.apply(&step).unwrap();
        slot.apply(&step).unwrap();
        add(&mut slot, Category::City, "Capitol");

        assert_eq!(slot.scores[&Category::City], 6 + 8);
    }

    #[test]
    fn free_form_culture_cards_are_hand_scored() {
        let mut slot = slot();
        slot.apply(&ScoreAction::AddFreeFormCard).unwrap();
        let id = slot.state(Category::Culture).unwrap().cards().unwrap().cards()[0].id;

        let set = ScoreAction::SetCardScore {
            category: Category::Culture,
            card_id: id,
            score: CountInput::Text("5".to_string()),
        };
        slot.apply(&set).unwrap();
        assert_eq!(slot.scores[&Category::Culture], 5);
    }

    #[test]
    fn removing_missing_card_is_ignored() {
        let mut slot = slot();
        let action = ScoreAction::RemoveCard {
            category: Category::Commerce,
            card_id: uuid::Uuid::new_v4(),
        };
        assert_eq!(slot.apply(&action).unwrap(), ActionOutcome::Ignored);
    }

    #[test]
    fn stage_toggles_follow_progression_rules() {
        let mut slot = slot();
        let toggle = |index| ScoreAction::ToggleStage { index };

        assert_eq!(slot.apply(&toggle(1)).unwrap(), ActionOutcome::Ignored);
        slot.apply(&toggle(0)).unwrap();
        slot.apply(&toggle(1)).unwrap();
        assert_eq!(slot.scores[&Category::Wonder], 3);

        slot.apply(&toggle(2)).unwrap();
        assert_eq!(slot.scores[&Category::Wonder], 10);

        slot.apply(&toggle(0)).unwrap();
        assert_eq!(slot.scores[&Category::Wonder], 0);
        assert_eq!(
            slot.state(Category::Wonder).unwrap().stages(),
            Some(&[false, false, false][..])
        );
    }

    #[test]
    fn night_side_uses_night_table() {
        let mut slot = slot();
        slot.set_side(WonderSide::Night);
        for index in 0..3 {
            slot.apply(&ScoreAction::ToggleStage { index }).unwrap();
        }
        assert_eq!(slot.scores[&Category::Wonder], 7);
    }

    #[test]
    fn disabled_category_is_rejected() {
        let mut slot = PlayerSlot::new(WonderBoard::Olympia, Variant::Base);
        let action = ScoreAction::AdjustCount {
            counter: Counter::DebtOne,
            delta: 1,
        };
        assert_eq!(
            slot.apply(&action).unwrap_err(),
            GameError::CategoryDisabled(Category::Debt)
        );
    }

    #[test]
    fn actions_deserialize_from_tagged_json() {
        let action: ScoreAction =
            serde_json::from_str(r#"{"action": "set_count", "counter": "gear", "value": "3"}"#)
                .unwrap();
        assert_eq!(
            action,
            ScoreAction::SetCount {
                counter: Counter::Gear,
                value: CountInput::Text("3".to_string()),
            }
        );

        let action: ScoreAction =
            serde_json::from_str(r#"{"action": "toggle_stage", "index": 0}"#).unwrap();
        assert_eq!(action.category(), Category::Wonder);
    }

    #[test]
    fn null_or_missing_count_clears_the_counter() {
        let mut slot = slot();
        slot.apply(&ScoreAction::SetCount {
            counter: Counter::Coins,
            value: CountInput::Integer(9),
        })
        .unwrap();

        let cleared: ScoreAction = serde_json::from_str(
            r#"{"action": "set_count", "counter": "coins", "value": null}"#,
        )
        .unwrap();
        assert_eq!(slot.apply(&cleared).unwrap(), ActionOutcome::Applied);
        assert_eq!(slot.scores[&Category::Wealth], 0);

        let missing: ScoreAction =
            serde_json::from_str(r#"{"action": "set_count", "counter": "coins"}"#).unwrap();
        assert_eq!(
            missing,
            ScoreAction::SetCount {
                counter: Counter::Coins,
                value: CountInput::Empty,
            }
        );
    }
}
