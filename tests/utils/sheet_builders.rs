#![allow(dead_code)]

use scorepad::{
    game::{PlayerSlot, ScoreAction},
    scoring::{Category, CountInput, Counter, Variant, WonderBoard, WonderSide},
};

// ============================================================================
// Score Sheet Setup Utilities
// ============================================================================

/// Fluent builder for a scored player slot, applying actions in order
pub struct SheetBuilder {
    slot: PlayerSlot,
}

impl SheetBuilder {
    pub fn new(board: WonderBoard) -> Self {
        Self {
            slot: PlayerSlot::new(board, Variant::Base),
        }
    }

    pub fn extended(board: WonderBoard) -> Self {
        Self {
            slot: PlayerSlot::new(board, Variant::Extended),
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.slot.name = name.to_string();
        self
    }

    pub fn night(mut self) -> Self {
        self.slot.set_side(WonderSide::Night);
        self
    }

    pub fn apply(mut self, action: ScoreAction) -> Self {
        self.slot.apply(&action).unwrap();
        self
    }

    pub fn count(self, counter: Counter, value: i64) -> Self {
        self.apply(ScoreAction::SetCount {
            counter,
            value: CountInput::Integer(value),
        })
    }

    pub fn card(self, category: Category, name: &str) -> Self {
        self.apply(ScoreAction::AddCard {
            category,
            name: name.to_string(),
        })
    }

    /// Completes the first `count` stages, left to right
    pub fn stages(mut self, count: usize) -> Self {
        for index in 0..count {
            self = self.apply(ScoreAction::ToggleStage { index });
        }
        self
    }

    pub fn build(self) -> PlayerSlot {
        self.slot
    }
}
