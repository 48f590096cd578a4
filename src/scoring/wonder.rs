use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::formulas::Score;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WonderBoard {
    Alexandria,
    Babylon,
    Ephesus,
    Giza,
    Halicarnassus,
    Olympia,
    Rhodes,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WonderSide {
    #[default]
    Day,
    Night,
}

impl WonderBoard {
    pub fn display_name(self) -> &'static str {
        match self {
            WonderBoard::Alexandria => "Alexandria",
            WonderBoard::Babylon => "Babylon",
            WonderBoard::Ephesus => "Ephesus",
            WonderBoard::Giza => "Giza",
            WonderBoard::Halicarnassus => "Halicarnassus",
            WonderBoard::Olympia => "Olympia",
            WonderBoard::Rhodes => "Rhodes",
        }
    }

    pub fn wonder_name(self) -> &'static str {
        match self {
            WonderBoard::Alexandria => "The Great Library",
            WonderBoard::Babylon => "The Hanging Gardens",
            WonderBoard::Ephesus => "The Temple of Artemis",
            WonderBoard::Giza => "The Great Pyramid",
            WonderBoard::Halicarnassus => "The Mausoleum",
            WonderBoard::Olympia => "The Statue of Zeus",
            WonderBoard::Rhodes => "The Colossus",
        }
    }

    /// Points awarded by each stage, in construction order.
    pub fn stage_points(self, side: WonderSide) -> &'static [Score] {
        use WonderBoard::*;
        use WonderSide::*;

        match (self, side) {
            (Alexandria, Day) => &[3, 0, 7],
            (Alexandria, Night) => &[0, 0, 7],
            (Babylon, Day) => &[3, 0, 7],
            (Babylon, Night) => &[0, 0],
            (Ephesus, Day) => &[3, 0, 7],
            (Ephesus, Night) => &[2, 3, 5],
            (Giza, Day) => &[3, 5, 7],
            (Giza, Night) => &[3, 5, 5, 7],
            (Halicarnassus, Day) => &[3, 0, 7],
            (Halicarnassus, Night) => &[2, 1, 0],
            (Olympia, Day) => &[3, 0, 7],
            (Olympia, Night) => &[2, 3, 5],
            (Rhodes, Day) => &[3, 0, 7],
            (Rhodes, Night) => &[3, 4],
        }
    }

    pub fn stage_count(self, side: WonderSide) -> usize {
        self.stage_points(side).len()
    }
}
