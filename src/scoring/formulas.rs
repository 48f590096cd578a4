//! Per-category scoring formulas.
//!
//! Every function here is pure: it reads a category's raw state and returns
//! the points it is worth. Storing the result is the caller's job.

use serde::{Deserialize, Serialize};

use super::cards::AcquiredCard;

/// Victory points. Military and debt scores may be negative.
pub type Score = i32;

/// Military conflict tokens held, one tally per denomination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilitaryTokens {
    pub minus_one: u32,
    pub one: u32,
    pub three: u32,
    pub five: u32,
}

/// Debt tokens held. Each is worth its face value in negative points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtTokens {
    pub one: u32,
    pub five: u32,
}

/// Science symbols owned, one tally per symbol type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScienceSymbols {
    pub gear: u32,
    pub tablet: u32,
    pub compass: u32,
}

fn saturate(points: i64) -> Score {
    points.clamp(Score::MIN.into(), Score::MAX.into()) as Score
}

/// One point per full set of three coins.
pub fn wealth_score(coins: u32) -> Score {
    saturate(i64::from(coins / 3))
}

pub fn military_score(tokens: &MilitaryTokens) -> Score {
    saturate(
        -i64::from(tokens.minus_one)
            + i64::from(tokens.one)
            + 3 * i64::from(tokens.three)
            + 5 * i64::from(tokens.five),
    )
}

/// Always zero or negative.
pub fn debt_score(tokens: &DebtTokens) -> Score {
    saturate(-i64::from(tokens.one) - 5 * i64::from(tokens.five))
}

/// Each symbol scores its count squared, plus 7 for every complete set of
/// all three symbols. The number of sets is the smallest of the three counts.
pub fn science_score(symbols: &ScienceSymbols) -> Score {
    let gear = i64::from(symbols.gear);
    let tablet = i64::from(symbols.tablet);
    let compass = i64::from(symbols.compass);
    let sets = gear.min(tablet).min(compass);

    let squares = [gear, tablet, compass]
        .iter()
        .fold(0i64, |total, count| total.saturating_add(count.saturating_mul(*count)));

    saturate(squares.saturating_add(7 * sets))
}

fn card_sum(cards: &[AcquiredCard]) -> Score {
    saturate(cards.iter().map(|card| i64::from(card.score)).sum())
}

pub fn culture_score(cards: &[AcquiredCard]) -> Score {
    card_sum(cards)
}

pub fn commerce_score(cards: &[AcquiredCard]) -> Score {
    card_sum(cards)
}

pub fn guilds_score(cards: &[AcquiredCard]) -> Score {
    card_sum(cards)
}

pub fn city_score(cards: &[AcquiredCard]) -> Score {
    card_sum(cards)
}

/// Sum of the stage points for every completed stage. Completed flags past
/// the end of `stage_points` are worth nothing.
pub fn board_score(stages: &[bool], stage_points: &[Score]) -> Score {
    saturate(
        stages
            .iter()
            .zip(stage_points)
            .filter(|(completed, _)| **completed)
            .map(|(_, points)| i64::from(*points))
            .sum(),
    )
}
