//! Raw per-category state and the dispatch from state to score.

use serde::{Deserialize, Serialize};

use super::cards::CardCollection;
use super::category::Category;
use super::formulas::{
    board_score, city_score, commerce_score, culture_score, debt_score, guilds_score,
    military_score, science_score, wealth_score, DebtTokens, MilitaryTokens, Score,
    ScienceSymbols,
};

/// The inputs a category is scored from. Each variant carries its own shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum CategoryState {
    Wonder { stages: Vec<bool> },
    Wealth { coins: u32 },
    Military(MilitaryTokens),
    Culture(CardCollection),
    Commerce(CardCollection),
    Science(ScienceSymbols),
    Guilds(CardCollection),
    Debt(DebtTokens),
    City(CardCollection),
}

impl CategoryState {
    pub fn empty(category: Category) -> Self {
        match category {
            Category::Wonder => CategoryState::Wonder { stages: Vec::new() },
            Category::Wealth => CategoryState::Wealth { coins: 0 },
            Category::Military => CategoryState::Military(MilitaryTokens::default()),
            Category::Culture => CategoryState::Culture(CardCollection::default()),
            Category::Commerce => CategoryState::Commerce(CardCollection::default()),
            Category::Science => CategoryState::Science(ScienceSymbols::default()),
            Category::Guilds => CategoryState::Guilds(CardCollection::default()),
            Category::Debt => CategoryState::Debt(DebtTokens::default()),
            Category::City => CategoryState::City(CardCollection::default()),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            CategoryState::Wonder { .. } => Category::Wonder,
            CategoryState::Wealth { .. } => Category::Wealth,
            CategoryState::Military(_) => Category::Military,
            CategoryState::Culture(_) => Category::Culture,
            CategoryState::Commerce(_) => Category::Commerce,
            CategoryState::Science(_) => Category::Science,
            CategoryState::Guilds(_) => Category::Guilds,
            CategoryState::Debt(_) => Category::Debt,
            CategoryState::City(_) => Category::City,
        }
    }

    /// Scores this state. `stage_points` is only read for the wonder category.
    pub fn score(&self, stage_points: &[Score]) -> Score {
        match self {
            CategoryState::Wonder { stages } => board_score(stages, stage_points),
            CategoryState::Wealth { coins } => wealth_score(*coins),
            CategoryState::Military(tokens) => military_score(tokens),
            CategoryState::Culture(cards) => culture_score(cards.cards()),
            CategoryState::Commerce(cards) => commerce_score(cards.cards()),
            CategoryState::Science(symbols) => science_score(symbols),
            CategoryState::Guilds(cards) => guilds_score(cards.cards()),
            CategoryState::Debt(tokens) => debt_score(tokens),
            CategoryState::City(cards) => city_score(cards.cards()),
        }
    }

    pub fn cards(&self) -> Option<&CardCollection> {
        match self {
            CategoryState::Culture(cards)
            | CategoryState::Commerce(cards)
            | CategoryState::Guilds(cards)
            | CategoryState::City(cards) => Some(cards),
            _ => None,
        }
    }

    pub fn cards_mut(&mut self) -> Option<&mut CardCollection> {
        match self {
            CategoryState::Culture(cards)
            | CategoryState::Commerce(cards)
            | CategoryState::Guilds(cards)
            | CategoryState::City(cards) => Some(cards),
            _ => None,
        }
    }

    pub fn stages(&self) -> Option<&[bool]> {
        match self {
            CategoryState::Wonder { stages } => Some(stages),
            _ => None,
        }
    }

    pub fn stages_mut(&mut self) -> Option<&mut Vec<bool>> {
        match self {
            CategoryState::Wonder { stages } => Some(stages),
            _ => None,
        }
    }

    pub fn counter_mut(&mut self, counter: Counter) -> Option<&mut u32> {
        match (self, counter) {
            (CategoryState::Wealth { coins }, Counter::Coins) => Some(coins),
            (CategoryState::Military(t), Counter::MilitaryMinusOne) => Some(&mut t.minus_one),
            (CategoryState::Military(t), Counter::MilitaryOne) => Some(&mut t.one),
            (CategoryState::Military(t), Counter::MilitaryThree) => Some(&mut t.three),
            (CategoryState::Military(t), Counter::MilitaryFive) => Some(&mut t.five),
            (CategoryState::Debt(t), Counter::DebtOne) => Some(&mut t.one),
            (CategoryState::Debt(t), Counter::DebtFive) => Some(&mut t.five),
            (CategoryState::Science(s), Counter::Gear) => Some(&mut s.gear),
            (CategoryState::Science(s), Counter::Tablet) => Some(&mut s.tablet),
            (CategoryState::Science(s), Counter::Compass) => Some(&mut s.compass),
            _ => None,
        }
    }
}

/// A numeric tally a player edits directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Counter {
    Coins,
    MilitaryMinusOne,
    MilitaryOne,
    MilitaryThree,
    MilitaryFive,
    DebtOne,
    DebtFive,
    Gear,
    Tablet,
    Compass,
}

impl Counter {
    pub fn category(self) -> Category {
        match self {
            Counter::Coins => Category::Wealth,
            Counter::MilitaryMinusOne
            | Counter::MilitaryOne
            | Counter::MilitaryThree
            | Counter::MilitaryFive => Category::Military,
            Counter::DebtOne | Counter::DebtFive => Category::Debt,
            Counter::Gear | Counter::Tablet | Counter::Compass => Category::Science,
        }
    }
}

/// A count as typed by a user: a JSON number, free text or nothing (`null`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CountInput {
    Integer(i64),
    Float(f64),
    Text(String),
    #[default]
    Empty,
}

impl CountInput {
    /// The stored count: negatives become 0, text is read like a leading
    /// integer, anything unreadable is 0.
    pub fn value(&self) -> u32 {
        match self {
            CountInput::Integer(n) => clamp_count(*n),
            CountInput::Float(f) if f.is_finite() => clamp_count(f.trunc() as i64),
            CountInput::Float(_) => 0,
            CountInput::Text(text) => parse_count(text),
            CountInput::Empty => 0,
        }
    }
}

pub fn clamp_count(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Reads the leading integer of `input`. Empty, non-numeric and negative input yield 0.
pub fn parse_count(input: &str) -> u32 {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if negative || digits.is_empty() {
        return 0;
    }
    // Only overflow can fail here.
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

/// Applies `delta` to a count, never going below 0.
pub fn adjust_count(current: u32, delta: i64) -> u32 {
    clamp_count(i64::from(current).saturating_add(delta))
}
