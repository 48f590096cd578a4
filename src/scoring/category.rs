use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// A scoring dimension. Every point a player earns lands in exactly one category.
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
pub enum Category {
    Wonder,
    Wealth,
    Military,
    Culture,
    Commerce,
    Science,
    Guilds,
    Debt,
    City,
}

impl Category {
    /// Column heading used in standings and summaries.
    pub fn label(self) -> &'static str {
        match self {
            Category::Wonder => "Wonder",
            Category::Wealth => "Wealth",
            Category::Military => "Military",
            Category::Culture => "Culture",
            Category::Commerce => "Commerce",
            Category::Science => "Science",
            Category::Guilds => "Guilds",
            Category::Debt => "Debt",
            Category::City => "City",
        }
    }

    /// Whether the category's raw state is a collection of acquired cards.
    pub fn holds_cards(self) -> bool {
        matches!(
            self,
            Category::Culture | Category::Commerce | Category::Guilds | Category::City
        )
    }
}

const BASE_CATEGORIES: &[Category] = &[
    Category::Wonder,
    Category::Wealth,
    Category::Military,
    Category::Culture,
    Category::Commerce,
    Category::Science,
    Category::Guilds,
];

const EXTENDED_CATEGORIES: &[Category] = &[
    Category::Wonder,
    Category::Wealth,
    Category::Military,
    Category::Culture,
    Category::Commerce,
    Category::Science,
    Category::Guilds,
    Category::Debt,
    Category::City,
];

/// Ruleset variant. The extended variant adds debt and city scoring.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    #[default]
    Base,
    Extended,
}

impl Variant {
    /// Categories scored under this variant, in display order.
    pub fn categories(self) -> &'static [Category] {
        match self {
            Variant::Base => BASE_CATEGORIES,
            Variant::Extended => EXTENDED_CATEGORIES,
        }
    }
}
