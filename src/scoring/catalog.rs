//! Static catalogs of the bonus cards a player can acquire, per category.

use serde::Serialize;

use super::category::Category;
use super::formulas::Score;

/// How an acquired card's points are determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardValue {
    /// The player enters the points, moving in multiples of `step`.
    Variable {
        step: Score,
        max_score: Option<Score>,
    },
    /// Worth exactly `points`; not editable once acquired.
    Fixed { points: Score },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub value: CardValue,
}

const fn variable(name: &'static str, description: &'static str, step: Score) -> CatalogEntry {
    CatalogEntry {
        name,
        description,
        value: CardValue::Variable {
            step,
            max_score: None,
        },
    }
}

const fn capped(
    name: &'static str,
    description: &'static str,
    step: Score,
    max_score: Score,
) -> CatalogEntry {
    CatalogEntry {
        name,
        description,
        value: CardValue::Variable {
            step,
            max_score: Some(max_score),
        },
    }
}

const fn fixed(name: &'static str, description: &'static str, points: Score) -> CatalogEntry {
    CatalogEntry {
        name,
        description,
        value: CardValue::Fixed { points },
    }
}

pub const COMMERCE_CARDS: &[CatalogEntry] = &[
    variable("Lighthouse", "1 point for each yellow card you own", 1),
    variable("Haven", "1 point for each brown card you own", 1),
    variable("Chamber of Commerce", "2 points for each gray card you own", 2),
    variable("Ludus", "1 point for each red card you own", 1),
    variable("Arena", "1 point for each stage you constructed", 1),
];

pub const GUILD_CARDS: &[CatalogEntry] = &[
    variable("Workers Guild", "1 point for each brown card your neighbors own", 1),
    variable("Craftsmens Guild", "2 points for each gray card your neighbors own", 2),
    variable("Magistrates Guild", "1 point for each blue card your neighbors own", 1),
    variable("Traders Guild", "1 point for each yellow card your neighbors own", 1),
    variable("Spies Guild", "1 point for each red card your neighbors own", 1),
    variable("Philosophers Guild", "1 point for each green card your neighbors own", 1),
    variable("Shipowners Guild", "1 point for each brown, gray, and purple card you own", 1),
    variable("Builders Guild", "1 point for each stage you and your neighbors constructed", 1),
    capped("Decorators Guild", "7 points if you constructed all your stages", 7, 7),
];

pub const CULTURE_CARDS: &[CatalogEntry] = &[
    fixed("Altar", "Civilian structure worth 3 points", 3),
    fixed("Aqueduct", "Civilian structure worth 5 points", 5),
    fixed("Baths", "Civilian structure worth 3 points", 3),
    fixed("Courthouse", "Civilian structure worth 4 points", 4),
    fixed("Gardens", "Civilian structure worth 5 points", 5),
    fixed("Palace", "Civilian structure worth 8 points", 8),
    fixed("Pantheon", "Civilian structure worth 7 points", 7),
    fixed("Senate", "Civilian structure worth 6 points", 6),
    fixed("Statue", "Civilian structure worth 4 points", 4),
    fixed("Theater", "Civilian structure worth 3 points", 3),
    fixed("Temple", "Civilian structure worth 4 points", 4),
    fixed("Town Hall", "Civilian structure worth 6 points", 6),
    fixed("Well", "Civilian structure worth 3 points", 3),
];

pub const CITY_CARDS: &[CatalogEntry] = &[
    fixed("Architect Firm", "Black card worth 2 points", 2),
    fixed("Brotherhood", "Black card worth 4 points", 4),
    fixed("Capitol", "Black card worth 8 points", 8),
    variable("Cells", "2 points for each 1 military victory token you own", 2),
    fixed("Cenotaph", "Black card worth 5 points", 5),
    fixed("Chamber of Builders", "Black card worth 4 points", 4),
    fixed("City Gates", "Black card worth 4 points", 4),
    fixed("Consulate", "Black card worth 2 points", 2),
    fixed("Customs", "Black card worth 4 points", 4),
    fixed("Embassy", "Black card worth 3 points", 3),
    variable("Guardhouse", "3 points for each 3 military victory token you own", 3),
    fixed("Hideout", "Black card worth 2 points", 2),
    fixed("Lair", "Black card worth 3 points", 3),
    fixed("Mint", "Black card worth 8 points", 8),
    variable("Prison", "4 points for each 5 military victory token you own", 4),
    fixed("Residence", "Black card worth 1 point", 1),
    variable("Secret Network", "1 point for each black card you own", 1),
    fixed("Sepulcher", "Black card worth 4 points", 4),
    variable("Slave Market", "1 point for each military victory token you own", 1),
    fixed("Tabularium", "Black card worth 6 points", 6),
    fixed("Trade Center", "Black card worth 6 points", 6),
];

/// The full catalog for a category. Categories without cards have an empty catalog.
pub fn catalog(category: Category) -> &'static [CatalogEntry] {
    match category {
        Category::Commerce => COMMERCE_CARDS,
        Category::Guilds => GUILD_CARDS,
        Category::Culture => CULTURE_CARDS,
        Category::City => CITY_CARDS,
        _ => &[],
    }
}

pub fn find_entry(category: Category, name: &str) -> Option<&'static CatalogEntry> {
    catalog(category).iter().find(|entry| entry.name == name)
}

/// Catalog entries the player does not hold yet, in catalog order.
pub fn available_cards<S: AsRef<str>>(
    category: Category,
    held_names: &[S],
) -> Vec<&'static CatalogEntry> {
    catalog(category)
        .iter()
        .filter(|entry| !held_names.iter().any(|held| held.as_ref() == entry.name))
        .collect()
}
