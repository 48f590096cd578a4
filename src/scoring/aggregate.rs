//! Totals, standings and winner selection across players.
//!
//! Nothing here is cached: every query recomputes from the score maps it is given.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::Category;
use super::formulas::Score;

/// A player's score per category. Missing categories count as 0.
pub type ScoreCard = BTreeMap<Category, Score>;

/// The inputs to ranking: who the player is and what they scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTally {
    pub player_id: String,
    pub name: String,
    pub scores: ScoreCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    pub player_id: String,
    pub name: String,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based position in the sorted list. Tied players get consecutive ranks.
    pub rank: usize,
    pub player_id: String,
    pub name: String,
    pub total: Score,
    pub scores: ScoreCard,
}

pub fn total_score(scores: &ScoreCard) -> Score {
    scores
        .values()
        .fold(0, |total: Score, score| total.saturating_add(*score))
}

/// The player with the greatest total, or `None` for no players.
///
/// Scans in input order and only replaces the leader on a strictly greater
/// total, so among tied players the first one listed wins. There is no
/// score floor: a table where every total is negative still has a winner.
pub fn rank_and_find_winner(players: &[PlayerTally]) -> Option<Winner> {
    let mut winner: Option<Winner> = None;

    for player in players {
        let total = total_score(&player.scores);
        if winner.as_ref().map_or(true, |leader| total > leader.score) {
            winner = Some(Winner {
                player_id: player.player_id.clone(),
                name: player.name.clone(),
                score: total,
            });
        }
    }

    winner
}

/// Players sorted by descending total. Equal totals keep their input order.
pub fn standings(players: &[PlayerTally]) -> Vec<Standing> {
    let mut totals: Vec<(&PlayerTally, Score)> = players
        .iter()
        .map(|player| (player, total_score(&player.scores)))
        .collect();
    totals.sort_by(|a, b| b.1.cmp(&a.1));

    totals
        .into_iter()
        .enumerate()
        .map(|(index, (player, total))| Standing {
            rank: index + 1,
            player_id: player.player_id.clone(),
            name: player.name.clone(),
            total,
            scores: player.scores.clone(),
        })
        .collect()
}

/// Sum of one category over every player.
pub fn category_total_across_players(players: &[PlayerTally], category: Category) -> Score {
    players.iter().fold(0, |total: Score, player| {
        total.saturating_add(player.scores.get(&category).copied().unwrap_or_default())
    })
}
