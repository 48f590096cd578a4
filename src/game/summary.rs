//! Plain-text summary of a finished game, for pasting into a chat or notes.

use super::models::GameModel;
use crate::scoring::{rank_and_find_winner, standings};

pub fn render_summary(game: &GameModel) -> String {
    let mut lines = vec![format!(
        "{} - {}",
        game.title,
        game.created_at.format("%Y-%m-%d")
    )];
    lines.push(String::new());

    let tallies = game.playing_tallies();
    if tallies.is_empty() {
        lines.push("No players have been scored yet.".to_string());
        return lines.join("\n");
    }

    for standing in standings(&tallies) {
        let Ok(slot) = game.player(&standing.player_id) else {
            continue;
        };
        lines.push(format!(
            "{}. {} ({}, {} side): {} points",
            standing.rank,
            standing.name,
            slot.board.display_name(),
            slot.side,
            standing.total
        ));

        let breakdown: Vec<String> = game
            .variant
            .categories()
            .iter()
            .map(|category| {
                let score = standing.scores.get(category).copied().unwrap_or_default();
                format!("{} {}", category.label(), score)
            })
            .collect();
        lines.push(format!("   {}", breakdown.join(" | ")));
    }

    if let Some(winner) = rank_and_find_winner(&tallies) {
        lines.push(String::new());
        lines.push(format!("Winner: {} with {} points", winner.name, winner.score));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::actions::ScoreAction;
    use crate::scoring::{CountInput, Counter, Variant, WonderSide};

    #[test]
    fn empty_game_says_so() {
        let game = GameModel::new(Some("Quiet night".to_string()), Variant::Base);
        let summary = render_summary(&game);

        assert!(summary.starts_with("Quiet night - "));
        assert!(summary.ends_with("No players have been scored yet."));
    }

    #[test]
    fn lists_players_by_rank_with_breakdown() {
        let mut game = GameModel::new(None, Variant::Base);
        {
            let giza = game.player_mut("giza").unwrap();
            giza.name = "Ana".to_string();
            giza.set_side(WonderSide::Night);
            giza.apply(&ScoreAction::SetCount {
                counter: Counter::Coins,
                value: CountInput::Integer(9),
            })
            .unwrap();
        }
        {
            let rhodes = game.player_mut("rhodes").unwrap();
            rhodes.name = "Ben".to_string();
            rhodes
                .apply(&ScoreAction::SetCount {
                    counter: Counter::MilitaryFive,
                    value: CountInput::Integer(1),
                })
                .unwrap();
        }

        let summary = render_summary(&game);
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(lines[2], "1. Ben (Rhodes, day side): 5 points");
        assert_eq!(
            lines[3],
            "   Wonder 0 | Wealth 0 | Military 5 | Culture 0 | Commerce 0 | Science 0 | Guilds 0"
        );
        assert_eq!(lines[4], "2. Ana (Giza, night side): 3 points");
        assert_eq!(*lines.last().unwrap(), "Winner: Ben with 5 points");
        assert!(!summary.contains("Alexandria"));
    }
}
