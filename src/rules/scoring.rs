//! End-of-game scoring.
//!
//! Each criterion is evaluated independently for each player; the report
//! lists the points per criterion and does not pick a winner.
//!
//! | Criterion                       | Points |
//! |---------------------------------|--------|
//! | each escoba                     | 1      |
//! | all 10 golds / more than 5      | 2 / 1  |
//! | seven of gold ("guindis")       | 1      |
//! | all 4 sevens / 3 sevens         | 2 / 1  |
//! | more than 20 cards              | 1      |
//! | more than 30 cards              | 2      |
//!
//! A player who won no trick at all loses outright; the report flags it.

use serde::{Deserialize, Serialize};

use crate::core::config::{CARDS_PER_SUIT, DECK_SIZE};
use crate::core::player::{PlayerId, PlayerMap};
use crate::players::Player;

/// Sevens in the deck, one per suit.
const TOTAL_SEVENS: usize = 4;

/// Opponent holds fewer than 10 cards once every card is collected.
const OVERWHELMING_CARDS: usize = DECK_SIZE - 10;

/// Statistics and points for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub name: String,

    // === Statistics ===
    pub tricks: usize,
    pub cards: usize,
    pub escobas: usize,
    pub golds: usize,
    pub sevens: usize,
    pub has_seven_of_gold: bool,

    // === Points ===
    pub escoba_points: u32,
    pub gold_points: u32,
    pub seven_of_gold_points: u32,
    pub sevens_points: u32,
    pub card_majority_points: u32,
    pub overwhelming_points: u32,

    /// No trick won during the whole game.
    pub lost_outright: bool,
}

impl ScoreBreakdown {
    /// Score a player from their stored tricks.
    #[must_use]
    pub fn for_player(player: &Player) -> Self {
        let tricks = player.trick_count();
        let cards = player.card_count();
        let escobas = player.escobas();
        let golds = player.gold_count();
        let sevens = player.sevens_count();
        let has_seven_of_gold = player.has_seven_of_gold();

        let gold_points = if golds == CARDS_PER_SUIT {
            2
        } else if golds > CARDS_PER_SUIT / 2 {
            1
        } else {
            0
        };

        let sevens_points = if sevens == TOTAL_SEVENS {
            2
        } else if sevens >= TOTAL_SEVENS - 1 {
            1
        } else {
            0
        };

        Self {
            name: player.name().to_string(),
            tricks,
            cards,
            escobas,
            golds,
            sevens,
            has_seven_of_gold,
            escoba_points: escobas as u32,
            gold_points,
            seven_of_gold_points: u32::from(has_seven_of_gold),
            sevens_points,
            card_majority_points: if cards > DECK_SIZE / 2 { 1 } else { 0 },
            overwhelming_points: if cards > OVERWHELMING_CARDS { 2 } else { 0 },
            lost_outright: tricks == 0,
        }
    }

    /// Sum of all criteria.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.escoba_points
            + self.gold_points
            + self.seven_of_gold_points
            + self.sevens_points
            + self.card_majority_points
            + self.overwhelming_points
    }
}

/// Final report for both players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringReport {
    pub players: PlayerMap<ScoreBreakdown>,
}

impl ScoringReport {
    /// Score both players. Does not modify them.
    #[must_use]
    pub fn compute(players: &PlayerMap<Player>) -> Self {
        Self {
            players: players.map(|_, player| ScoreBreakdown::for_player(player)),
        }
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &ScoreBreakdown {
        &self.players[player]
    }

    /// Players flagged as having lost outright.
    pub fn lost_outright(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .filter(|(_, score)| score.lost_outright)
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Suit, Trick};

    fn card(suit: Suit, rank: u8) -> Card {
        Card::of(suit, rank).unwrap()
    }

    fn player_with(cards: &[Card]) -> Player {
        let mut player = Player::new("Ana");
        if let Some((&first, rest)) = cards.split_first() {
            player.add_trick(&Trick::capture(first, rest));
        }
        player
    }

    #[test]
    fn test_gold_tiers() {
        let golds: Vec<Card> = (1..=10).map(|r| card(Suit::Gold, r)).collect();

        assert_eq!(ScoreBreakdown::for_player(&player_with(&golds)).gold_points, 2);
        assert_eq!(ScoreBreakdown::for_player(&player_with(&golds[..6])).gold_points, 1);
        assert_eq!(ScoreBreakdown::for_player(&player_with(&golds[..5])).gold_points, 0);
    }

    #[test]
    fn test_sevens_tiers_are_exclusive() {
        let sevens: Vec<Card> = Suit::ALL.iter().map(|&s| card(s, 7)).collect();

        let all = ScoreBreakdown::for_player(&player_with(&sevens));
        assert_eq!(all.sevens, 4);
        assert_eq!(all.sevens_points, 2);

        assert_eq!(ScoreBreakdown::for_player(&player_with(&sevens[..3])).sevens_points, 1);
        assert_eq!(ScoreBreakdown::for_player(&player_with(&sevens[..2])).sevens_points, 0);
    }

    #[test]
    fn test_seven_of_gold() {
        let player = player_with(&[card(Suit::Gold, 7), card(Suit::Cups, 8)]);
        let score = ScoreBreakdown::for_player(&player);
        assert!(score.has_seven_of_gold);
        assert_eq!(score.seven_of_gold_points, 1);
    }

    #[test]
    fn test_card_count_tiers() {
        let all: Vec<Card> = (1..=40).filter_map(Card::from_id).collect();

        let twenty = ScoreBreakdown::for_player(&player_with(&all[..20]));
        assert_eq!(twenty.card_majority_points, 0);

        let twenty_one = ScoreBreakdown::for_player(&player_with(&all[..21]));
        assert_eq!(twenty_one.card_majority_points, 1);
        assert_eq!(twenty_one.overwhelming_points, 0);

        let thirty_one = ScoreBreakdown::for_player(&player_with(&all[..31]));
        assert_eq!(thirty_one.card_majority_points, 1);
        assert_eq!(thirty_one.overwhelming_points, 2);
    }

    #[test]
    fn test_escoba_points_and_total() {
        let mut player = Player::new("Ana");
        let plays = [
            (card(Suit::Cups, 5), card(Suit::Cups, 10)),
            (card(Suit::Swords, 5), card(Suit::Swords, 10)),
        ];
        for (played, taken) in plays {
            let mut trick = Trick::capture(played, &[taken]);
            trick.mark_sweep();
            player.add_trick(&trick);
        }

        let score = ScoreBreakdown::for_player(&player);
        assert_eq!(score.escoba_points, 2);
        assert_eq!(score.total(), 2);
        assert!(!score.lost_outright);
    }

    #[test]
    fn test_no_tricks_lost_outright() {
        let score = ScoreBreakdown::for_player(&Player::new("Luis"));
        assert!(score.lost_outright);
        assert_eq!(score.total(), 0);
    }

    #[test]
    fn test_report() {
        let players = PlayerMap::from_pair(
            player_with(&[card(Suit::Gold, 5), card(Suit::Gold, 10)]),
            Player::new("Luis"),
        );

        let report = ScoringReport::compute(&players);

        assert_eq!(report.get(PlayerId::FIRST).cards, 2);
        assert_eq!(report.lost_outright().collect::<Vec<_>>(), vec![PlayerId::SECOND]);

        let json = serde_json::to_string(&report).unwrap();
        let back: ScoringReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
