//! Scoring tests over realistic end-of-game card splits.

use escoba::cards::{Card, Suit, Trick};
use escoba::core::{PlayerId, PlayerMap};
use escoba::players::Player;
use escoba::rules::{GameBuilder, ScoreBreakdown, ScoringReport, ScriptedAdapter};

fn card(suit: Suit, rank: u8) -> Card {
    Card::of(suit, rank).unwrap()
}

/// Both players, with the whole deck split between them by `to_first`.
fn split_deck(to_first: impl Fn(Card) -> bool) -> PlayerMap<Player> {
    let (first, second): (Vec<Card>, Vec<Card>) =
        (1..=40).filter_map(Card::from_id).partition(|&c| to_first(c));

    let mut players = PlayerMap::from_pair(Player::new("Juan"), Player::new("María"));
    if !first.is_empty() {
        players[PlayerId::FIRST].add_trick(&Trick::leftovers(first));
    }
    if !second.is_empty() {
        players[PlayerId::SECOND].add_trick(&Trick::leftovers(second));
    }
    players
}

/// Test a split where one player has every gold and the other every seven.
#[test]
fn test_golds_against_sevens() {
    let players = split_deck(|c| c.is_gold());
    let report = ScoringReport::compute(&players);

    let golds = report.get(PlayerId::FIRST);
    assert_eq!(golds.cards, 10);
    assert_eq!(golds.gold_points, 2);
    assert_eq!(golds.seven_of_gold_points, 1);
    assert_eq!(golds.sevens, 1);
    assert_eq!(golds.sevens_points, 0);
    assert_eq!(golds.total(), 3);

    let rest = report.get(PlayerId::SECOND);
    assert_eq!(rest.cards, 30);
    assert_eq!(rest.sevens, 3);
    assert_eq!(rest.sevens_points, 1);
    assert_eq!(rest.card_majority_points, 1);
    // Exactly 30 is not enough for the overwhelming bonus.
    assert_eq!(rest.overwhelming_points, 0);
    assert_eq!(rest.total(), 2);
}

/// Test that an even split scores nothing for card count.
#[test]
fn test_even_split() {
    let players = split_deck(|c| matches!(c.suit(), Suit::Gold | Suit::Cups));
    let report = ScoringReport::compute(&players);

    for score in report.players.values() {
        assert_eq!(score.cards, 20);
        assert_eq!(score.card_majority_points, 0);
        assert_eq!(score.overwhelming_points, 0);
        assert_eq!(score.sevens_points, 0);
        assert!(!score.lost_outright);
    }
    assert_eq!(report.get(PlayerId::FIRST).gold_points, 2);
    assert_eq!(report.get(PlayerId::SECOND).gold_points, 0);
}

/// Test that sevens are counted by rank across suits.
#[test]
fn test_sevens_counted_by_rank() {
    let players = split_deck(|c| c.rank() == 7 || c.suit() == Suit::Clubs);
    let first = ScoreBreakdown::for_player(&players[PlayerId::FIRST]);

    assert_eq!(first.cards, 13);
    assert_eq!(first.sevens, 4);
    assert_eq!(first.sevens_points, 2);
    assert!(first.has_seven_of_gold);
    assert_eq!(first.golds, 1);
    assert_eq!(first.gold_points, 0);
}

/// Test the total across several tricks of one player.
#[test]
fn test_points_across_tricks() {
    let mut player = Player::new("Ana");
    player.add_trick(&Trick::capture(
        card(Suit::Gold, 7),
        &[card(Suit::Cups, 7), card(Suit::Swords, 1)],
    ));
    player.add_trick(&Trick::capture(card(Suit::Clubs, 7), &[card(Suit::Gold, 8)]));
    player.add_trick(&Trick::capture(card(Suit::Gold, 5), &[card(Suit::Gold, 10)]));

    let score = ScoreBreakdown::for_player(&player);
    assert_eq!(score.tricks, 3);
    assert_eq!(score.cards, 7);
    assert_eq!(score.sevens, 3);
    assert_eq!(score.golds, 4);
    assert_eq!(score.escobas, 0);
    assert_eq!(score.sevens_points + score.seven_of_gold_points, 2);
    assert_eq!(score.total(), 2);
}

/// Test that scoring a finished game leaves the players untouched.
#[test]
fn test_scoring_is_read_only() {
    let mut game = GameBuilder::new().seed(11).build().unwrap();
    let report = game.run(&mut ScriptedAdapter::default()).unwrap();

    let before = game.state().players.clone();
    assert_eq!(game.score(), report);
    assert_eq!(game.score(), report);
    assert_eq!(game.state().players, before);
}

/// Test the report's serialized field names.
#[test]
fn test_report_json_shape() {
    let report = ScoringReport::compute(&split_deck(|c| c.id() <= 25));
    let json = serde_json::to_value(&report).unwrap();

    let first = &json["players"]["data"][0];
    assert_eq!(first["name"], "Juan");
    assert_eq!(first["cards"], 25);
    assert_eq!(first["gold_points"], 2);
    assert_eq!(first["card_majority_points"], 1);
    assert_eq!(first["lost_outright"], false);
}
