//! Round state: everything on and around the table.
//!
//! ## RoundState
//!
//! The two players, the table, the deck, whose turn it is, who captured
//! last and how many plays have been made. Owned by the `GameController`.
//!
//! ## RoundSnapshot
//!
//! Detached copy of what the current player can see, handed to the adapter
//! at the start of every turn.

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::player::{PlayerId, PlayerMap};
use crate::cards::{Card, Deck};
use crate::players::Player;
use crate::zones::Table;

/// Phases of a game, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Created, cards not dealt yet.
    DealingInitial,
    /// Plays in progress (including re-deals between them).
    Playing,
    /// All plays made; leftover table cards not assigned yet.
    FinalAssign,
    /// Leftovers assigned; the report can be computed.
    Scoring,
    /// Final report delivered.
    Done,
}

/// Mutable game state.
#[derive(Clone, Debug)]
pub struct RoundState {
    pub players: PlayerMap<Player>,
    pub table: Table,
    pub deck: Deck,

    /// Player whose turn it is.
    pub turn: PlayerId,

    /// Player who made the most recent capture.
    pub last_winner: Option<PlayerId>,

    /// Plays made so far.
    pub rounds_played: u32,
}

impl RoundState {
    /// Fresh state: empty hands and table, first player to move.
    #[must_use]
    pub fn new(first: Player, second: Player, deck: Deck) -> Self {
        Self {
            players: PlayerMap::from_pair(first, second),
            table: Table::new(),
            deck,
            turn: PlayerId::FIRST,
            last_winner: None,
            rounds_played: 0,
        }
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    /// Pass the turn to the other player.
    pub fn advance_turn(&mut self) {
        self.turn = self.turn.opponent();
    }

    #[must_use]
    pub fn both_hands_empty(&self) -> bool {
        self.players.values().all(Player::is_empty)
    }

    /// Deal up to `per_player` cards to each player, alternating, first
    /// player first. Stops as soon as the deck runs out.
    ///
    /// Returns the number of cards dealt.
    pub fn deal_hands(&mut self, per_player: usize) -> usize {
        let mut dealt = 0;
        for _ in 0..per_player {
            for id in PlayerId::all() {
                let Some(card) = self.deck.draw() else {
                    return dealt;
                };
                self.players[id].receive_card(card);
                dealt += 1;
            }
        }
        dealt
    }

    /// Draw up to `count` cards onto the table. Returns the number placed.
    pub fn deal_table(&mut self, count: usize) -> Result<usize> {
        let mut placed = 0;
        while placed < count {
            let Some(card) = self.deck.draw() else {
                break;
            };
            self.table.place(card)?;
            placed += 1;
        }
        Ok(placed)
    }

    /// What the current player sees at the start of their turn.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        let player = self.current_player();
        RoundSnapshot {
            round: self.rounds_played,
            current_player: self.turn,
            player_name: player.name().to_string(),
            hand: player.hand(),
            table: self.table.snapshot(),
            deck_remaining: self.deck.remaining(),
        }
    }
}

/// Detached view of the game for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// Zero-based play index.
    pub round: u32,
    pub current_player: PlayerId,
    pub player_name: String,
    pub hand: Vec<Card>,
    pub table: Vec<Card>,
    pub deck_remaining: usize,
}
