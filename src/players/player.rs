//! Players: a hand of cards and the tricks won so far.
//!
//! All statistics are folds over the stored tricks, recomputed on every
//! call so they always reflect the current state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Trick};
use crate::core::config::HAND_SIZE;
use crate::core::error::{EscobaError, Result};

/// One of the two players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,

    /// A hand never holds more than one deal's worth of cards.
    hand: SmallVec<[Card; HAND_SIZE]>,

    tricks: Vec<Trick>,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: SmallVec::new(),
            tricks: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Copy of the hand, in the order the cards were received.
    #[must_use]
    pub fn hand(&self) -> Vec<Card> {
        self.hand.to_vec()
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Copy of the tricks won, oldest first.
    #[must_use]
    pub fn tricks(&self) -> Vec<Trick> {
        self.tricks.clone()
    }

    #[must_use]
    pub fn trick_count(&self) -> usize {
        self.tricks.len()
    }

    /// Add a dealt card to the hand.
    pub fn receive_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Take a card out of the hand.
    ///
    /// Errors, leaving the hand untouched, if the card is not held.
    pub fn play_card(&mut self, card: Card) -> Result<()> {
        let index = self
            .hand
            .iter()
            .position(|&c| c == card)
            .ok_or_else(|| EscobaError::CardNotInHand {
                player: self.name.clone(),
                card,
            })?;
        self.hand.remove(index);
        Ok(())
    }

    /// Store a copy of a won trick.
    pub fn add_trick(&mut self, trick: &Trick) {
        self.tricks.push(trick.clone());
    }

    /// No cards left in hand.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    // === Statistics ===

    /// Number of sweeps (escobas).
    #[must_use]
    pub fn escobas(&self) -> usize {
        self.tricks.iter().filter(|t| t.is_sweep()).count()
    }

    /// Total cards captured across all tricks.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.tricks.iter().map(Trick::len).sum()
    }

    #[must_use]
    pub fn gold_count(&self) -> usize {
        self.tricks.iter().map(Trick::gold_count).sum()
    }

    #[must_use]
    pub fn sevens_count(&self) -> usize {
        self.tricks.iter().map(Trick::sevens_count).sum()
    }

    #[must_use]
    pub fn has_seven_of_gold(&self) -> bool {
        self.tricks.iter().any(Trick::has_seven_of_gold)
    }
}
