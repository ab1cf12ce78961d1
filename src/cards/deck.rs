//! The draw-once 40-card deck.
//!
//! The deck keeps all 40 cards and a cursor. Cards before the cursor have
//! been drawn and are never looked at again; shuffling only permutes the
//! undrawn slice.

use rustc_hash::FxHashSet;

use super::card::Card;
use crate::core::config::DECK_SIZE;
use crate::core::error::{EscobaError, Result};
use crate::core::rng::GameRng;

/// A Spanish deck without 8s and 9s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A full deck in construction order (gold 1..10, cups, swords, clubs).
    #[must_use]
    pub fn new() -> Self {
        let cards = (1..=DECK_SIZE as u8).filter_map(Card::from_id).collect();
        Self { cards, cursor: 0 }
    }

    /// A full deck in a caller-chosen order; the first card is drawn first.
    ///
    /// `order` must contain each of the 40 cards exactly once.
    ///
    /// ```
    /// use escoba::cards::{Card, Deck};
    ///
    /// let order: Vec<Card> = (1..=40).rev().filter_map(Card::from_id).collect();
    /// let mut deck = Deck::stacked(order).unwrap();
    /// assert_eq!(deck.draw().map(|c| c.id()), Some(40));
    /// ```
    pub fn stacked(order: Vec<Card>) -> Result<Self> {
        if order.len() != DECK_SIZE {
            return Err(EscobaError::InvalidDeck(format!(
                "expected {} cards, got {}",
                DECK_SIZE,
                order.len()
            )));
        }

        let mut seen = FxHashSet::default();
        for card in &order {
            if !seen.insert(card.id()) {
                return Err(EscobaError::InvalidDeck(format!("{} appears twice", card)));
            }
        }

        Ok(Self {
            cards: order,
            cursor: 0,
        })
    }

    /// Randomize the order of the undrawn cards.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards[self.cursor..]);
    }

    /// Draw the next card, or `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(card)
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Copy of the undrawn cards, next card first.
    #[must_use]
    pub fn undrawn(&self) -> Vec<Card> {
        self.cards[self.cursor..].to_vec()
    }
}
