//! Tricks (bazas): the cards taken together in one capture.
//!
//! A trick is the played card followed by the table cards it captured. It
//! is marked as a sweep (escoba) when the capture emptied the table. Tricks
//! are only assembled by the controller; once stored on a player they are
//! never modified again.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// A captured set of cards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trick {
    cards: Vec<Card>,
    sweep: bool,
}

impl Trick {
    /// Trick for a capture: the played card first, then the captured cards.
    #[must_use]
    pub fn capture(played: Card, captured: &[Card]) -> Self {
        let mut cards = Vec::with_capacity(captured.len() + 1);
        cards.push(played);
        cards.extend_from_slice(captured);
        Self {
            cards,
            sweep: false,
        }
    }

    /// Trick holding the table cards left over at the end of the game.
    ///
    /// Never a sweep, even though collecting it empties the table.
    #[must_use]
    pub fn leftovers(cards: Vec<Card>) -> Self {
        Self {
            cards,
            sweep: false,
        }
    }

    /// Flag this trick as a sweep.
    pub(crate) fn mark_sweep(&mut self) {
        self.sweep = true;
    }

    #[must_use]
    pub fn is_sweep(&self) -> bool {
        self.sweep
    }

    /// Copy of the cards in capture order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cards.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    #[must_use]
    pub fn gold_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_gold()).count()
    }

    #[must_use]
    pub fn sevens_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_seven()).count()
    }

    #[must_use]
    pub fn has_seven_of_gold(&self) -> bool {
        self.cards.iter().any(|c| c.is_seven_of_gold())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn card(suit: Suit, rank: u8) -> Card {
        Card::of(suit, rank).unwrap()
    }

    #[test]
    fn test_capture_order() {
        let played = card(Suit::Cups, 5);
        let trick = Trick::capture(played, &[card(Suit::Gold, 4), card(Suit::Clubs, 6)]);

        assert_eq!(trick.len(), 3);
        assert_eq!(trick.cards()[0], played);
        assert!(!trick.is_sweep());
    }

    #[test]
    fn test_cards_is_detached() {
        let trick = Trick::capture(card(Suit::Cups, 5), &[card(Suit::Gold, 10)]);
        let mut copy = trick.cards();
        copy.clear();
        assert_eq!(trick.len(), 2);
    }

    #[test]
    fn test_counts() {
        let trick = Trick::capture(
            card(Suit::Gold, 7),
            &[card(Suit::Cups, 7), card(Suit::Gold, 1)],
        );

        assert_eq!(trick.gold_count(), 2);
        assert_eq!(trick.sevens_count(), 2);
        assert!(trick.has_seven_of_gold());
    }

    #[test]
    fn test_sevens_count_uses_rank() {
        // Id 7 is the seven of gold; id 17 is the seven of cups.
        let trick = Trick::capture(Card::from_id(17).unwrap(), &[Card::from_id(8).unwrap()]);
        assert_eq!(trick.sevens_count(), 1);
        assert!(!trick.has_seven_of_gold());
    }

    #[test]
    fn test_leftovers_never_sweep() {
        let trick = Trick::leftovers(vec![card(Suit::Swords, 2)]);
        assert!(!trick.is_sweep());
        assert!(Trick::leftovers(Vec::new()).is_empty());
    }

    #[test]
    fn test_mark_sweep() {
        let mut trick = Trick::capture(card(Suit::Swords, 10), &[card(Suit::Cups, 5)]);
        trick.mark_sweep();
        assert!(trick.is_sweep());
    }
}
