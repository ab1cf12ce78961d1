//! The table: face-up cards available for capture.
//!
//! Also home of the 15-point combination rule, which is the single source
//! of truth for whether a capture is legal.

use rustc_hash::FxHashSet;

use crate::cards::Card;
use crate::core::config::TARGET_SUM;
use crate::core::error::{EscobaError, Result};

/// Sum of the played card's rank and the ranks of the distinct candidates.
///
/// Candidates listed more than once (same id) are counted once.
#[must_use]
pub fn combination_sum(played: Card, candidates: &[Card]) -> u32 {
    let mut seen = FxHashSet::default();
    candidates
        .iter()
        .filter(|c| seen.insert(c.id()))
        .fold(u32::from(played.rank()), |sum, c| sum + u32::from(c.rank()))
}

/// Does playing `played` and taking `candidates` reach exactly 15?
///
/// A capture needs at least one table card, so an empty candidate list is
/// never valid.
///
/// ```
/// use escoba::cards::{Card, Suit};
/// use escoba::zones::is_valid_combination;
///
/// let five = Card::of(Suit::Cups, 5).unwrap();
/// let four = Card::of(Suit::Gold, 4).unwrap();
/// let six = Card::of(Suit::Clubs, 6).unwrap();
///
/// assert!(is_valid_combination(five, &[four, six]));
/// assert!(is_valid_combination(five, &[six, four, six]));
/// assert!(!is_valid_combination(five, &[four]));
/// assert!(!is_valid_combination(five, &[]));
/// ```
#[must_use]
pub fn is_valid_combination(played: Card, candidates: &[Card]) -> bool {
    !candidates.is_empty() && combination_sum(played, candidates) == TARGET_SUM
}

/// Cards currently in play, in the order they were placed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    cards: Vec<Card>,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a card face up at the end of the table.
    ///
    /// Errors, leaving the table untouched, if the card is already there.
    pub fn place(&mut self, card: Card) -> Result<()> {
        if self.contains(card) {
            return Err(EscobaError::CardAlreadyOnTable(card));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Take a card off the table.
    ///
    /// Errors, leaving the table untouched, if the card is not there.
    pub fn remove(&mut self, card: Card) -> Result<()> {
        let index = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or(EscobaError::CardNotOnTable(card))?;
        self.cards.remove(index);
        Ok(())
    }

    /// Remove and return every card, in order.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Detached copy of the cards, in order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Card> {
        self.cards.clone()
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// The table's own copy of `card`, matched by id.
    #[must_use]
    pub fn get(&self, card: Card) -> Option<Card> {
        self.cards.iter().copied().find(|&c| c == card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// See [`is_valid_combination`].
    #[must_use]
    pub fn is_valid_combination(&self, played: Card, candidates: &[Card]) -> bool {
        is_valid_combination(played, candidates)
    }

    /// Every subset of the table that `played` could capture.
    ///
    /// Subsets keep table order and are listed in lexicographic order of
    /// their table positions.
    #[must_use]
    pub fn capture_options(&self, played: Card) -> Vec<Vec<Card>> {
        let mut options = Vec::new();
        let mut current = Vec::new();
        collect_options(
            &self.cards,
            0,
            u32::from(played.rank()),
            &mut current,
            &mut options,
        );
        options
    }
}

fn collect_options(
    cards: &[Card],
    start: usize,
    sum: u32,
    current: &mut Vec<Card>,
    out: &mut Vec<Vec<Card>>,
) {
    for (offset, &card) in cards[start..].iter().enumerate() {
        let next = sum + u32::from(card.rank());
        if next > TARGET_SUM {
            continue;
        }
        current.push(card);
        if next == TARGET_SUM {
            out.push(current.clone());
        } else {
            collect_options(cards, start + offset + 1, next, current, out);
        }
        current.pop();
    }
}
