//! Cards of the 40-card Spanish deck.
//!
//! Every card is identified by an id in `1..=40`. Ids are assigned suit by
//! suit in `Suit::ALL` order, ranks ascending, so the id alone determines
//! the card:
//!
//! ```
//! use escoba::cards::{Card, Suit};
//!
//! let guindis = Card::of(Suit::Gold, 7).unwrap();
//! assert_eq!(guindis.id(), 7);
//! assert_eq!(Card::from_id(7), Some(guindis));
//! assert_eq!(guindis.to_string(), "Siete de oros (7)");
//! ```

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::core::config::CARDS_PER_SUIT;
use crate::core::error::EscobaError;

/// The four Spanish suits, in deck construction order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Gold,
    Cups,
    Swords,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Gold, Suit::Cups, Suit::Swords, Suit::Clubs];

    fn ordinal(self) -> u8 {
        self as u8
    }

    /// Spanish name, as printed on the cards.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Suit::Gold => "oros",
            Suit::Cups => "copas",
            Suit::Swords => "espadas",
            Suit::Clubs => "bastos",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

const RANK_NAMES: [&str; 10] = [
    "As", "Dos", "Tres", "Cuatro", "Cinco", "Seis", "Siete", "Sota", "Caballo", "Rey",
];

/// A single card.
///
/// Immutable and `Copy`. Equality, ordering and hashing use the id only.
/// The rank doubles as the point value: 8, 9 and 10 are the sota, caballo
/// and rey.
///
/// Serialized as the bare id. Suit and rank are always rebuilt from it, so
/// no deserialized card can disagree with the deck layout.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card {
    id: u8,
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Card with the given id, or `None` outside `1..=40`.
    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        let per_suit = CARDS_PER_SUIT as u8;
        if !(1..=per_suit * 4).contains(&id) {
            return None;
        }
        let index = id - 1;
        Some(Self {
            id,
            suit: Suit::ALL[usize::from(index / per_suit)],
            rank: index % per_suit + 1,
        })
    }

    /// Card of the given suit and rank, or `None` if the rank is outside `1..=10`.
    #[must_use]
    pub fn of(suit: Suit, rank: u8) -> Option<Self> {
        if !(1..=CARDS_PER_SUIT as u8).contains(&rank) {
            return None;
        }
        Self::from_id(suit.ordinal() * CARDS_PER_SUIT as u8 + rank)
    }

    #[must_use]
    pub const fn id(self) -> u8 {
        self.id
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Face value, also the card's contribution to a 15-point sum.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[must_use]
    pub fn is_gold(self) -> bool {
        self.suit == Suit::Gold
    }

    #[must_use]
    pub const fn is_seven(self) -> bool {
        self.rank == 7
    }

    /// The seven of gold ("guindis").
    #[must_use]
    pub fn is_seven_of_gold(self) -> bool {
        self.is_gold() && self.is_seven()
    }
}

impl TryFrom<u8> for Card {
    type Error = EscobaError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Card::from_id(id).ok_or(EscobaError::InvalidCardId(id))
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.id
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} de {} ({})",
            RANK_NAMES[usize::from(self.rank - 1)],
            self.suit,
            self.rank
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_layout() {
        let first = Card::from_id(1).unwrap();
        assert_eq!((first.suit(), first.rank()), (Suit::Gold, 1));

        let eleventh = Card::from_id(11).unwrap();
        assert_eq!((eleventh.suit(), eleventh.rank()), (Suit::Cups, 1));

        let last = Card::from_id(40).unwrap();
        assert_eq!((last.suit(), last.rank()), (Suit::Clubs, 10));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(Card::from_id(0), None);
        assert_eq!(Card::from_id(41), None);
        assert_eq!(Card::of(Suit::Cups, 0), None);
        assert_eq!(Card::of(Suit::Cups, 11), None);
    }

    #[test]
    fn test_of_matches_from_id() {
        for suit in Suit::ALL {
            for rank in 1..=10 {
                let card = Card::of(suit, rank).unwrap();
                assert_eq!(card.suit(), suit);
                assert_eq!(card.rank(), rank);
                assert_eq!(Card::from_id(card.id()), Some(card));
            }
        }
    }

    #[test]
    fn test_seven_of_gold() {
        let guindis = Card::of(Suit::Gold, 7).unwrap();
        assert!(guindis.is_seven_of_gold());
        assert!(!Card::of(Suit::Cups, 7).unwrap().is_seven_of_gold());
        assert!(!Card::of(Suit::Gold, 6).unwrap().is_seven_of_gold());
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::of(Suit::Swords, 1).unwrap().to_string(), "As de espadas (1)");
        assert_eq!(Card::of(Suit::Clubs, 10).unwrap().to_string(), "Rey de bastos (10)");
        assert_eq!(Card::of(Suit::Cups, 8).unwrap().to_string(), "Sota de copas (8)");
    }

    #[test]
    fn test_serialization() {
        let card = Card::of(Suit::Cups, 3).unwrap();
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "13");

        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
        assert_eq!((back.suit(), back.rank()), (Suit::Cups, 3));
    }

    #[test]
    fn test_deserialize_rejects_bad_ids() {
        assert!(serde_json::from_str::<Card>("0").is_err());
        assert!(serde_json::from_str::<Card>("41").is_err());
        assert!(serde_json::from_str::<Card>(r#"{"id":1,"suit":"Gold","rank":10}"#).is_err());
        assert!(serde_json::from_str::<Card>(r#"{"id":3,"suit":"Gold","rank":0}"#).is_err());
        assert_eq!(Card::try_from(41), Err(EscobaError::InvalidCardId(41)));
    }
}
