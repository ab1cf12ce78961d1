//! Card system: cards, the deck and captured tricks.
//!
//! ## Key Types
//!
//! - `Suit`: the four Spanish suits
//! - `Card`: immutable card value, compared by id
//! - `Deck`: draw-once 40-card deck with a cursor
//! - `Trick`: cards captured together, with the sweep flag

pub mod card;
pub mod deck;
pub mod trick;

pub use card::{Card, Suit};
pub use deck::Deck;
pub use trick::Trick;
