//! Player entities: hands, won tricks and derived statistics.

pub mod player;

pub use player::Player;
