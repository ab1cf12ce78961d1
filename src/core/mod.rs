//! Core engine types: seats, state, moves, RNG, configuration, errors.
//!
//! This module holds the building blocks the controller works with. Card
//! values live in `cards`, the table in `zones` and players in `players`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use config::{
    GameConfig, CARDS_PER_SUIT, DECK_SIZE, HAND_SIZE, INITIAL_TABLE_SIZE, TARGET_SUM, TOTAL_PLAYS,
};
pub use action::{MoveOutcome, MoveRecord};
pub use state::{GamePhase, RoundSnapshot, RoundState};
pub use error::{EscobaError, Result};
