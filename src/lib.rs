//! # escoba
//!
//! Rules engine for Escoba, the two-player Spanish "sweep" card game.
//!
//! ## Rules in brief
//!
//! - A 40-card Spanish deck (no 8s or 9s); ranks 1-10 are also point values.
//! - Three cards to each player, four face up on the table; three more each
//!   whenever both hands are empty.
//! - A played card captures any table cards whose ranks, added to its own,
//!   make exactly 15. Emptying the table is an escoba (sweep).
//! - After 36 plays the last player to capture takes what is left.
//! - Points for escobas, golds, the seven of gold, sevens and card count.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: rendering and input live behind `rules::TableAdapter`.
//! 2. **One source of truth**: the controller re-checks every capture with
//!    the table's 15-point validator.
//! 3. **Detached reads**: hands, tricks and the table are handed out as
//!    copies, never as views into engine state.
//! 4. **Deterministic when asked**: shuffles come from a seedable `GameRng`.
//!
//! ## Modules
//!
//! - `core`: seats, round state, moves, RNG, configuration, errors
//! - `cards`: cards, the deck and tricks
//! - `zones`: the table and the combination validator
//! - `players`: hands, won tricks and statistics
//! - `rules`: the game controller, adapter trait and scoring

pub mod core;
pub mod cards;
pub mod zones;
pub mod players;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, GameRngState,
    GameConfig, GamePhase, RoundState, RoundSnapshot,
    MoveOutcome, MoveRecord,
    EscobaError, Result,
};

pub use crate::cards::{Card, Deck, Suit, Trick};

pub use crate::zones::{combination_sum, is_valid_combination, Table};

pub use crate::players::Player;

pub use crate::rules::{
    GameBuilder, GameController,
    ScoreBreakdown, ScoringReport,
    ScriptedAdapter, ScriptedMove, TableAdapter,
};
