//! Game flow and scoring.
//!
//! - `controller`: the `GameController` state machine and its builder
//! - `adapter`: the `TableAdapter` trait through which the controller talks
//!   to a front end, plus a scripted implementation
//! - `scoring`: the end-of-game point criteria
//!
//! The engine never renders or reads input itself.

pub mod adapter;
pub mod controller;
pub mod scoring;

pub use adapter::{ScriptedAdapter, ScriptedMove, TableAdapter};
pub use controller::{GameBuilder, GameController};
pub use scoring::{ScoreBreakdown, ScoringReport};
