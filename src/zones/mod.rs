//! Shared zones of play.
//!
//! Escoba has a single shared zone, the table. Hands and captured tricks
//! belong to each `Player`.

pub mod table;

pub use table::{combination_sum, is_valid_combination, Table};
