//! Move representation: the played card plus the table cards taken.
//!
//! Every play is one `MoveRecord` in the controller's history. A move with
//! no captured cards left its card on the table.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::Card;

/// A completed play, as stored in the game history.
///
/// ```
/// use escoba::cards::{Card, Suit};
/// use escoba::core::{MoveRecord, PlayerId};
///
/// let record = MoveRecord {
///     player: PlayerId::FIRST,
///     round: 0,
///     card: Card::of(Suit::Gold, 5).unwrap(),
///     captured: Default::default(),
///     sweep: false,
/// };
/// assert!(!record.is_capture());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who played.
    pub player: PlayerId,

    /// Zero-based index of the play within the game.
    pub round: u32,

    /// Card played from hand.
    pub card: Card,

    /// Table cards captured. Empty when the card was left on the table.
    /// SmallVec covers the usual one to three captured cards without
    /// allocating.
    pub captured: SmallVec<[Card; 3]>,

    /// The capture emptied the table.
    pub sweep: bool,
}

impl MoveRecord {
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

/// What processing a single play did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The card captured table cards.
    Captured {
        /// Number of table cards taken.
        taken: usize,
        /// The table was left empty.
        sweep: bool,
    },
    /// The card was placed on the table.
    Left {
        /// A non-empty selection failed the 15-point check.
        rejected: bool,
    },
}

impl MoveOutcome {
    #[must_use]
    pub fn is_capture(&self) -> bool {
        matches!(self, MoveOutcome::Captured { .. })
    }

    #[must_use]
    pub fn is_sweep(&self) -> bool {
        matches!(self, MoveOutcome::Captured { sweep: true, .. })
    }
}
