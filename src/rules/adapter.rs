//! Boundary between the rules engine and the presentation layer.
//!
//! The controller asks a `TableAdapter` which card to play and which table
//! cards to take, and tells it about sweeps, turn starts and the final
//! result. Console front ends, network bridges and test scripts all plug
//! in here.

use std::collections::VecDeque;

use crate::cards::Card;
use crate::core::state::RoundSnapshot;
use crate::players::Player;
use crate::rules::scoring::ScoringReport;

/// Input/output collaborator of the `GameController`.
///
/// ## Contract
///
/// - `request_card_choice` must return a card from the player's hand. The
///   controller reports anything else as `EscobaError::CardNotInHand`.
/// - `request_table_subset` returns the table cards to capture, or an empty
///   list to leave the played card on the table. The controller re-checks
///   the selection and leaves the card on the table if it does not add up
///   to 15, so adapters may pass raw user input through.
/// - Notifications are fire-and-forget.
pub trait TableAdapter {
    /// Which card `player` plays this turn.
    fn request_card_choice(&mut self, player: &Player) -> Card;

    /// Which table cards `played` should capture.
    fn request_table_subset(&mut self, table: &[Card], played: Card) -> Vec<Card>;

    /// A player emptied the table.
    fn notify_sweep(&mut self, _player_name: &str) {}

    /// A turn is about to start.
    fn notify_round_state(&mut self, _snapshot: &RoundSnapshot) {}

    /// The game is over.
    fn notify_final_result(&mut self, _report: &ScoringReport) {}
}

/// A scripted play: the card, then the table cards it tries to take.
pub type ScriptedMove = (Card, Vec<Card>);

/// Adapter that replays a fixed list of moves and records every
/// notification.
///
/// Once the script runs out it plays the first card in hand and leaves it
/// on the table.
///
/// # Panics
///
/// `request_card_choice` panics if the script is exhausted and the player's
/// hand is empty. `GameController` never asks a player with an empty hand.
///
/// ```
/// use escoba::rules::{GameBuilder, ScriptedAdapter};
///
/// let mut game = GameBuilder::new().seed(7).build().unwrap();
/// let mut adapter = ScriptedAdapter::default();
/// let report = game.run(&mut adapter).unwrap();
///
/// assert_eq!(adapter.round_states.len(), 36);
/// assert_eq!(adapter.final_report.as_ref(), Some(&report));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedAdapter {
    script: VecDeque<ScriptedMove>,
    pending_subset: Option<Vec<Card>>,

    /// Names passed to `notify_sweep`, in order.
    pub sweeps: Vec<String>,
    /// Every snapshot passed to `notify_round_state`.
    pub round_states: Vec<RoundSnapshot>,
    /// The report passed to `notify_final_result`.
    pub final_report: Option<ScoringReport>,
}

impl ScriptedAdapter {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = ScriptedMove>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Queue another move at the end of the script.
    pub fn push(&mut self, card: Card, subset: Vec<Card>) {
        self.script.push_back((card, subset));
    }

    /// Moves not played yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl TableAdapter for ScriptedAdapter {
    fn request_card_choice(&mut self, player: &Player) -> Card {
        if let Some((card, subset)) = self.script.pop_front() {
            self.pending_subset = Some(subset);
            return card;
        }
        self.pending_subset = Some(Vec::new());
        player
            .hand()
            .first()
            .copied()
            .expect("the controller only asks players holding cards")
    }

    fn request_table_subset(&mut self, _table: &[Card], _played: Card) -> Vec<Card> {
        self.pending_subset.take().unwrap_or_default()
    }

    fn notify_sweep(&mut self, player_name: &str) {
        self.sweeps.push(player_name.to_string());
    }

    fn notify_round_state(&mut self, snapshot: &RoundSnapshot) {
        self.round_states.push(snapshot.clone());
    }

    fn notify_final_result(&mut self, report: &ScoringReport) {
        self.final_report = Some(report.clone());
    }
}
