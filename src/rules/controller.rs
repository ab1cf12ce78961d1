//! The game controller: deal, play, re-deal, assign leftovers, score.
//!
//! ## Phases
//!
//! `DealingInitial -> Playing -> FinalAssign -> Scoring -> Done`
//!
//! A game always consists of exactly `TOTAL_PLAYS` (36) plays: every card
//! that does not start on the table is played from a hand once. After each
//! play the turn passes to the other player, whether or not anything was
//! captured, and when both hands are empty three more cards are dealt to
//! each player while the deck lasts.
//!
//! ## Usage
//!
//! ```
//! use escoba::rules::{GameBuilder, ScriptedAdapter};
//!
//! let mut game = GameBuilder::new()
//!     .player_names("Ana", "Luis")
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let report = game.run(&mut ScriptedAdapter::default()).unwrap();
//! let collected: usize = report.players.values().map(|s| s.cards).sum();
//! assert!(collected <= 40);
//! ```

use log::{debug, info, warn};
use rustc_hash::FxHashSet;

use super::adapter::TableAdapter;
use super::scoring::ScoringReport;
use crate::cards::{Card, Deck, Trick};
use crate::core::action::{MoveOutcome, MoveRecord};
use crate::core::config::{GameConfig, HAND_SIZE, INITIAL_TABLE_SIZE, TOTAL_PLAYS};
use crate::core::error::{EscobaError, Result};
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::core::state::{GamePhase, RoundState};
use crate::players::Player;
use crate::zones::is_valid_combination;

/// Drives one game from the initial deal to the final report.
#[derive(Clone, Debug)]
pub struct GameController {
    config: GameConfig,
    state: RoundState,
    rng: GameRng,
    phase: GamePhase,
    history: Vec<MoveRecord>,
}

impl GameController {
    /// New game with a fresh deck.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_deck(config, Deck::new())
    }

    /// New game with the given deck. Combine with `shuffle: false` in the
    /// config to play a stacked deck in its exact order.
    pub fn with_deck(config: GameConfig, deck: Deck) -> Result<Self> {
        config.validate()?;

        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let [first, second] = config.player_names.clone();
        let state = RoundState::new(Player::new(first), Player::new(second), deck);

        Ok(Self {
            config,
            state,
            rng,
            phase: GamePhase::DealingInitial,
            history: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Every play made so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Seed of the shuffle RNG, for replaying an unseeded game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    fn require_phase(&self, action: &'static str, expected: GamePhase) -> Result<()> {
        match self.phase {
            phase if phase == expected => Ok(()),
            GamePhase::Done => Err(EscobaError::GameFinished),
            phase => Err(EscobaError::WrongPhase(action, phase)),
        }
    }

    // === Dealing ===

    /// Shuffle (unless disabled), deal three cards to each player
    /// alternately and place four cards on the table.
    pub fn deal_initial(&mut self) -> Result<()> {
        self.require_phase("deal", GamePhase::DealingInitial)?;

        if self.config.shuffle {
            self.state.deck.shuffle(&mut self.rng);
        }

        let dealt = self.state.deal_hands(HAND_SIZE);
        let placed = self.state.deal_table(INITIAL_TABLE_SIZE)?;
        info!(
            "initial deal: {} cards to players, {} on the table, {} left in deck",
            dealt,
            placed,
            self.state.deck.remaining()
        );

        self.phase = GamePhase::Playing;
        Ok(())
    }

    // === Playing ===

    /// Play one full turn with input from `adapter`.
    ///
    /// Notifies the round state, asks for a card and a table subset,
    /// processes the move, then counts the play, re-deals if both hands
    /// are empty and passes the turn.
    pub fn play_turn<A: TableAdapter + ?Sized>(&mut self, adapter: &mut A) -> Result<MoveOutcome> {
        self.require_phase("play", GamePhase::Playing)?;

        adapter.notify_round_state(&self.state.snapshot());

        let card = adapter.request_card_choice(self.state.current_player());
        let subset = adapter.request_table_subset(&self.state.table.snapshot(), card);

        let outcome = self.process_move(adapter, card, &subset)?;
        self.complete_play();
        Ok(outcome)
    }

    /// Apply the current player's move without advancing the game.
    ///
    /// A non-empty `candidates` list is a capture attempt. It is re-checked
    /// here: duplicates are collapsed, and if any card is not on the table
    /// or the sum is not 15, the played card is left on the table instead.
    /// Cards are matched by id and the engine's own copies from the hand and
    /// the table are used from then on.
    /// On a capture that empties the table the trick is marked as a sweep
    /// and `notify_sweep` fires before the trick is stored.
    ///
    /// Errors only if `card` is not in the current player's hand, in which
    /// case nothing changes.
    pub fn process_move<A: TableAdapter + ?Sized>(
        &mut self,
        adapter: &mut A,
        card: Card,
        candidates: &[Card],
    ) -> Result<MoveOutcome> {
        self.require_phase("play", GamePhase::Playing)?;

        let player_id = self.state.turn;
        let player = self.state.player(player_id);
        let Some(card) = player.hand().into_iter().find(|&c| c == card) else {
            return Err(EscobaError::CardNotInHand {
                player: player.name().to_string(),
                card,
            });
        };

        let mut seen = FxHashSet::default();
        let mut captured = Vec::with_capacity(candidates.len());
        for &candidate in candidates {
            if !seen.insert(candidate.id()) {
                continue;
            }
            match self.state.table.get(candidate) {
                Some(stored) => captured.push(stored),
                None => {
                    warn!("{} tried to capture {}, which is not on the table", card, candidate);
                    return self.leave_on_table(player_id, card, true);
                }
            }
        }

        if captured.is_empty() {
            return self.leave_on_table(player_id, card, false);
        }

        if !is_valid_combination(card, &captured) {
            warn!("{} cannot capture {:?}: the sum is not 15", card, captured);
            return self.leave_on_table(player_id, card, true);
        }

        let mut trick = Trick::capture(card, &captured);
        self.state.player_mut(player_id).play_card(card)?;
        for &taken in &captured {
            self.state.table.remove(taken)?;
        }

        let sweep = self.state.table.is_empty();
        if sweep {
            trick.mark_sweep();
            let name = self.state.player(player_id).name().to_string();
            info!("escoba by {}", name);
            adapter.notify_sweep(&name);
        }

        self.state.player_mut(player_id).add_trick(&trick);
        self.state.last_winner = Some(player_id);

        debug!(
            "round {}: {} captured {} card(s) with {}",
            self.state.rounds_played,
            player_id,
            captured.len(),
            card
        );
        self.record(player_id, card, &captured, sweep);

        Ok(MoveOutcome::Captured {
            taken: captured.len(),
            sweep,
        })
    }

    fn leave_on_table(
        &mut self,
        player_id: PlayerId,
        card: Card,
        rejected: bool,
    ) -> Result<MoveOutcome> {
        self.state.player_mut(player_id).play_card(card)?;
        self.state.table.place(card)?;

        debug!(
            "round {}: {} left {} on the table",
            self.state.rounds_played, player_id, card
        );
        self.record(player_id, card, &[], false);

        Ok(MoveOutcome::Left { rejected })
    }

    fn record(&mut self, player: PlayerId, card: Card, captured: &[Card], sweep: bool) {
        self.history.push(MoveRecord {
            player,
            round: self.state.rounds_played,
            card,
            captured: captured.iter().copied().collect(),
            sweep,
        });
    }

    /// Count the play, re-deal when both hands are empty and pass the turn.
    fn complete_play(&mut self) {
        self.state.rounds_played += 1;

        if self.state.both_hands_empty() && !self.state.deck.is_empty() {
            let dealt = self.state.deal_hands(HAND_SIZE);
            if dealt < HAND_SIZE * 2 {
                warn!("deck ran out mid-deal after {} card(s)", dealt);
            }
            info!(
                "re-deal after round {}: {} cards left in deck",
                self.state.rounds_played,
                self.state.deck.remaining()
            );
        }

        self.state.advance_turn();

        if self.state.rounds_played >= TOTAL_PLAYS {
            self.phase = GamePhase::FinalAssign;
        }
    }

    // === End of game ===

    /// Give the cards left on the table to the last player who captured.
    ///
    /// The leftovers form one trick that never counts as a sweep. Returns
    /// who received them, if anyone did.
    pub fn assign_leftovers(&mut self) -> Result<Option<PlayerId>> {
        self.require_phase("assign leftovers", GamePhase::FinalAssign)?;
        self.phase = GamePhase::Scoring;

        let Some(winner) = self.state.last_winner else {
            return Ok(None);
        };
        if self.state.table.is_empty() {
            return Ok(None);
        }

        let trick = Trick::leftovers(self.state.table.take_all());
        info!("{} leftover card(s) go to {}", trick.len(), winner);
        self.state.player_mut(winner).add_trick(&trick);
        Ok(Some(winner))
    }

    /// Score both players from their current tricks.
    #[must_use]
    pub fn score(&self) -> ScoringReport {
        ScoringReport::compute(&self.state.players)
    }

    /// Assign leftovers if not done yet, score, and deliver the report.
    pub fn finish<A: TableAdapter + ?Sized>(&mut self, adapter: &mut A) -> Result<ScoringReport> {
        if self.phase == GamePhase::FinalAssign {
            self.assign_leftovers()?;
        }
        self.require_phase("score", GamePhase::Scoring)?;

        let report = self.score();
        for (id, score) in report.players.iter() {
            info!(
                "{} ({}): {} points from {} trick(s), {} card(s){}",
                score.name,
                id,
                score.total(),
                score.tricks,
                score.cards,
                if score.lost_outright { ", lost outright" } else { "" }
            );
        }

        adapter.notify_final_result(&report);
        self.phase = GamePhase::Done;
        Ok(report)
    }

    /// Play the whole game.
    ///
    /// Only adapter contract violations (a card that is not in the player's
    /// hand) end the game early with an error.
    pub fn run<A: TableAdapter + ?Sized>(&mut self, adapter: &mut A) -> Result<ScoringReport> {
        if self.phase == GamePhase::DealingInitial {
            info!(
                "new game: {} vs {} (seed {})",
                self.config.player_names[0],
                self.config.player_names[1],
                self.rng.seed()
            );
            self.deal_initial()?;
        }

        while self.phase == GamePhase::Playing {
            self.play_turn(adapter)?;
        }

        self.finish(adapter)
    }
}

/// Builder for a `GameController`.
///
/// ```
/// use escoba::core::GamePhase;
/// use escoba::rules::GameBuilder;
///
/// let game = GameBuilder::new().player_names("Ana", "Luis").seed(1).build().unwrap();
/// assert_eq!(game.phase(), GamePhase::DealingInitial);
/// assert_eq!(game.seed(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Deck>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.config = self.config.with_names(first, second);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.config = self.config.with_shuffle(shuffle);
        self
    }

    /// Play with this deck instead of a fresh one.
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Play a stacked deck in exactly the given order (disables shuffling).
    pub fn stacked(self, order: Vec<Card>) -> Result<Self> {
        Ok(self.deck(Deck::stacked(order)?).shuffle(false))
    }

    pub fn build(self) -> Result<GameController> {
        GameController::with_deck(self.config, self.deck.unwrap_or_default())
    }
}
