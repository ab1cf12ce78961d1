//! Game configuration and rule constants.
//!
//! The rule constants describe the classic game only: a 40-card deck with
//! no 8s or 9s, two players, three-card hands and captures summing to 15.
//! `GameConfig` carries what legitimately varies between games: player
//! names, the RNG seed and whether the deck is shuffled at all.

use serde::{Deserialize, Serialize};

use super::error::{EscobaError, Result};

/// Cards in a full deck.
pub const DECK_SIZE: usize = 40;

/// Cards in each of the four suits.
pub const CARDS_PER_SUIT: usize = 10;

/// Sum a capture must reach.
pub const TARGET_SUM: u32 = 15;

/// Cards dealt to each player per deal.
pub const HAND_SIZE: usize = 3;

/// Cards placed face up on the table at the start.
pub const INITIAL_TABLE_SIZE: usize = 4;

/// Individual card plays in a full game: every card not initially placed on
/// the table is played from a hand exactly once.
pub const TOTAL_PLAYS: u32 = (DECK_SIZE - INITIAL_TABLE_SIZE) as u32;

/// Per-game configuration.
///
/// ```
/// use escoba::core::GameConfig;
///
/// let config = GameConfig::default().with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Names of the two players, in seat order.
    pub player_names: [String; 2],

    /// RNG seed. `None` draws one from entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Shuffle before the initial deal. Disable for stacked decks.
    #[serde(default = "default_shuffle")]
    pub shuffle: bool,
}

fn default_shuffle() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_names: ["Juan".to_string(), "María".to_string()],
            seed: None,
            shuffle: true,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names = [first.into(), second.into()];
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Check the configuration is playable.
    ///
    /// Names must be non-blank and distinct, since sweep notifications and
    /// the final report identify players by name.
    pub fn validate(&self) -> Result<()> {
        for name in &self.player_names {
            if name.trim().is_empty() {
                return Err(EscobaError::InvalidConfig(
                    "player names must not be blank".to_string(),
                ));
            }
        }

        if self.player_names[0] == self.player_names[1] {
            return Err(EscobaError::InvalidConfig(format!(
                "both players are named {:?}",
                self.player_names[0]
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_constants() {
        assert_eq!(TOTAL_PLAYS, 36);
        assert_eq!(DECK_SIZE, CARDS_PER_SUIT * 4);
    }

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.shuffle);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_blank_name_rejected() {
        let config = GameConfig::default().with_names("Ana", "  ");
        assert!(matches!(config.validate(), Err(EscobaError::InvalidConfig(_))));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let config = GameConfig::default().with_names("Ana", "Ana");
        assert!(matches!(config.validate(), Err(EscobaError::InvalidConfig(_))));
    }

    #[test]
    fn test_serde_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"player_names":["Ana","Luis"]}"#).unwrap();
        assert_eq!(config.seed, None);
        assert!(config.shuffle);

        let json = serde_json::to_string(&config.clone().with_seed(9)).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, Some(9));
    }
}
