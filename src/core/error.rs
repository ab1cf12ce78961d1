//! Error type shared by every engine component.
//!
//! Invalid 15-point combinations are not errors: the controller reports
//! them as a normal move outcome. Errors here signal that a caller broke
//! a contract (a card that is not where it was claimed to be, a malformed
//! deck or configuration, or a call made in the wrong phase).

use thiserror::Error;

use super::state::GamePhase;
use crate::cards::Card;

/// Errors raised by the Escoba engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EscobaError {
    #[error("{player}'s hand does not contain {card}")]
    CardNotInHand { player: String, card: Card },
    #[error("{0} is not on the table")]
    CardNotOnTable(Card),
    #[error("{0} is already on the table")]
    CardAlreadyOnTable(Card),
    #[error("no card has id {0}")]
    InvalidCardId(u8),
    #[error("no seat has id {0}")]
    InvalidPlayerId(u8),
    #[error("invalid deck: {0}")]
    InvalidDeck(String),
    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
    #[error("the game has already finished")]
    GameFinished,
    #[error("cannot {0}, current phase is {1:?}")]
    WrongPhase(&'static str, GamePhase),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EscobaError>;
