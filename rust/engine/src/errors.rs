use thiserror::Error;

use crate::player::ActionKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Illegal action {action} by seat {seat}: {reason}")]
    IllegalAction {
        seat: usize,
        action: ActionKind,
        reason: &'static str,
    },
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("Invalid bet amount: {amount}")]
    InvalidAmount { amount: u32 },
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Community cards must be revealed before betting continues")]
    RevealPending,
    #[error("No community cards are waiting to be revealed")]
    NothingToReveal,
    #[error("Hand is not complete")]
    HandNotComplete,
    #[error("Hand already complete")]
    HandAlreadyComplete,
    #[error("Hand already settled")]
    AlreadySettled,
    #[error("At least two seats need chips to start a hand")]
    NotEnoughPlayers,
    #[error("Invalid card: {0}")]
    InvalidCard(String),
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
}
