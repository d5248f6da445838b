use thiserror::Error;

use crate::cards::Card;
use crate::player::PlayerId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid raise amount: {amount}, minimum raise-to: {minimum}")]
    InvalidRaise { amount: u32, minimum: u32 },
    #[error("Raise requires an amount")]
    MissingRaiseAmount,
    #[error("Unknown action: {0}")]
    UnknownAction(String),
    #[error("Deck is empty")]
    DeckEmpty,
    #[error("Hand evaluation needs {expected} cards, got {actual}")]
    InvalidCardCount { expected: &'static str, actual: usize },
    #[error("Duplicate card {0}")]
    DuplicateCard(Card),
    #[error("Cannot parse card '{0}'")]
    CardParse(String),
    #[error("Hole cards already full")]
    HoleCardsFull,
    #[error("Community cards already full")]
    BoardFull,
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("A hand is already in progress")]
    HandInProgress,
    #[error("At least two players with chips are required")]
    NotEnoughPlayers,
    #[error("Table is full ({0} seats)")]
    TableFull(usize),
    #[error("No player at seat {0}")]
    InvalidSeat(usize),
    #[error("Unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("No strategy registered for player {0}")]
    MissingStrategy(PlayerId),
    #[error("Chips at the table would exceed {}", u32::MAX)]
    ChipOverflow,
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
}
