use thiserror::Error;

use crate::cards::Card;
use crate::piles::PileKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("deck must contain exactly 52 cards, got {count}")]
    WrongDeckSize { count: usize },
    #[error("deck contains duplicate card {card}")]
    DuplicateCard { card: Card },
    #[error("no {kind} pile at index {index}")]
    NoSuchPile { kind: PileKind, index: usize },
    #[error("cannot take cards from {kind} pile {pile} starting at card {card}")]
    CannotTake { kind: PileKind, pile: usize, card: usize },
    #[error("cannot place those cards on {kind} pile {pile}")]
    CannotPlace { kind: PileKind, pile: usize },
    #[error("cannot move {moved} cards at once, free piles allow {capacity}")]
    MoveTooLarge { moved: usize, capacity: u64 },
    #[error("cascade count must be at least 4, got {count}")]
    TooFewCascades { count: usize },
    #[error("open count must be at least 1, got {count}")]
    TooFewOpens { count: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IllegalState {
    #[error("game has not been started")]
    NotStarted,
    #[error("game is already over")]
    GameOver,
}

/// Every engine failure is one of two kinds: bad arguments the caller can
/// correct and retry, or a call that is not legal in the current phase.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
    #[error(transparent)]
    IllegalState(#[from] IllegalState),
}
