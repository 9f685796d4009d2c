//! Error types for game operations.

use thiserror::Error;

/// The deck ran out of cards while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("deck is empty: dealt {dealt} of {requested} requested cards")]
pub struct EmptyDeckError {
    /// Number of cards the caller asked for.
    pub requested: usize,
    /// Number of cards removed from the deck before it ran out.
    pub dealt: usize,
}

/// Errors that can occur while driving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round is not in a state that allows this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The deck ran out of cards.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Input that is neither hit nor stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected hit or stand (h/s)")]
pub struct ParseDecisionError;

/// Errors that can occur when reading the number of games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameCountError {
    /// Input is not an integer.
    #[error("not a number")]
    NotANumber,
    /// Input is zero or negative.
    #[error("number of games must be positive")]
    NotPositive,
    /// Input is a positive integer too large to count games with.
    #[error("number of games is too large")]
    TooLarge,
}

/// Errors that stop a session.
#[derive(Debug, Error)]
pub enum SessionError<E> {
    /// The table failed to read input or write output.
    #[error("table failed to read or write")]
    Table(#[source] E),
    /// A round action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
}
