//! Error types for the few fallible entry points.
//!
//! Illegal moves are not errors. These only cover inputs that arrive from
//! outside the engine: deal numbers, configuration and hand-built layouts.

use thiserror::Error;

use crate::cards::Card;

/// A deal number that is not a 7-digit decimal without a leading zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("seed is empty")]
    Empty,
    #[error("seed contains a non-digit character {found:?}")]
    NonDigit { found: char },
    #[error("seed must have exactly {expected} digits, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("seed must not start with a zero")]
    LeadingZero,
    #[error("seed {value} is outside {min}..={max}")]
    OutOfRange { value: u64, min: u64, max: u64 },
}

/// Invalid engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("history capacity must be at least {minimum}, got {actual}")]
    HistoryTooSmall { minimum: usize, actual: usize },
}

/// A hand-built board that cannot exist in a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("cascade {index} holds {len} cards, capacity is {capacity}")]
    CascadeOverflow {
        index: usize,
        len: usize,
        capacity: usize,
    },
    #[error("no {what} with index {index}")]
    NoSuchSlot { what: &'static str, index: usize },
    #[error("deck is incomplete: {missing} card(s) missing")]
    MissingCards { missing: usize },
}
