//! Victory detection.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::Rank;

/// State of play, derived from the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Won,
}

impl GameOutcome {
    /// Outcome of a board.
    #[must_use]
    pub fn of(board: &Board) -> Self {
        if is_won(board) {
            GameOutcome::Won
        } else {
            GameOutcome::InProgress
        }
    }
}

/// True iff every foundation holds its King.
#[must_use]
pub fn is_won(board: &Board) -> bool {
    board.foundations().iter().all(|top| *top == Some(Rank::KING))
}
