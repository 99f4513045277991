//! Planned moves and the move executor.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::validator::plan_move;
use crate::board::{Board, Destination, Slot};

/// A validated relocation of `count` cards from the top of `from`.
///
/// Obtain moves from `plan_move`/`plan_foundation_move`. `apply_move`
/// refuses any move the planner would not produce for the same board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Slot,
    pub to: Destination,
    pub count: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.count)
    }
}

/// Apply a move, producing the next board.
///
/// Returns `None` unless `mv` is exactly what `plan_move` plans for its
/// source and destination on `board`. The input board is left untouched;
/// callers swap in the result whole.
#[must_use]
pub fn apply_move(board: &Board, mv: &Move) -> Option<Board> {
    if plan_move(board, mv.from, mv.to) != Some(*mv) {
        trace!(%mv, "move does not fit the board");
        return None;
    }
    Some(execute(board, mv))
}

/// Apply a move already planned against `board`.
pub(crate) fn execute(board: &Board, mv: &Move) -> Board {
    let mut next = board.clone();
    let cards = next.remove_top(mv.from, mv.count);

    match mv.to {
        Destination::Slot(slot) => next.append(slot, &cards),
        Destination::Foundation(_) => {
            for card in cards {
                next.accept(card);
            }
        }
    }
    next
}
