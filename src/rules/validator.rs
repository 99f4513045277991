//! Move legality and supermove sizing.
//!
//! Everything here is a pure function of a `Board`. The validator never
//! mutates; it answers with a planned `Move` or `None`.
//!
//! ## Supermoves
//!
//! A run of cards on top of a cascade can move as a block if it could have
//! been moved one card at a time through the empty free cells and empty
//! cascades. With `c` empty cells and `e` empty cascades that is
//! `(c + 1) * 2^e` cards. An empty destination cascade cannot also serve as
//! temporary storage, so it is left out of `e`.
//!
//! A move that would push a cascade past `MAX_CASCADE_LEN` cards is
//! rejected like any other illegal move.

use tracing::trace;

use super::moves::Move;
use crate::board::{Board, Destination, Slot};
use crate::cards::{Card, Rank};
use crate::core::MAX_CASCADE_LEN;

/// True if `card` may sit directly on `onto` in a cascade:
/// opposite color, one rank lower.
#[must_use]
pub fn can_stack(card: Card, onto: Card) -> bool {
    card.is_opposite_color(onto) && card.is_rank_predecessor_of(onto)
}

/// True if `card` is the next card for a foundation topped by `foundation_rank`.
#[must_use]
pub fn foundation_accepts(card: Card, foundation_rank: Option<Rank>) -> bool {
    match foundation_rank {
        None => card.rank == Rank::ACE,
        Some(top) => top.successor() == Some(card.rank),
    }
}

/// Length of the alternating, descending run on top of a cascade.
///
/// The top card alone is a run of 1. An empty cascade has run length 0.
#[must_use]
pub fn run_length(cascade: &[Card]) -> usize {
    if cascade.is_empty() {
        return 0;
    }
    1 + cascade
        .windows(2)
        .rev()
        .take_while(|pair| can_stack(pair[1], pair[0]))
        .count()
}

/// Maximum cards movable as one block onto a cascade.
#[must_use]
pub fn supermove_capacity(empty_cells: usize, empty_cascades: usize, destination_empty: bool) -> usize {
    let helpers = if destination_empty {
        empty_cascades.saturating_sub(1)
    } else {
        empty_cascades
    };
    (empty_cells + 1) << helpers
}

/// Plan a move from `from` to `to`, or `None` if it is illegal.
///
/// For cascade-to-cascade moves the planned count is the supermove size:
/// onto a non-empty cascade, the smallest `k` within run length and capacity
/// whose bottom card stacks on the destination; onto an empty cascade, the
/// largest such `k`. Every other move carries exactly one card.
#[must_use]
pub fn plan_move(board: &Board, from: Slot, to: Destination) -> Option<Move> {
    if !from.is_valid() || Destination::Slot(from) == to {
        return None;
    }
    let card = board.peek_top(from)?;

    let count = match to {
        Destination::Foundation(suit) => {
            (card.suit == suit && foundation_accepts(card, board.foundation_rank(suit))).then_some(1)
        }
        Destination::Slot(target) if !target.is_valid() => None,
        Destination::Slot(target @ Slot::Cell(_)) => board.is_empty(target).then_some(1),
        Destination::Slot(target @ Slot::Cascade(_)) => match from {
            Slot::Cell(_) => match board.peek_top(target) {
                None => Some(1),
                Some(onto) => can_stack(card, onto).then_some(1),
            },
            Slot::Cascade(source) => plan_supermove(board, source, target),
        },
    };

    match count.filter(|&count| has_room(board, to, count)) {
        Some(count) => Some(Move { from, to, count }),
        None => {
            trace!(%from, %to, "move rejected");
            None
        }
    }
}

/// Plan sending the top card of `from` to its suit's foundation.
#[must_use]
pub fn plan_foundation_move(board: &Board, from: Slot) -> Option<Move> {
    let card = board.peek_top(from)?;
    plan_move(board, from, Destination::Foundation(card.suit))
}

/// Every legal move on the board.
///
/// Foundation moves come first, then slot-to-slot moves in slot order.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves: Vec<Move> = Slot::all()
        .filter_map(|from| plan_foundation_move(board, from))
        .collect();

    for from in Slot::all().filter(|&s| !board.is_empty(s)) {
        moves.extend(Slot::all().filter_map(|to| plan_move(board, from, to.into())));
    }
    moves
}

fn has_room(board: &Board, to: Destination, count: usize) -> bool {
    match to {
        Destination::Slot(Slot::Cascade(index)) => board
            .cascade(index)
            .is_some_and(|cascade| cascade.len() + count <= MAX_CASCADE_LEN),
        _ => true,
    }
}

fn plan_supermove(board: &Board, source: usize, target: Slot) -> Option<usize> {
    let cards = board.cascade(source)?;
    let onto = board.peek_top(target);
    let capacity = supermove_capacity(
        board.empty_cell_count(),
        board.empty_cascade_count(),
        onto.is_none(),
    );
    let limit = run_length(cards).min(capacity);

    match onto {
        None => (limit >= 1).then_some(limit),
        Some(onto) => (1..=limit).find(|&k| can_stack(cards[cards.len() - k], onto)),
    }
}
