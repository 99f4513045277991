//! The 52-card deck and the seeded deal order.

use crate::core::{GameRng, DECK_SIZE};

use super::card::{Card, Rank, Suit};

/// A standard deck in canonical order: suits in foundation order,
/// Ace through King within each suit.
#[must_use]
pub fn standard_deck() -> [Card; DECK_SIZE] {
    std::array::from_fn(|i| Card::new(Suit::ALL[i / 13], Rank::ALL[i % 13]))
}

/// The deck shuffled deterministically by `seed`.
///
/// Position 0 is dealt first.
#[must_use]
pub fn deal_order(seed: u64) -> [Card; DECK_SIZE] {
    let mut deck = standard_deck();
    GameRng::new(seed).shuffle(&mut deck);
    deck
}
