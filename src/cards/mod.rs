//! Card model: suits, colors, ranks, cards and the deck.
//!
//! ## Key Types
//!
//! - `Suit`: Four suits, each with a fixed `Color`
//! - `Rank`: Ace (1) through King (13)
//! - `Card`: Immutable (suit, rank) pair
//!
//! The deck never contains duplicates, so two equal `Card`s are the same card.

pub mod card;
pub mod deck;

pub use card::{Card, Color, Rank, Suit};
pub use deck::{deal_order, standard_deck};
