//! Addressable board positions.

use serde::{Deserialize, Serialize};

use crate::cards::Suit;
use crate::core::{CASCADE_COUNT, FREE_CELL_COUNT};

/// A slot the player can point at and select: a free cell or a cascade.
///
/// Foundations are reached through `Destination::Foundation` only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// Free cell 0..4.
    Cell(usize),
    /// Cascade 0..8.
    Cascade(usize),
}

impl Slot {
    /// Every slot: cells first, then cascades.
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..FREE_CELL_COUNT)
            .map(Slot::Cell)
            .chain((0..CASCADE_COUNT).map(Slot::Cascade))
    }

    /// True if the index is in range for its kind.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        match self {
            Slot::Cell(i) => i < FREE_CELL_COUNT,
            Slot::Cascade(i) => i < CASCADE_COUNT,
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Cell(i) => write!(f, "Cell({})", i),
            Slot::Cascade(i) => write!(f, "Cascade({})", i),
        }
    }
}

/// Where a move puts its cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Slot(Slot),
    Foundation(Suit),
}

impl From<Slot> for Destination {
    fn from(slot: Slot) -> Self {
        Destination::Slot(slot)
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Slot(slot) => write!(f, "{}", slot),
            Destination::Foundation(suit) => write!(f, "Foundation({})", suit),
        }
    }
}
