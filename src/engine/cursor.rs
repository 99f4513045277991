//! Cursor navigation over the twelve selectable slots.
//!
//! Two rows: free cells 0..4 on top, cascades 0..8 below. Left and right
//! wrap within a row. Down from cell `i` lands on cascade `i`; up from
//! cascade `j` lands on cell `min(j, 3)`. Moving off the top or bottom row
//! stays put.

use super::intent::Direction;
use crate::board::Slot;
use crate::core::{CASCADE_COUNT, FREE_CELL_COUNT};

/// Where the cursor starts.
pub const INITIAL_CURSOR: Slot = Slot::Cascade(0);

/// The slot one step from `from` in `direction`.
#[must_use]
pub fn step(from: Slot, direction: Direction) -> Slot {
    match (from, direction) {
        (Slot::Cell(i), Direction::Left) => Slot::Cell((i + FREE_CELL_COUNT - 1) % FREE_CELL_COUNT),
        (Slot::Cell(i), Direction::Right) => Slot::Cell((i + 1) % FREE_CELL_COUNT),
        (Slot::Cell(i), Direction::Down) => Slot::Cascade(i),
        (Slot::Cell(_), Direction::Up) => from,
        (Slot::Cascade(j), Direction::Left) => Slot::Cascade((j + CASCADE_COUNT - 1) % CASCADE_COUNT),
        (Slot::Cascade(j), Direction::Right) => Slot::Cascade((j + 1) % CASCADE_COUNT),
        (Slot::Cascade(j), Direction::Up) => Slot::Cell(j.min(FREE_CELL_COUNT - 1)),
        (Slot::Cascade(_), Direction::Down) => from,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_wraparound() {
        assert_eq!(step(Slot::Cell(0), Direction::Left), Slot::Cell(3));
        assert_eq!(step(Slot::Cell(3), Direction::Right), Slot::Cell(0));
        assert_eq!(step(Slot::Cascade(0), Direction::Left), Slot::Cascade(7));
        assert_eq!(step(Slot::Cascade(7), Direction::Right), Slot::Cascade(0));
    }

    #[test]
    fn test_vertical() {
        assert_eq!(step(Slot::Cell(2), Direction::Down), Slot::Cascade(2));
        assert_eq!(step(Slot::Cascade(2), Direction::Up), Slot::Cell(2));
        assert_eq!(step(Slot::Cascade(6), Direction::Up), Slot::Cell(3));
        assert_eq!(step(Slot::Cell(1), Direction::Up), Slot::Cell(1));
        assert_eq!(step(Slot::Cascade(5), Direction::Down), Slot::Cascade(5));
    }

    #[test]
    fn test_every_step_stays_valid() {
        let dirs = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
        for slot in Slot::all() {
            for dir in dirs {
                assert!(step(slot, dir).is_valid());
            }
        }
    }
}
