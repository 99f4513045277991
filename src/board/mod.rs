//! Board aggregate and slot addressing.
//!
//! ## Key Types
//!
//! - `Slot`: A selectable position (free cell or cascade)
//! - `Destination`: Where a move lands (a slot or a suit's foundation)
//! - `Board`: 8 cascades, 4 free cells, 4 foundations
//! - `BoardBuilder`: Hand-made positions for tests and puzzles

pub mod slot;
pub mod state;

pub use slot::{Destination, Slot};
pub use state::{Board, BoardBuilder, Cascade};
