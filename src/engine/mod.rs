//! Interaction layer: turns decoded player intents into board changes.
//!
//! ## Key Types
//!
//! - `Engine`: Owns the board history, selection and cursor
//! - `Intent`: One decoded player input
//! - `IntentOutcome`: What the engine did with it
//! - `Snapshot`: Owned copy of renderer-visible state
//!
//! The engine is single-threaded and processes one intent at a time.
//! A terminal resize arrives as `Intent::Redraw` like any other input.

pub mod cursor;
pub mod intent;
pub mod interaction;

pub use cursor::INITIAL_CURSOR;
pub use intent::{Direction, Intent, IntentOutcome};
pub use interaction::{Engine, Selection, Snapshot};
