//! # freecell-engine
//!
//! Rules engine for Freecell solitaire: board state, move legality with
//! multi-card supermoves, bounded undo and victory detection.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: All mutable state (board history, selection, cursor)
//!    lives in `Engine`. There are no globals.
//!
//! 2. **Illegal Is Not Error**: Rejected moves are silent no-ops reported as
//!    `IntentOutcome::Ignored`. Only external inputs (deal numbers, config,
//!    hand-built layouts) can fail.
//!
//! 3. **Whole-Board Swaps**: Moves build a new `Board` and swap it into
//!    history, so readers never see a half-applied move.
//!
//! ## Modules
//!
//! - `core`: Configuration, deal numbers, seeded RNG
//! - `cards`: Suits, ranks, cards, deck
//! - `board`: Slots and the board aggregate
//! - `rules`: Legality, supermoves, move execution, victory
//! - `history`: Bounded undo log
//! - `engine`: Intent handling and selection state machine
//!
//! Rendering, terminal handling and key decoding are left to the caller.

pub mod board;
pub mod cards;
pub mod core;
pub mod engine;
pub mod error;
pub mod history;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{EngineConfig, GameRng, Seed};

pub use crate::cards::{Card, Color, Rank, Suit};

pub use crate::board::{Board, BoardBuilder, Destination, Slot};

pub use crate::rules::{
    apply_move, can_stack, foundation_accepts, is_won, legal_moves, plan_foundation_move,
    plan_move, run_length, supermove_capacity, GameOutcome, Move,
};

pub use crate::history::History;

pub use crate::engine::{Direction, Engine, Intent, IntentOutcome, Selection, Snapshot};

pub use crate::error::{ConfigError, LayoutError, SeedError};
