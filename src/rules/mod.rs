//! Freecell rules: move legality, supermoves, execution and victory.
//!
//! All functions are pure over `Board`. The engine calls into them and
//! swaps in the resulting board; nothing here holds state.

pub mod moves;
pub mod validator;
pub mod win;

pub(crate) use moves::execute;
pub use moves::{apply_move, Move};
pub use validator::{
    can_stack, foundation_accepts, legal_moves, plan_foundation_move, plan_move, run_length,
    supermove_capacity,
};
pub use win::{is_won, GameOutcome};
