//! Undo history.

pub mod snapshots;

pub use snapshots::History;
