//! Core engine types: configuration, deal numbers, RNG.
//!
//! Nothing here knows about cards on a board. Higher modules build on these.

pub mod config;
pub mod rng;
pub mod seed;

pub use config::{
    EngineConfig, CASCADE_COUNT, DECK_SIZE, FOUNDATION_COUNT, FREE_CELL_COUNT, MAX_CASCADE_LEN,
    MIN_HISTORY_CAPACITY,
};
pub use rng::GameRng;
pub use seed::{Seed, SEED_DIGITS};
