//! Engine configuration.
//!
//! Board geometry is fixed by the rules of Freecell and lives in constants.
//! The only tunable is how far back undo can reach.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of cascades (tableau columns).
pub const CASCADE_COUNT: usize = 8;

/// Number of free cells.
pub const FREE_CELL_COUNT: usize = 4;

/// Number of foundations, one per suit.
pub const FOUNDATION_COUNT: usize = 4;

/// Cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Most cards a cascade can ever hold: seven dealt, then a full
/// King-to-Ace run of twelve more on top of the last one.
pub const MAX_CASCADE_LEN: usize = 19;

/// Smallest usable history: the current board plus one to undo to.
pub const MIN_HISTORY_CAPACITY: usize = 2;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of board snapshots retained for undo (default: 100).
    /// Moves older than `history_capacity - 1` steps cannot be undone.
    pub history_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_capacity: 100,
        }
    }
}

impl EngineConfig {
    /// Set the number of retained snapshots.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity < MIN_HISTORY_CAPACITY {
            return Err(ConfigError::HistoryTooSmall {
                minimum: MIN_HISTORY_CAPACITY,
                actual: self.history_capacity,
            });
        }
        Ok(())
    }
}
