//! Bounded undo log of whole-board snapshots.
//!
//! The log keeps the current board plus up to `capacity - 1` earlier ones.
//! Committing past capacity silently drops the oldest snapshot, so moves
//! more than `capacity - 1` steps back can no longer be undone. Undo only
//! walks backwards; committing after an undo discards nothing further back
//! and there is no redo.
//!
//! Snapshots live in an `im::Vector` so cloning the whole log is cheap.

use im::Vector;

use crate::board::Board;
use crate::core::MIN_HISTORY_CAPACITY;

/// Bounded snapshot history.
#[derive(Clone, Debug)]
pub struct History {
    current: Board,
    past: Vector<Board>,
    capacity: usize,
}

impl History {
    /// Start a history at `initial`.
    ///
    /// Capacities below 2 are raised to 2.
    #[must_use]
    pub fn new(initial: Board, capacity: usize) -> Self {
        Self {
            current: initial,
            past: Vector::new(),
            capacity: capacity.max(MIN_HISTORY_CAPACITY),
        }
    }

    /// The board at the cursor.
    #[must_use]
    pub fn current(&self) -> &Board {
        &self.current
    }

    /// Record `board` as the new current snapshot.
    pub fn commit(&mut self, board: Board) {
        let previous = std::mem::replace(&mut self.current, board);
        self.past.push_back(previous);
        if self.past.len() >= self.capacity {
            self.past.pop_front();
        }
    }

    /// Step back one snapshot.
    ///
    /// Returns the restored board, or `None` if there is nothing to undo.
    pub fn undo(&mut self) -> Option<&Board> {
        self.current = self.past.pop_back()?;
        Some(&self.current)
    }

    /// True if `undo` would succeed.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Number of undo steps available.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.past.len()
    }

    /// Snapshots held, current included.
    #[must_use]
    pub fn snapshot_count(&self) -> usize {
        self.past.len() + 1
    }

    /// Maximum snapshots held, current included.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
