//! Player intents and what the engine did with them.

use serde::{Deserialize, Serialize};

use crate::board::Slot;
use crate::rules::Move;

/// Cursor direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One discrete player input, already decoded from key presses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Move the cursor. Never changes the board.
    MoveCursor(Direction),
    /// Select, deselect or complete a move at the cursor.
    ToggleSelect,
    /// Select a specific slot.
    Select(Slot),
    /// Drop the current selection.
    Deselect,
    /// Move from one slot to another directly.
    MoveAttempt { from: Slot, to: Slot },
    /// Send the card at the cursor to its foundation.
    SendToFoundation,
    /// Send the card in a specific slot to its foundation.
    SendToFoundationFrom(Slot),
    /// Step back one move.
    Undo,
    /// The display needs repainting; no state change.
    Redraw,
}

/// Result of handling an intent.
///
/// Rejected input is `Ignored`, not an error: illegal moves are a normal
/// part of play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentOutcome {
    CursorMoved(Slot),
    Selected(Slot),
    Deselected,
    Moved(Move),
    Undone,
    Redraw,
    Ignored,
}

impl IntentOutcome {
    /// True if the board changed.
    #[must_use]
    pub fn changed_board(&self) -> bool {
        matches!(self, IntentOutcome::Moved(_) | IntentOutcome::Undone)
    }
}
