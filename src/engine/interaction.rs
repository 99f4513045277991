//! The game engine: board, selection, cursor and undo history in one owner.
//!
//! ## Selection state machine
//!
//! - Idle + toggle on a non-empty slot: select it.
//! - Selected(s) + toggle on s: deselect.
//! - Selected(s) + toggle on t: try s -> t. Success commits and returns to
//!   Idle; failure leaves the selection alone.
//! - Send-to-foundation works from any state. If the sent slot was the
//!   selected one, the selection is cleared.
//! - A successful undo always clears the selection.
//!
//! ## Consistency
//!
//! Each move builds a complete new board and swaps it into history, so a
//! reader between intents always sees a whole board.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::cursor::{self, INITIAL_CURSOR};
use super::intent::{Direction, Intent, IntentOutcome};
use crate::board::{Board, Slot};
use crate::core::EngineConfig;
use crate::error::ConfigError;
use crate::history::History;
use crate::rules::{execute, is_won, plan_foundation_move, plan_move, GameOutcome, Move};

/// Tentative source slot chosen by the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Idle,
    Selected(Slot),
}

impl Selection {
    /// The selected slot, if any.
    #[must_use]
    pub fn slot(self) -> Option<Slot> {
        match self {
            Selection::Idle => None,
            Selection::Selected(slot) => Some(slot),
        }
    }
}

/// Read-only copy of everything a renderer needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub selection: Selection,
    pub cursor: Slot,
    pub won: bool,
    pub can_undo: bool,
    pub moves_made: usize,
}

/// A single game of Freecell.
///
/// ## Example
///
/// ```
/// use freecell_engine::{Engine, Intent, IntentOutcome, Slot};
///
/// let mut engine = Engine::new(1234567);
///
/// // Park the top card of cascade 0 in free cell 0
/// engine.handle(Intent::Select(Slot::Cascade(0)));
/// let outcome = engine.handle(Intent::MoveAttempt {
///     from: Slot::Cascade(0),
///     to: Slot::Cell(0),
/// });
/// assert!(matches!(outcome, IntentOutcome::Moved(_)));
///
/// engine.handle(Intent::Undo);
/// assert!(engine.board().is_empty(Slot::Cell(0)));
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    config: EngineConfig,
    history: History,
    selection: Selection,
    cursor: Slot,
    moves_made: usize,
}

impl Engine {
    /// Deal a new game from `seed` with the default configuration.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        info!(seed, "dealing new game");
        Self::build(Board::deal(seed), EngineConfig::default())
    }

    /// Deal a new game from `seed` with a custom configuration.
    pub fn with_config(seed: u64, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(seed, history_capacity = config.history_capacity, "dealing new game");
        Ok(Self::build(Board::deal(seed), config))
    }

    /// Start from an arbitrary position.
    pub fn from_board(board: Board, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(board, config))
    }

    fn build(board: Board, config: EngineConfig) -> Self {
        Self {
            history: History::new(board, config.history_capacity),
            config,
            selection: Selection::Idle,
            cursor: INITIAL_CURSOR,
            moves_made: 0,
        }
    }

    // === Queries ===

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.history.current()
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn cursor(&self) -> Slot {
        self.cursor
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// True once every foundation holds its King.
    #[must_use]
    pub fn is_won(&self) -> bool {
        is_won(self.board())
    }

    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::of(self.board())
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Moves committed and not undone.
    #[must_use]
    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    /// Copy out the state a renderer reads.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board().clone(),
            selection: self.selection,
            cursor: self.cursor,
            won: self.is_won(),
            can_undo: self.can_undo(),
            moves_made: self.moves_made,
        }
    }

    // === Intents ===

    /// Process one intent to completion.
    pub fn handle(&mut self, intent: Intent) -> IntentOutcome {
        match intent {
            Intent::MoveCursor(direction) => self.move_cursor(direction),
            Intent::ToggleSelect => self.toggle_at(self.cursor),
            Intent::Select(slot) => self.select(slot),
            Intent::Deselect => self.deselect(),
            Intent::MoveAttempt { from, to } => self.try_move(from, to),
            Intent::SendToFoundation => self.send_to_foundation(self.cursor),
            Intent::SendToFoundationFrom(slot) => self.send_to_foundation(slot),
            Intent::Undo => self.undo(),
            Intent::Redraw => IntentOutcome::Redraw,
        }
    }

    /// Move the cursor one step.
    pub fn move_cursor(&mut self, direction: Direction) -> IntentOutcome {
        self.cursor = cursor::step(self.cursor, direction);
        IntentOutcome::CursorMoved(self.cursor)
    }

    /// Apply the toggle transition to `slot`.
    pub fn toggle_at(&mut self, slot: Slot) -> IntentOutcome {
        match self.selection {
            Selection::Idle => self.select(slot),
            Selection::Selected(selected) if selected == slot => self.deselect(),
            Selection::Selected(selected) => self.try_move(selected, slot),
        }
    }

    /// Select a slot. Empty and out-of-range slots cannot be selected.
    pub fn select(&mut self, slot: Slot) -> IntentOutcome {
        if self.board().is_empty(slot) {
            return IntentOutcome::Ignored;
        }
        self.selection = Selection::Selected(slot);
        debug!(%slot, "selected");
        IntentOutcome::Selected(slot)
    }

    /// Clear the selection.
    pub fn deselect(&mut self) -> IntentOutcome {
        match std::mem::take(&mut self.selection) {
            Selection::Idle => IntentOutcome::Ignored,
            Selection::Selected(slot) => {
                debug!(%slot, "deselected");
                IntentOutcome::Deselected
            }
        }
    }

    /// Move cards from `from` to `to` if legal.
    ///
    /// On success the selection returns to Idle; on failure nothing changes.
    pub fn try_move(&mut self, from: Slot, to: Slot) -> IntentOutcome {
        match plan_move(self.board(), from, to.into()) {
            Some(mv) => {
                self.selection = Selection::Idle;
                self.commit(mv)
            }
            None => IntentOutcome::Ignored,
        }
    }

    /// Send the addressable card of `slot` to its foundation if accepted.
    pub fn send_to_foundation(&mut self, slot: Slot) -> IntentOutcome {
        let Some(mv) = plan_foundation_move(self.board(), slot) else {
            return IntentOutcome::Ignored;
        };
        if self.selection == Selection::Selected(slot) {
            self.selection = Selection::Idle;
        }
        self.commit(mv)
    }

    /// Step back one move. Clears the selection on success.
    pub fn undo(&mut self) -> IntentOutcome {
        if self.history.undo().is_none() {
            return IntentOutcome::Ignored;
        }
        self.selection = Selection::Idle;
        self.moves_made = self.moves_made.saturating_sub(1);
        debug!(moves_made = self.moves_made, "undone");
        IntentOutcome::Undone
    }

    fn commit(&mut self, mv: Move) -> IntentOutcome {
        let next = execute(self.board(), &mv);
        self.history.commit(next);
        self.moves_made += 1;
        debug!(%mv, moves_made = self.moves_made, "move committed");

        if self.is_won() {
            info!(moves_made = self.moves_made, "game won");
        }
        IntentOutcome::Moved(mv)
    }
}
