//! Shared handle owning the process-wide board state.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::domain::{BoardState, DragEnd, LaneKey, MoveIntent, Task, interpret};

/// Cloneable handle to the one board every handler works against.
///
/// All mutation goes through [`SharedBoard::load`] and
/// [`SharedBoard::apply_intent`] (or [`SharedBoard::interpret_and_apply`]),
/// each of which completes under a single write lock. Guards are never held
/// across an `await`.
#[derive(Debug, Clone, Default)]
pub struct SharedBoard {
    inner: Arc<RwLock<BoardState>>,
}

impl SharedBoard {
    /// Creates a handle around an initial board.
    #[must_use]
    pub fn new(board: BoardState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(board)),
        }
    }

    // Poisoned locks are recovered: every write is a single replace or splice.
    fn read(&self) -> RwLockReadGuard<'_, BoardState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BoardState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of the current board.
    #[must_use]
    pub fn snapshot(&self) -> BoardState {
        self.read().clone()
    }

    /// Returns a copy of one bucket's tasks, in board order.
    #[must_use]
    pub fn view(&self, key: impl Into<LaneKey>) -> Vec<Task> {
        self.read().view(key).cloned().collect()
    }

    /// Replaces the board with a fresh snapshot.
    pub fn load(&self, tasks: Vec<Task>) {
        self.write().load(tasks);
    }

    /// Applies an already-derived intent. Returns whether the board changed.
    pub fn apply_intent(&self, intent: &MoveIntent) -> bool {
        self.write()
            .apply_move(&intent.task_id, intent.new_category, intent.new_index)
    }

    /// Interprets a gesture and applies the resulting intent atomically.
    ///
    /// Both steps run under the same write lock, so a refresh cannot land
    /// between reading positions and splicing the task.
    pub fn interpret_and_apply(&self, event: &DragEnd) -> Option<MoveIntent> {
        let mut board = self.write();
        let intent = interpret(&board, event)?;
        board
            .apply_move(&intent.task_id, intent.new_category, intent.new_index)
            .then_some(intent)
    }
}
