//! Optimistic application of drag gestures and their remote persistence.

use std::sync::Arc;

use crate::board::{
    domain::{DragEnd, MoveIntent},
    ports::{TaskPatch, TaskStore, TaskStoreError},
};

use super::SharedBoard;

/// Result of handling one gesture.
///
/// Remote failures are reported here instead of as errors: the board keeps
/// its optimistic state and the caller decides how to surface the problem.
#[derive(Debug, Clone)]
pub enum MoveOutcome {
    /// The gesture did not describe a move; nothing changed.
    Ignored,
    /// The task was reordered within its lane. Reordering is local to the
    /// session and is not sent to the store.
    Reordered(MoveIntent),
    /// The task changed lanes and the store accepted the new category.
    Migrated(MoveIntent),
    /// The task changed lanes locally but the store rejected the update.
    /// The board is not rolled back; the next refresh restores consistency.
    MigrationNotPersisted {
        /// The applied intent.
        intent: MoveIntent,
        /// Failure reported by the store.
        error: TaskStoreError,
    },
}

impl MoveOutcome {
    /// Returns the intent that was applied, if any.
    #[must_use]
    pub const fn intent(&self) -> Option<&MoveIntent> {
        match self {
            Self::Ignored => None,
            Self::Reordered(intent)
            | Self::Migrated(intent)
            | Self::MigrationNotPersisted { intent, .. } => Some(intent),
        }
    }
}

/// Applies move intents to the board and converges lane changes with the
/// remote store.
#[derive(Clone)]
pub struct BoardSyncService<S>
where
    S: TaskStore,
{
    store: Arc<S>,
    board: SharedBoard,
}

impl<S> BoardSyncService<S>
where
    S: TaskStore,
{
    /// Creates a sync service over `board`.
    #[must_use]
    pub const fn new(store: Arc<S>, board: SharedBoard) -> Self {
        Self { store, board }
    }

    /// Returns the board handle this service mutates.
    #[must_use]
    pub const fn board(&self) -> &SharedBoard {
        &self.board
    }

    /// Handles a completed drag gesture.
    ///
    /// The board is updated before the store is contacted, so the new order
    /// is visible while the category update is in flight.
    pub async fn handle_drag_end(&self, event: &DragEnd) -> MoveOutcome {
        let Some(intent) = self.board.interpret_and_apply(event) else {
            tracing::debug!(task_id = %event.active_id, "drag gesture ignored");
            return MoveOutcome::Ignored;
        };
        self.persist(intent).await
    }

    /// Applies a previously derived intent.
    ///
    /// Returns [`MoveOutcome::Ignored`] when the task has since left the
    /// board.
    pub async fn apply_intent(&self, intent: MoveIntent) -> MoveOutcome {
        if !self.board.apply_intent(&intent) {
            tracing::debug!(task_id = %intent.task_id, "move target no longer on board");
            return MoveOutcome::Ignored;
        }
        self.persist(intent).await
    }

    async fn persist(&self, intent: MoveIntent) -> MoveOutcome {
        let Some(lane) = intent.new_category else {
            tracing::debug!(
                task_id = %intent.task_id,
                index = intent.new_index,
                "task reordered locally"
            );
            return MoveOutcome::Reordered(intent);
        };

        match self
            .store
            .update_task(&intent.task_id, &TaskPatch::category(lane))
            .await
        {
            Ok(()) => {
                tracing::debug!(task_id = %intent.task_id, category = %lane, "task moved");
                MoveOutcome::Migrated(intent)
            }
            Err(error) => {
                tracing::warn!(
                    task_id = %intent.task_id,
                    category = %lane,
                    %error,
                    "failed to persist task category; keeping local board state"
                );
                MoveOutcome::MigrationNotPersisted { intent, error }
            }
        }
    }
}
