//! Drag gesture events and their interpretation into move intents.

use super::{BoardState, Lane, TaskCategory, TaskId};

/// What the pointer was over when a drag was released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Another task card.
    Task(TaskId),
    /// A lane's drop zone.
    Lane(Lane),
}

/// Completed drag gesture as reported by the gesture source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    /// The task being dragged.
    pub active_id: TaskId,
    /// The target under the pointer at release, if any.
    pub over: Option<DropTarget>,
}

impl DragEnd {
    /// Creates a drag event released over `over`.
    #[must_use]
    pub const fn new(active_id: TaskId, over: Option<DropTarget>) -> Self {
        Self { active_id, over }
    }

    /// Creates a drag event released over another task.
    #[must_use]
    pub const fn over_task(active_id: TaskId, over: TaskId) -> Self {
        Self::new(active_id, Some(DropTarget::Task(over)))
    }

    /// Creates a drag event released over a lane drop zone.
    #[must_use]
    pub const fn over_lane(active_id: TaskId, lane: Lane) -> Self {
        Self::new(active_id, Some(DropTarget::Lane(lane)))
    }

    /// Creates a drag event released over nothing.
    #[must_use]
    pub const fn cancelled(active_id: TaskId) -> Self {
        Self::new(active_id, None)
    }
}

/// Structured instruction derived from one gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveIntent {
    /// Task to move.
    pub task_id: TaskId,
    /// Target the gesture was released over.
    pub target: DropTarget,
    /// Lane to move the task into, when it changes lanes.
    pub new_category: Option<Lane>,
    /// Insertion index in the full board sequence.
    pub new_index: usize,
}

impl MoveIntent {
    /// Returns whether the intent migrates the task across lanes.
    #[must_use]
    pub const fn changes_lane(&self) -> bool {
        self.new_category.is_some()
    }
}

/// Interprets a drag gesture against the current board.
///
/// Returns `None` when the gesture is a no-op: released over nothing or
/// over itself, or referencing a task the board no longer holds. The
/// interpretation is pure and never touches the store.
#[must_use]
pub fn interpret(board: &BoardState, event: &DragEnd) -> Option<MoveIntent> {
    let over = event.over.as_ref()?;
    if matches!(over, DropTarget::Task(id) if *id == event.active_id) {
        return None;
    }

    let active_index = board.position(&event.active_id)?;
    let active = board.tasks().get(active_index)?;

    let (target_category, new_index) = match over {
        DropTarget::Task(over_id) => {
            let over_index = board.position(over_id)?;
            let over_task = board.tasks().get(over_index)?;
            (over_task.category().clone(), over_index)
        }
        DropTarget::Lane(lane) => (
            TaskCategory::Known(*lane),
            lane_tail_index(board, *lane, active_index),
        ),
    };

    let new_category = if active.category().lane_key() == target_category.lane_key() {
        None
    } else {
        // Tasks cannot migrate into the uncategorized bucket.
        Some(target_category.lane()?)
    };

    Some(MoveIntent {
        task_id: event.active_id.clone(),
        target: over.clone(),
        new_category,
        new_index,
    })
}

/// Index that places the active task at the tail of `lane`.
///
/// Empty lanes append to the end of the sequence. Otherwise the index is
/// that of the lane's last task, shifted by one when the active task sits
/// after it, since insertion happens after the active task is removed.
fn lane_tail_index(board: &BoardState, lane: Lane, active_index: usize) -> usize {
    let last_in_lane = board
        .tasks()
        .iter()
        .rposition(|task| task.category().lane() == Some(lane));
    match last_in_lane {
        None => board.len(),
        Some(last) if active_index > last => last + 1,
        Some(last) => last,
    }
}
