//! In-memory ordered board and its per-lane partition.

use super::{Lane, LaneKey, Task, TaskId};

/// Ordered, lane-partitioned view of every task on the board.
///
/// A single sequence holds all tasks; its order encodes both the grouping
/// of lanes and the position of each task within its lane. Lane membership
/// is derived from each task's category, so every task falls into exactly
/// one bucket of [`LaneKey::ALL`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    tasks: Vec<Task>,
}

impl BoardState {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Creates a board holding the given tasks in order.
    #[must_use]
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            tasks: tasks.into_iter().collect(),
        }
    }

    /// Replaces the whole sequence with a fresh snapshot.
    pub fn load(&mut self, tasks: impl IntoIterator<Item = Task>) {
        self.tasks = tasks.into_iter().collect();
    }

    /// Returns the tasks of one bucket, preserving their relative order.
    pub fn view(&self, key: impl Into<LaneKey>) -> impl Iterator<Item = &Task> {
        let key = key.into();
        self.tasks
            .iter()
            .filter(move |task| key.contains(task.category()))
    }

    /// Returns every non-empty bucket in partition order.
    ///
    /// Fixed lanes are always present, even when empty; the uncategorized
    /// bucket only appears when it holds at least one task.
    #[must_use]
    pub fn lanes(&self) -> Vec<(LaneKey, Vec<&Task>)> {
        LaneKey::ALL
            .into_iter()
            .map(|key| (key, self.view(key).collect::<Vec<_>>()))
            .filter(|(key, tasks)| matches!(key, LaneKey::Lane(_)) || !tasks.is_empty())
            .collect()
    }

    /// Returns the full ordered sequence.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns a task's index in the full sequence.
    #[must_use]
    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the board holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Moves one task to `new_index`, optionally changing its lane.
    ///
    /// The task is removed from its current position and reinserted at
    /// `new_index` in the shortened sequence, clamped to its end. Unknown
    /// identifiers leave the board untouched; a refresh can race with a
    /// gesture, so this is not an error. Returns whether the board changed.
    pub fn apply_move(
        &mut self,
        id: &TaskId,
        new_category: Option<Lane>,
        new_index: usize,
    ) -> bool {
        let Some(current) = self.position(id) else {
            return false;
        };
        let mut task = self.tasks.remove(current);
        if let Some(lane) = new_category {
            task.recategorize(lane);
        }
        let index = new_index.min(self.tasks.len());
        self.tasks.insert(index, task);
        true
    }
}
