//! Shared helpers for in-memory board tests.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use taskboard::board::{
    adapters::memory::InMemoryTaskStore,
    domain::{Lane, PersistedTaskData, Task, TaskCategory, TaskId},
    ports::{NewTask, TaskPatch, TaskStore, TaskStoreError, TaskStoreResult},
    services::{BoardSyncService, SharedBoard, TaskMutationService},
};

/// Builds a task identifier.
///
/// # Panics
///
/// Panics when `value` is blank.
pub fn id(value: &str) -> TaskId {
    TaskId::new(value).expect("valid task id")
}

/// Builds seed data for a task in `lane`.
pub fn seed(task_id: &str, lane: Lane) -> PersistedTaskData {
    PersistedTaskData {
        id: id(task_id),
        title: format!("Task {task_id}"),
        description: None,
        category: TaskCategory::Known(lane),
        created_at: Utc
            .with_ymd_and_hms(2025, 2, 21, 8, 0, 0)
            .single()
            .expect("valid timestamp"),
    }
}

/// Returns the identifiers of `tasks` in order.
pub fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.id().as_str()).collect()
}

/// In-memory store that records updates and can be told to reject them.
#[derive(Debug, Clone, Default)]
pub struct RecordingTaskStore {
    inner: InMemoryTaskStore,
    updates: Arc<Mutex<Vec<(TaskId, TaskPatch)>>>,
    reject_updates: Arc<Mutex<bool>>,
}

impl RecordingTaskStore {
    /// Wraps a seeded in-memory store.
    pub fn seeded(tasks: impl IntoIterator<Item = PersistedTaskData>) -> Self {
        Self {
            inner: InMemoryTaskStore::seeded(tasks),
            ..Self::default()
        }
    }

    /// Makes subsequent updates fail with a server error.
    pub fn reject_updates(&self) {
        *self
            .reject_updates
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = true;
    }

    /// Returns every update received so far.
    pub fn updates(&self) -> Vec<(TaskId, TaskPatch)> {
        self.updates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl TaskStore for RecordingTaskStore {
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        self.inner.list_tasks().await
    }

    async fn create_task(&self, task: &NewTask) -> TaskStoreResult<Task> {
        self.inner.create_task(task).await
    }

    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> TaskStoreResult<()> {
        self.updates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id.clone(), patch.clone()));
        let rejecting = *self
            .reject_updates
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if rejecting {
            return Err(TaskStoreError::Rejected {
                status: 500,
                message: "update failed".to_owned(),
            });
        }
        self.inner.update_task(id, patch).await
    }

    async fn delete_task(&self, id: &TaskId) -> TaskStoreResult<()> {
        self.inner.delete_task(id).await
    }
}

/// Board services wired to one shared board and store.
pub struct Harness {
    pub store: Arc<RecordingTaskStore>,
    pub board: SharedBoard,
    pub sync: BoardSyncService<RecordingTaskStore>,
    pub mutations: TaskMutationService<RecordingTaskStore>,
}

impl Harness {
    /// Wires services over a store seeded with `tasks`, then loads the board.
    pub async fn loaded(tasks: impl IntoIterator<Item = PersistedTaskData>) -> Self {
        let store = Arc::new(RecordingTaskStore::seeded(tasks));
        let board = SharedBoard::default();
        let harness = Self {
            sync: BoardSyncService::new(Arc::clone(&store), board.clone()),
            mutations: TaskMutationService::new(Arc::clone(&store), board.clone()),
            store,
            board,
        };
        harness
            .mutations
            .refresh()
            .await
            .expect("initial refresh should succeed");
        harness
    }
}
