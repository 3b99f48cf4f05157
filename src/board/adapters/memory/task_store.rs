//! In-memory task store for tests and offline demos.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::board::{
    domain::{PersistedTaskData, Task, TaskCategory, TaskId},
    ports::{NewTask, TaskPatch, TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Tasks are kept in insertion order, which is the order `list_tasks`
/// returns. Identifiers are random UUIDs and timestamps come from the
/// injected clock.
#[derive(Clone)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<Vec<StoredTask>>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

#[derive(Debug, Clone)]
struct StoredTask {
    data: PersistedTaskData,
}

impl StoredTask {
    fn to_task(&self) -> Task {
        Task::from_persisted(self.data.clone())
    }

    fn apply(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title {
            self.data.title.clone_from(title);
        }
        if let Some(description) = &patch.description {
            self.data.description = Some(description.clone()).filter(|text| !text.is_empty());
        }
        if let Some(lane) = patch.category {
            self.data.category = TaskCategory::Known(lane);
        }
    }
}

impl std::fmt::Debug for InMemoryTaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTaskStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTaskStore {
    /// Creates an empty store using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty store that stamps tasks using `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            state: Arc::new(RwLock::new(Vec::new())),
            clock,
        }
    }

    /// Creates a store pre-populated with existing tasks, in order.
    #[must_use]
    pub fn seeded(tasks: impl IntoIterator<Item = PersistedTaskData>) -> Self {
        let store = Self::new();
        if let Ok(mut state) = store.state.write() {
            state.extend(tasks.into_iter().map(|data| StoredTask { data }));
        }
        store
    }

    fn lock_error(err: impl std::fmt::Display) -> TaskStoreError {
        TaskStoreError::transport(std::io::Error::other(err.to_string()))
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(Self::lock_error)?;
        Ok(state.iter().map(StoredTask::to_task).collect())
    }

    async fn create_task(&self, task: &NewTask) -> TaskStoreResult<Task> {
        let id = TaskId::new(Uuid::new_v4().to_string())
            .map_err(|err| TaskStoreError::InvalidPayload(err.to_string()))?;
        let stored = StoredTask {
            data: PersistedTaskData {
                id,
                title: task.title.clone(),
                description: task.description.clone(),
                category: TaskCategory::Known(task.category),
                created_at: self.clock.utc(),
            },
        };
        let created = stored.to_task();
        let mut state = self.state.write().map_err(Self::lock_error)?;
        state.push(stored);
        Ok(created)
    }

    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(Self::lock_error)?;
        let stored = state
            .iter_mut()
            .find(|stored| stored.data.id == *id)
            .ok_or_else(|| TaskStoreError::NotFound(id.clone()))?;
        stored.apply(patch);
        Ok(())
    }

    async fn delete_task(&self, id: &TaskId) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(Self::lock_error)?;
        let before = state.len();
        state.retain(|stored| stored.data.id != *id);
        if state.len() == before {
            return Err(TaskStoreError::NotFound(id.clone()));
        }
        Ok(())
    }
}
