//! Unit tests for the board module.


use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::board::{
    domain::{Lane, PersistedTaskData, Task, TaskCategory, TaskId},
    ports::{NewTask, TaskPatch, TaskStore, TaskStoreResult},
};

mockall::mock! {
    pub TaskStore {}

    #[async_trait]
    impl TaskStore for TaskStore {
        async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>>;
        async fn create_task(&self, task: &NewTask) -> TaskStoreResult<Task>;
        async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> TaskStoreResult<()>;
        async fn delete_task(&self, id: &TaskId) -> TaskStoreResult<()>;
    }
}

/// Builds a task identifier, panicking on blank input.
pub(super) fn id(value: &str) -> TaskId {
    TaskId::new(value).expect("valid task id")
}

/// Builds stored task data in `category` with a fixed timestamp.
pub(super) fn task_data(task_id: &str, category: TaskCategory) -> PersistedTaskData {
    PersistedTaskData {
        id: id(task_id),
        title: format!("Task {task_id}"),
        description: None,
        category,
        created_at: Utc
            .with_ymd_and_hms(2025, 2, 20, 9, 30, 0)
            .single()
            .expect("valid timestamp"),
    }
}

/// Builds a task in one of the fixed lanes.
pub(super) fn task(task_id: &str, lane: Lane) -> Task {
    Task::from_persisted(task_data(task_id, TaskCategory::Known(lane)))
}

/// Builds a task whose category is outside the lane set.
pub(super) fn stray_task(task_id: &str, category: &str) -> Task {
    Task::from_persisted(task_data(
        task_id,
        TaskCategory::Unrecognized(category.to_owned()),
    ))
}

/// Returns the identifiers of `tasks` in order.
pub(super) fn ids<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<&'a str> {
    tasks.into_iter().map(|task| task.id().as_str()).collect()
}
