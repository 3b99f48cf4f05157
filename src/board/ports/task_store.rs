//! Remote task storage contract consumed by the board services.

use crate::board::domain::{Lane, Task, TaskId};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Fields of a task about to be created. The store assigns the identifier
/// and creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    /// Task title.
    pub title: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Initial lane.
    pub category: Lane,
}

/// Partial update applied to a stored task. Absent fields are left as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskPatch {
    /// Replacement title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement description; an empty string clears it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement lane.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Lane>,
}

impl TaskPatch {
    /// Builds the category-only patch issued when a task changes lanes.
    #[must_use]
    pub fn category(lane: Lane) -> Self {
        Self {
            category: Some(lane),
            ..Self::default()
        }
    }
}

/// Remote task storage service.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns the full authoritative task collection.
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>>;

    /// Stores a new task and returns it with its assigned identifier.
    async fn create_task(&self, task: &NewTask) -> TaskStoreResult<Task>;

    /// Applies a partial update to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> TaskStoreResult<()>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist.
    async fn delete_task(&self, id: &TaskId) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The store answered with a non-success status.
    #[error("task store rejected the request with status {status}: {message}")]
    Rejected {
        /// HTTP-style status code.
        status: u16,
        /// Error message reported by the store.
        message: String,
    },

    /// The store returned a payload that does not describe a valid task.
    #[error("invalid task payload: {0}")]
    InvalidPayload(String),

    /// Network or storage failure.
    #[error("task store transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
