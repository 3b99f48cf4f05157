//! Non-optimistic create, edit and delete followed by a full refresh.

use std::sync::Arc;

use thiserror::Error;

use crate::board::{
    domain::{Lane, Task, TaskId, TaskLimits, TaskValidationError},
    ports::{NewTask, TaskPatch, TaskStore, TaskStoreError},
};

use super::SharedBoard;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    category: String,
}

impl CreateTaskRequest {
    /// Creates a request for a task in the first lane.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            category: Lane::default().as_str().to_owned(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the lane by name.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// Request payload replacing the editable fields of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTaskRequest {
    id: TaskId,
    title: String,
    description: Option<String>,
    category: String,
}

impl EditTaskRequest {
    /// Creates an edit request.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            category: category.into(),
        }
    }

    /// Creates an edit request prefilled from an existing task.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id().clone(),
            title: task.title().to_owned(),
            description: task.description().map(str::to_owned),
            category: task.category().as_str().to_owned(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the lane by name.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// Service-level errors for task mutations.
#[derive(Debug, Error)]
pub enum TaskMutationError {
    /// Input was rejected before contacting the store.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),

    /// The store rejected or failed the mutation; the board is unchanged.
    #[error(transparent)]
    Remote(TaskStoreError),

    /// The mutation succeeded but re-fetching the board failed; the board
    /// still shows the pre-mutation snapshot.
    #[error("task saved but board refresh failed: {0}")]
    Refresh(TaskStoreError),
}

/// Result type for task mutation operations.
pub type TaskMutationResult<T> = Result<T, TaskMutationError>;

/// Create, edit and delete operations that always re-fetch the board.
///
/// The board is never changed optimistically here: it is either left as
/// is (on failure) or replaced wholesale with the store's snapshot.
#[derive(Clone)]
pub struct TaskMutationService<S>
where
    S: TaskStore,
{
    store: Arc<S>,
    board: SharedBoard,
    limits: TaskLimits,
}

impl<S> TaskMutationService<S>
where
    S: TaskStore,
{
    /// Creates a mutation service with default field limits.
    #[must_use]
    pub fn new(store: Arc<S>, board: SharedBoard) -> Self {
        Self::with_limits(store, board, TaskLimits::default())
    }

    /// Creates a mutation service with custom field limits.
    #[must_use]
    pub const fn with_limits(store: Arc<S>, board: SharedBoard, limits: TaskLimits) -> Self {
        Self {
            store,
            board,
            limits,
        }
    }

    /// Returns the board handle this service refreshes.
    #[must_use]
    pub const fn board(&self) -> &SharedBoard {
        &self.board
    }

    /// Replaces the board with the store's current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskMutationError::Refresh`] when listing fails; the board
    /// is left unchanged.
    pub async fn refresh(&self) -> TaskMutationResult<()> {
        let tasks = self.store.list_tasks().await.map_err(|error| {
            tracing::warn!(%error, "failed to refresh board");
            TaskMutationError::Refresh(error)
        })?;
        tracing::debug!(count = tasks.len(), "board refreshed");
        self.board.load(tasks);
        Ok(())
    }

    /// Creates a task and refreshes the board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskMutationError::Validation`] for invalid input,
    /// [`TaskMutationError::Remote`] when the store rejects the task, and
    /// [`TaskMutationError::Refresh`] when the follow-up refresh fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskMutationResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            category,
        } = request;
        let new_task = NewTask {
            title: self.limits.check_title(&title)?,
            description: self.limits.check_description(description.as_deref())?,
            category: parse_category(&category)?,
        };

        let created = self
            .store
            .create_task(&new_task)
            .await
            .map_err(|error| remote_failure("create", None, error))?;
        tracing::info!(task_id = %created.id(), "task created");
        self.refresh().await?;
        Ok(created)
    }

    /// Replaces a task's editable fields and refreshes the board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskMutationError::Validation`] for invalid input,
    /// [`TaskMutationError::Remote`] when the store rejects the update
    /// (including unknown identifiers), and [`TaskMutationError::Refresh`]
    /// when the follow-up refresh fails.
    pub async fn edit(&self, request: EditTaskRequest) -> TaskMutationResult<()> {
        let EditTaskRequest {
            id,
            title,
            description,
            category,
        } = request;
        let patch = TaskPatch {
            title: Some(self.limits.check_title(&title)?),
            description: Some(
                self.limits
                    .check_description(description.as_deref())?
                    .unwrap_or_default(),
            ),
            category: Some(parse_category(&category)?),
        };

        self.store
            .update_task(&id, &patch)
            .await
            .map_err(|error| remote_failure("edit", Some(&id), error))?;
        tracing::info!(task_id = %id, "task updated");
        self.refresh().await
    }

    /// Deletes a task and refreshes the board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskMutationError::Remote`] when the store rejects the
    /// deletion (including unknown identifiers), and
    /// [`TaskMutationError::Refresh`] when the follow-up refresh fails.
    pub async fn delete(&self, id: &TaskId) -> TaskMutationResult<()> {
        self.store
            .delete_task(id)
            .await
            .map_err(|error| remote_failure("delete", Some(id), error))?;
        tracing::info!(task_id = %id, "task deleted");
        self.refresh().await
    }
}

fn parse_category(raw: &str) -> Result<Lane, TaskValidationError> {
    Lane::try_from(raw.trim()).map_err(TaskValidationError::from)
}

fn remote_failure(
    operation: &'static str,
    id: Option<&TaskId>,
    error: TaskStoreError,
) -> TaskMutationError {
    match id {
        Some(task_id) => tracing::warn!(operation, %task_id, %error, "task mutation failed"),
        None => tracing::warn!(operation, %error, "task mutation failed"),
    }
    TaskMutationError::Remote(error)
}
