//! Wire representations exchanged with the remote task store.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::board::{
    domain::{PersistedTaskData, Task, TaskCategory, TaskId},
    ports::{NewTask, TaskStoreError},
};

/// Task document as returned by the store.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct TaskRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: TaskCategory,
    #[serde(rename = "timestamp", alias = "createdAt", alias = "created_at")]
    pub created_at: DateTime<Utc>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskStoreError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let id = TaskId::new(record.id)
            .map_err(|err| TaskStoreError::InvalidPayload(err.to_string()))?;
        Ok(Self::from_persisted(PersistedTaskData {
            id,
            title: record.title,
            description: record.description,
            category: record.category,
            created_at: record.created_at,
        }))
    }
}

/// Body returned by the create endpoint.
///
/// Some deployments echo the stored document; others only acknowledge the
/// insert with the new identifier.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum CreatedTaskBody {
    Record(TaskRecord),
    Acknowledged {
        #[serde(rename = "insertedId")]
        inserted_id: String,
    },
}

impl CreatedTaskBody {
    /// Resolves the body into a task, filling acknowledged inserts from the
    /// submitted fields.
    pub(super) fn into_task(
        self,
        submitted: &NewTask,
        now: DateTime<Utc>,
    ) -> Result<Task, TaskStoreError> {
        match self {
            Self::Record(record) => Task::try_from(record),
            Self::Acknowledged { inserted_id } => {
                let id = TaskId::new(inserted_id)
                    .map_err(|err| TaskStoreError::InvalidPayload(err.to_string()))?;
                Ok(Task::from_persisted(PersistedTaskData {
                    id,
                    title: submitted.title.clone(),
                    description: submitted.description.clone(),
                    category: TaskCategory::Known(submitted.category),
                    created_at: now,
                }))
            }
        }
    }
}
