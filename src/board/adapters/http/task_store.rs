//! `reqwest`-backed implementation of [`TaskStore`].

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Response, StatusCode};
use url::Url;

use super::{
    HttpTaskStoreConfig,
    models::{CreatedTaskBody, TaskRecord},
};
use crate::board::{
    domain::{Task, TaskId},
    ports::{NewTask, TaskPatch, TaskStore, TaskStoreError, TaskStoreResult},
};

/// Task store reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTaskStore {
    client: Client,
    base_url: Url,
}

impl HttpTaskStore {
    /// Builds a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Transport`] when the HTTP client cannot be
    /// initialised.
    pub fn new(config: &HttpTaskStoreConfig) -> TaskStoreResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(TaskStoreError::transport)?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Returns the URL of the tasks collection, or of one task.
    fn tasks_url(&self, id: Option<&TaskId>) -> TaskStoreResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                TaskStoreError::InvalidPayload(format!(
                    "task store URL '{}' cannot be used as a base",
                    self.base_url
                ))
            })?;
            segments.pop_if_empty().push("tasks");
            if let Some(task_id) = id {
                segments.push(task_id.as_str());
            }
        }
        Ok(url)
    }

    /// Maps a non-success response to a [`TaskStoreError`].
    ///
    /// A 404 on a single-task route becomes [`TaskStoreError::NotFound`].
    async fn check_response(
        response: Response,
        id: Option<&TaskId>,
    ) -> TaskStoreResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if let (StatusCode::NOT_FOUND, Some(task_id)) = (status, id) {
            return Err(TaskStoreError::NotFound(task_id.clone()));
        }
        let body = match response.text().await {
            Ok(text) => text,
            Err(err) => {
                tracing::debug!(status = status.as_u16(), error = %err, "error body unreadable");
                String::new()
            }
        };
        Err(TaskStoreError::Rejected {
            status: status.as_u16(),
            message: extract_error_message(&body),
        })
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> TaskStoreResult<T> {
        let bytes = response.bytes().await.map_err(TaskStoreError::transport)?;
        serde_json::from_slice(&bytes)
            .map_err(|err| TaskStoreError::InvalidPayload(err.to_string()))
    }
}

/// Pulls a readable message out of an error body.
///
/// Tries the `message` then `error` fields of a JSON body, falling back to
/// the raw text.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            ["message", "error"]
                .into_iter()
                .find_map(|key| json.get(key).and_then(|v| v.as_str()).map(str::to_owned))
        })
        .unwrap_or_else(|| body.to_owned())
}

#[async_trait]
impl TaskStore for HttpTaskStore {
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let url = self.tasks_url(None)?;
        tracing::debug!(%url, "listing tasks");
        let sent = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TaskStoreError::transport)?;
        let response = Self::check_response(sent, None).await?;
        let records: Vec<TaskRecord> = Self::decode(response).await?;
        records.into_iter().map(Task::try_from).collect()
    }

    async fn create_task(&self, task: &NewTask) -> TaskStoreResult<Task> {
        let url = self.tasks_url(None)?;
        tracing::debug!(%url, title = %task.title, "creating task");
        let sent = self
            .client
            .post(url)
            .json(task)
            .send()
            .await
            .map_err(TaskStoreError::transport)?;
        let response = Self::check_response(sent, None).await?;
        let body: CreatedTaskBody = Self::decode(response).await?;
        body.into_task(task, Utc::now())
    }

    async fn update_task(&self, id: &TaskId, patch: &TaskPatch) -> TaskStoreResult<()> {
        let url = self.tasks_url(Some(id))?;
        tracing::debug!(%url, "updating task");
        let sent = self
            .client
            .put(url)
            .json(patch)
            .send()
            .await
            .map_err(TaskStoreError::transport)?;
        Self::check_response(sent, Some(id)).await?;
        Ok(())
    }

    async fn delete_task(&self, id: &TaskId) -> TaskStoreResult<()> {
        let url = self.tasks_url(Some(id))?;
        tracing::debug!(%url, "deleting task");
        let sent = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(TaskStoreError::transport)?;
        Self::check_response(sent, Some(id)).await?;
        Ok(())
    }
}
