//! Task record and the field limits applied to user edits.

use super::{Lane, TaskCategory, TaskId, TaskValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A work item on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    category: TaskCategory,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a task returned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Category as recorded by the store.
    pub category: TaskCategory,
    /// Creation timestamp assigned when the task was stored.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from store data.
    ///
    /// Blank descriptions are normalised to `None`.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description.filter(|text| !text.trim().is_empty()),
            category: data.category,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task category.
    #[must_use]
    pub const fn category(&self) -> &TaskCategory {
        &self.category
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Moves the task into another lane. Only the board mutates categories.
    pub(crate) fn recategorize(&mut self, lane: Lane) {
        self.category = TaskCategory::Known(lane);
    }
}

/// Length limits applied to user-entered task fields.
///
/// # Examples
///
/// ```
/// use taskboard::board::domain::TaskLimits;
///
/// let limits = TaskLimits::default();
/// assert_eq!(limits.max_title_chars, 50);
/// assert!(limits.check_title("Write release notes").is_ok());
/// assert!(limits.check_title("   ").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskLimits {
    /// Maximum title length in characters.
    pub max_title_chars: usize,
    /// Maximum description length in characters.
    pub max_description_chars: usize,
}

impl Default for TaskLimits {
    fn default() -> Self {
        Self {
            max_title_chars: 50,
            max_description_chars: 200,
        }
    }
}

impl TaskLimits {
    /// Creates limits that accept any length.
    ///
    /// Blank titles are still rejected.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            max_title_chars: usize::MAX,
            max_description_chars: usize::MAX,
        }
    }

    /// Validates a title and returns it trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::EmptyTitle`] for blank titles and
    /// [`TaskValidationError::TitleTooLong`] when the trimmed title exceeds
    /// the limit.
    pub fn check_title(&self, title: &str) -> Result<String, TaskValidationError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        let actual = trimmed.chars().count();
        if actual > self.max_title_chars {
            return Err(TaskValidationError::TitleTooLong {
                max: self.max_title_chars,
                actual,
            });
        }
        Ok(trimmed.to_owned())
    }

    /// Validates an optional description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError::DescriptionTooLong`] when the
    /// description exceeds the limit.
    pub fn check_description(
        &self,
        description: Option<&str>,
    ) -> Result<Option<String>, TaskValidationError> {
        let Some(text) = description else {
            return Ok(None);
        };
        let actual = text.chars().count();
        if actual > self.max_description_chars {
            return Err(TaskValidationError::DescriptionTooLong {
                max: self.max_description_chars,
                actual,
            });
        }
        Ok(Some(text.to_owned()))
    }
}
