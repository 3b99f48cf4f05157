//! Error types for board domain parsing and validation.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,
}

/// Error returned while parsing a lane name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown lane: {0}")]
pub struct ParseLaneError(pub String);

/// Reasons a task's user-supplied fields are rejected before any remote call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The title exceeds the configured maximum length.
    #[error("task title is {actual} characters, maximum is {max}")]
    TitleTooLong {
        /// Configured maximum length in characters.
        max: usize,
        /// Actual length in characters.
        actual: usize,
    },

    /// The description exceeds the configured maximum length.
    #[error("task description is {actual} characters, maximum is {max}")]
    DescriptionTooLong {
        /// Configured maximum length in characters.
        max: usize,
        /// Actual length in characters.
        actual: usize,
    },

    /// The category is not a member of the lane set.
    #[error("unrecognized category: {0}")]
    UnknownCategory(String),
}

impl From<ParseLaneError> for TaskValidationError {
    fn from(err: ParseLaneError) -> Self {
        Self::UnknownCategory(err.0)
    }
}
