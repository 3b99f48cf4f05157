//! Domain model for the task board.
//!
//! Holds the task record, the fixed lane set, the ordered board state and
//! the pure interpretation of drag gestures. Nothing here performs I/O.

mod board;
mod error;
mod gesture;
mod ids;
mod lane;
mod task;

pub use board::BoardState;
pub use error::{ParseLaneError, TaskDomainError, TaskValidationError};
pub use gesture::{DragEnd, DropTarget, MoveIntent, interpret};
pub use ids::TaskId;
pub use lane::{Lane, LaneKey, TaskCategory};
pub use task::{PersistedTaskData, Task, TaskLimits};
