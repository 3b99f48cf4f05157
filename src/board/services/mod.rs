//! Application services for board synchronisation.

mod mutation;
mod shared;
mod sync;

pub use mutation::{
    CreateTaskRequest, EditTaskRequest, TaskMutationError, TaskMutationResult, TaskMutationService,
};
pub use shared::SharedBoard;
pub use sync::{BoardSyncService, MoveOutcome};
