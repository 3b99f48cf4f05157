//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod task_store;

pub use task_store::{NewTask, TaskPatch, TaskStore, TaskStoreError, TaskStoreResult};
