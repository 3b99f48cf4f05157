//! In-memory adapters for board ports.

mod task_store;

pub use task_store::InMemoryTaskStore;
