//! Taskboard: synchronisation core for a drag-and-drop task board.
//!
//! Tasks live in three fixed lanes (To-Do, In Progress, Done). This crate
//! maintains the in-memory board, interprets drag gestures as reorder or
//! lane-migration intents, applies them optimistically and keeps the board
//! converged with a remote task store.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the remote store
//! - **Adapters**: Concrete store implementations (in-memory, HTTP)
//!
//! # Modules
//!
//! - [`board`]: Board state, gesture interpretation and reconciliation

pub mod board;
