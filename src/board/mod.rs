//! Board synchronisation core.
//!
//! Keeps an ordered, lane-partitioned view of tasks in memory, turns drag
//! gestures into move intents, applies them optimistically and reconciles
//! lane changes with a remote task store. Create, edit and delete take the
//! slower path of a remote mutation followed by a full refresh. The module
//! follows hexagonal architecture:
//!
//! - Domain types, board state and gesture interpretation in [`domain`]
//! - The task store contract in [`ports`]
//! - In-memory and HTTP stores in [`adapters`]
//! - Reconciliation and mutation services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
