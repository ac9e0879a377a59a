//! World-state storage for the Sensor Telemetry Ledger.
//!
//! The ledger contract executes against a flat key-value "world state": the
//! current value for each key, with no history. This crate defines that
//! boundary and an in-memory implementation. The hosting ledger platform is
//! responsible for replicating the state across nodes; within this crate a
//! state is a single-process store.
//!
//! # Design Rules
//!
//! 1. Keys are event identifiers; values are opaque serialized records. The
//!    store never interprets values.
//! 2. Enumeration order is deterministic: `scan` yields entries in ascending
//!    key order on every backend, so independent executions agree.
//! 3. All storage errors are propagated, never silently ignored.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StateError, StateResult};
pub use memory::InMemoryWorldState;
pub use traits::WorldState;
