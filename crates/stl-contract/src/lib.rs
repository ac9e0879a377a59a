//! Ledger contract for the Sensor Telemetry Ledger (STL).
//!
//! This crate is the core state machine. It provides:
//! - `EventContract`: existence-guarded CRUD plus tag-filtered enumeration
//!   over a key-value world state, parameterized by a device profile
//! - `ContractRegistry`: the five device-type instances sharing one state
//!
//! Each `eventID` has exactly two states, absent and present. `create` moves
//! absent to present, `update` replaces in place, `delete` moves present to
//! absent; `read` and `exists` observe without transitioning. Every value is
//! written through the canonical encoder so independent executions of the
//! same operation produce byte-identical state.

pub mod contract;
pub mod error;
pub mod registry;

pub use contract::EventContract;
pub use error::{ContractError, ContractResult};
pub use registry::ContractRegistry;
