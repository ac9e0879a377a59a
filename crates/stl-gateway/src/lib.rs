//! HTTP gateway for the Sensor Telemetry Ledger.
//!
//! The gateway is the front door for ingestion: it validates that an
//! incoming envelope carries every required field, routes it to the contract
//! registered for its device type, and maps contract outcomes onto the HTTP
//! surface. It performs no retries and no deduplication; exactly-once
//! semantics rest entirely on the contract's existence check.
//!
//! # Endpoints
//!
//! - `POST /sensor-events` — validate and record an envelope
//! - `GET /sensor-events` — enumerate records (`?deviceType=` to scope)
//! - `GET /sensor-events/:event_id` — exact-key read
//! - `GET /v1/health`, `GET /v1/info` — liveness and build info

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use server::GatewayServer;
