//! Telemetry ingestion for the Sensor Telemetry Ledger.
//!
//! One [`DeviceListener`] per device type accepts raw UDP datagrams, decodes
//! them into the envelope, and hands valid envelopes to the forwarder
//! without waiting on delivery. Malformed datagrams are logged and dropped
//! at the edge; nothing propagates upstream and the sender is never asked to
//! retry.
//!
//! The forwarder side decouples ingestion throughput from ledger write
//! latency: listeners enqueue onto a bounded channel (`try_send`, so a burst
//! never backpressures the socket), and a worker task drains the queue,
//! POSTing each envelope to the gateway with capped-backoff retries. An
//! envelope that exhausts its retries is lost with an ERROR trace; there is
//! no dead-letter store.

pub mod config;
pub mod error;
pub mod forwarder;
pub mod listener;

pub use config::{IngestConfig, ListenerConfig};
pub use error::{IngestError, IngestResult};
pub use forwarder::{spawn_forwarder, Forward, ForwarderHandle, HttpForwarder, RetryPolicy};
pub use listener::{decode_datagram, DeviceListener};
