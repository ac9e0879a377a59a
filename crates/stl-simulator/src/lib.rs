//! Device simulators for the Sensor Telemetry Ledger.
//!
//! Each simulator mimics one physical device class: it periodically builds a
//! randomized envelope and sends it as a UDP datagram to the matching
//! listener, exactly the way real units on the sensor network would. Sender
//! state (the event counter, the socket) is explicit and owned by the
//! simulator task; nothing is ambient.

pub mod error;
pub mod generator;
pub mod simulator;

pub use error::{SimulatorError, SimulatorResult};
pub use generator::SenderState;
pub use simulator::{DeviceSimulator, SimulatorConfig};
