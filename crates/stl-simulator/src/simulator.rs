use std::net::SocketAddr;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::net::UdpSocket;
use tracing::{debug, info};

use stl_types::{DeviceType, SensorEvent};

use crate::error::{SimulatorError, SimulatorResult};
use crate::generator::SenderState;

#[derive(Clone, Copy, Debug)]
pub struct SimulatorConfig {
    pub device_type: DeviceType,
    /// Listener address datagrams are sent to.
    pub target: SocketAddr,
    /// Delay between events.
    pub interval: Duration,
    /// Number of events to send; `None` runs until the task is dropped.
    pub count: Option<u64>,
}

impl SimulatorConfig {
    pub fn new(device_type: DeviceType, target: SocketAddr) -> Self {
        Self {
            device_type,
            target,
            // The firmware this mimics emits every two seconds.
            interval: Duration::from_secs(2),
            count: None,
        }
    }
}

/// A simulated device: owns its socket, counter state, and RNG.
pub struct DeviceSimulator {
    config: SimulatorConfig,
    state: SenderState,
    socket: UdpSocket,
    rng: StdRng,
}

impl DeviceSimulator {
    /// Bind an outgoing socket for the simulator.
    pub async fn start(config: SimulatorConfig) -> SimulatorResult<Self> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        info!(
            device_type = %config.device_type,
            target = %config.target,
            "simulator started"
        );
        Ok(Self {
            state: SenderState::new(config.device_type),
            socket,
            rng: StdRng::from_entropy(),
            config,
        })
    }

    /// Build and send one telemetry datagram; returns the envelope sent.
    pub async fn send_one(&mut self) -> SimulatorResult<SensorEvent> {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let envelope = self.state.next_event(&mut self.rng, timestamp);
        let payload = serde_json::to_vec(&envelope)
            .map_err(|e| SimulatorError::Serialization(e.to_string()))?;
        self.socket.send_to(&payload, self.config.target).await?;
        debug!(
            event_id = %envelope.event_id,
            device_type = %envelope.device_type,
            "telemetry datagram sent"
        );
        Ok(envelope)
    }

    /// Send on the configured interval until the count is exhausted (or
    /// forever when no count is set).
    pub async fn run(mut self) -> SimulatorResult<()> {
        let mut ticker = tokio::time::interval(self.config.interval);
        loop {
            ticker.tick().await;
            self.send_one().await?;
            if let Some(count) = self.config.count {
                if self.state.sent() >= count {
                    info!(
                        device_type = %self.config.device_type,
                        sent = self.state.sent(),
                        "simulator finished"
                    );
                    return Ok(());
                }
            }
        }
    }
}
