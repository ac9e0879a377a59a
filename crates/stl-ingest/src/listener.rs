use std::net::SocketAddr;

use tokio::net::UdpSocket;
use tracing::{info, warn};

use stl_types::{DeviceType, SensorEvent};

use crate::error::{IngestError, IngestResult};
use crate::forwarder::ForwarderHandle;

/// Largest datagram a listener accepts. Telemetry envelopes are a few
/// hundred bytes; anything larger is truncated by the read and then fails
/// to decode.
const MAX_DATAGRAM: usize = 64 * 1024;

/// Decode a raw datagram payload into an envelope.
///
/// Pure function so malformed-input handling is testable without sockets.
pub fn decode_datagram(payload: &[u8]) -> IngestResult<SensorEvent> {
    serde_json::from_slice(payload).map_err(|e| IngestError::Decode(e.to_string()))
}

/// UDP listener for one device type.
///
/// The listener is the always-on receiver: it never blocks on downstream
/// delivery and never retries. Malformed datagrams are logged and dropped;
/// valid envelopes are handed to the forwarder queue without awaiting the
/// outcome.
pub struct DeviceListener {
    device_type: DeviceType,
    socket: UdpSocket,
    forwarder: ForwarderHandle,
}

impl DeviceListener {
    /// Bind the listener's socket.
    pub async fn bind(
        device_type: DeviceType,
        addr: SocketAddr,
        forwarder: ForwarderHandle,
    ) -> IngestResult<Self> {
        let socket = UdpSocket::bind(addr).await?;
        info!(device_type = %device_type, addr = %socket.local_addr()?, "listener bound");
        Ok(Self {
            device_type,
            socket,
            forwarder,
        })
    }

    /// The bound address (useful when binding port 0 in tests).
    pub fn local_addr(&self) -> IngestResult<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Receive loop. Runs until the task is dropped.
    pub async fn run(self) -> IngestResult<()> {
        let mut buf = vec![0u8; MAX_DATAGRAM];
        loop {
            let (len, peer) = self.socket.recv_from(&mut buf).await?;
            self.handle_datagram(&buf[..len], peer);
        }
    }

    fn handle_datagram(&self, payload: &[u8], peer: SocketAddr) {
        match decode_datagram(payload) {
            Ok(envelope) => {
                info!(
                    peer = %peer,
                    device_type = %envelope.device_type,
                    event_id = %envelope.event_id,
                    event_type = %envelope.event_type,
                    "datagram received"
                );
                if !self.forwarder.try_enqueue(envelope) {
                    warn!(peer = %peer, device_type = %self.device_type, "forwarder queue full, event dropped");
                }
            }
            Err(e) => {
                // The sender, if it cares, must retry; the listener only
                // records the drop.
                warn!(peer = %peer, device_type = %self.device_type, error = %e, "dropping malformed datagram");
            }
        }
    }
}
