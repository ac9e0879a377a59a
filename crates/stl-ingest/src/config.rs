use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use serde::{Deserialize, Serialize};

use stl_types::{DeviceProfile, DeviceType};

use crate::error::{IngestError, IngestResult};

/// Binding for one device-type listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerConfig {
    pub device_type: DeviceType,
    pub bind_addr: SocketAddr,
}

/// Ingestion-side configuration: where listeners bind, where the gateway
/// lives, and how hard the forwarder tries.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Gateway ingestion endpoint the forwarder POSTs to.
    pub gateway_url: String,
    /// Host address every listener binds on (port comes from the profile).
    pub bind_host: IpAddr,
    /// Bounded forwarder queue capacity; a full queue drops events.
    pub queue_capacity: usize,
    /// Delivery attempts per envelope before the event is abandoned.
    pub max_attempts: u32,
    /// Per-request timeout for forwarder POSTs, in milliseconds.
    pub request_timeout_ms: u64,
    /// Initial retry backoff, in milliseconds (doubles per attempt, capped).
    pub base_backoff_ms: u64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            gateway_url: "http://127.0.0.1:5000/sensor-events".into(),
            bind_host: "127.0.0.1".parse().unwrap(),
            queue_capacity: 256,
            max_attempts: 3,
            request_timeout_ms: 10_000,
            base_backoff_ms: 200,
        }
    }
}

impl IngestConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> IngestResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| IngestError::Config(e.to_string()))
    }

    /// One listener binding per device type, on the deployment's port plan.
    pub fn listener_configs(&self) -> Vec<ListenerConfig> {
        DeviceType::ALL
            .into_iter()
            .map(|ty| ListenerConfig {
                device_type: ty,
                bind_addr: SocketAddr::new(self.bind_host, DeviceProfile::of(ty).default_port),
            })
            .collect()
    }
}
