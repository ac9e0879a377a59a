use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, GatewayResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Address the HTTP listener binds.
    pub bind_addr: SocketAddr,
    /// Seed every contract's sample records on startup.
    pub seed_on_start: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".parse().unwrap(),
            seed_on_start: false,
        }
    }
}

impl GatewayConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> GatewayResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| GatewayError::Config(e.to_string()))
    }
}
