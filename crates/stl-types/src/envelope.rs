use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The five device classes the system ingests.
///
/// The serialized form is the wire tag carried in the `deviceType` field of
/// every datagram and stored record (`card_reader`, `cctv`, `co2_sensor`,
/// `printer`, `light`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    CardReader,
    Cctv,
    Co2Sensor,
    Printer,
    Light,
}

impl DeviceType {
    /// All device types, in registry order.
    pub const ALL: [DeviceType; 5] = [
        DeviceType::CardReader,
        DeviceType::Cctv,
        DeviceType::Co2Sensor,
        DeviceType::Printer,
        DeviceType::Light,
    ];

    /// The wire tag used in JSON payloads.
    pub fn wire_tag(&self) -> &'static str {
        match self {
            Self::CardReader => "card_reader",
            Self::Cctv => "cctv",
            Self::Co2Sensor => "co2_sensor",
            Self::Printer => "printer",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_tag())
    }
}

impl FromStr for DeviceType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card_reader" => Ok(Self::CardReader),
            "cctv" => Ok(Self::Cctv),
            "co2_sensor" => Ok(Self::Co2Sensor),
            "printer" => Ok(Self::Printer),
            "light" => Ok(Self::Light),
            other => Err(TypeError::UnknownDeviceType(other.to_string())),
        }
    }
}

/// The canonical event envelope.
///
/// Every device listener normalizes raw telemetry into this shape before
/// forwarding. Field names on the wire are fixed by the ingestion protocol
/// (`eventID`, `deviceType`, ...). The envelope deliberately carries no
/// `docType`: that tag is assigned by the ledger contract that stores it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorEvent {
    /// Globally unique, caller-assigned identifier; the world-state key.
    #[serde(rename = "eventID")]
    pub event_id: String,

    /// Which device class produced the event.
    #[serde(rename = "deviceType")]
    pub device_type: DeviceType,

    /// Identifier of the originating physical or simulated unit.
    #[serde(rename = "deviceID")]
    pub device_id: String,

    /// ISO-8601 timestamp, producer-assigned. No trust is placed in
    /// arrival order, so this is never overwritten server-side.
    pub timestamp: String,

    /// Device-specific discriminator (`swipe`, `motion_detected`, ...).
    #[serde(rename = "eventType")]
    pub event_type: String,

    /// Free-text location.
    pub location: String,

    /// Opaque `key:value; key:value` pairs; not structurally validated.
    pub metadata: String,
}
