use serde::{Deserialize, Serialize};

use crate::envelope::{DeviceType, SensorEvent};

/// A stored world-state record: the envelope plus the `docType` tag of the
/// contract that owns it.
///
/// All device types share one flat key namespace, so enumeration relies on
/// `docType` to tell record populations apart. The tag is assigned at write
/// time and never supplied by producers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "eventID")]
    pub event_id: String,

    #[serde(rename = "deviceType")]
    pub device_type: DeviceType,

    #[serde(rename = "deviceID")]
    pub device_id: String,

    pub timestamp: String,

    #[serde(rename = "eventType")]
    pub event_type: String,

    pub location: String,

    pub metadata: String,

    /// Discriminator tag for filtering the shared namespace.
    #[serde(rename = "docType")]
    pub doc_type: String,
}

impl EventRecord {
    /// Assemble a record from an envelope and the owning contract's tag.
    pub fn from_envelope(envelope: SensorEvent, doc_type: &str) -> Self {
        Self {
            event_id: envelope.event_id,
            device_type: envelope.device_type,
            device_id: envelope.device_id,
            timestamp: envelope.timestamp,
            event_type: envelope.event_type,
            location: envelope.location,
            metadata: envelope.metadata,
            doc_type: doc_type.to_string(),
        }
    }

    /// The envelope view of this record (drops `docType`).
    pub fn into_envelope(self) -> SensorEvent {
        SensorEvent {
            event_id: self.event_id,
            device_type: self.device_type,
            device_id: self.device_id,
            timestamp: self.timestamp,
            event_type: self.event_type,
            location: self.location,
            metadata: self.metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope() -> SensorEvent {
        SensorEvent {
            event_id: "printer_010".into(),
            device_type: DeviceType::Printer,
            device_id: "printer_1".into(),
            timestamp: "2025-03-14T09:30:00Z".into(),
            event_type: "completed".into(),
            location: "Library".into(),
            metadata: "jobID:job_010; pagesPrinted:3; userID:student7".into(),
        }
    }

    #[test]
    fn from_envelope_applies_doc_type() {
        let record = EventRecord::from_envelope(envelope(), "printerEvent");
        assert_eq!(record.doc_type, "printerEvent");
        assert_eq!(record.event_id, "printer_010");
        assert_eq!(record.device_type, DeviceType::Printer);
    }

    #[test]
    fn envelope_roundtrip_drops_doc_type() {
        let original = envelope();
        let record = EventRecord::from_envelope(original.clone(), "printerEvent");
        assert_eq!(record.into_envelope(), original);
    }

    #[test]
    fn doc_type_serializes_under_wire_name() {
        let record = EventRecord::from_envelope(envelope(), "printerEvent");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["docType"], "printerEvent");
    }
}
