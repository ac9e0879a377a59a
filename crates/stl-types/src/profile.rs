use crate::envelope::{DeviceType, SensorEvent};
use crate::record::EventRecord;

/// Per-device-type constants: the `docType` tag its contract stamps on every
/// record, the UDP port its listener binds, and the sample records its
/// `init_ledger` seeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceProfile {
    pub device_type: DeviceType,
    pub doc_type: &'static str,
    pub default_port: u16,
}

impl DeviceProfile {
    /// The profile for a device type.
    pub fn of(device_type: DeviceType) -> Self {
        match device_type {
            DeviceType::CardReader => Self {
                device_type,
                doc_type: "sensorEvent",
                default_port: 8844,
            },
            DeviceType::Cctv => Self {
                device_type,
                doc_type: "cctvEvent",
                default_port: 8842,
            },
            DeviceType::Co2Sensor => Self {
                device_type,
                doc_type: "co2SensorEvent",
                default_port: 8849,
            },
            DeviceType::Printer => Self {
                device_type,
                doc_type: "printerEvent",
                default_port: 8845,
            },
            DeviceType::Light => Self {
                device_type,
                doc_type: "smartLightEvent",
                default_port: 8843,
            },
        }
    }

    /// Sample records seeded by `init_ledger`, already tagged with this
    /// profile's `docType`.
    pub fn seed_records(&self) -> Vec<EventRecord> {
        self.seed_envelopes()
            .into_iter()
            .map(|envelope| EventRecord::from_envelope(envelope, self.doc_type))
            .collect()
    }

    fn seed_envelopes(&self) -> Vec<SensorEvent> {
        match self.device_type {
            DeviceType::CardReader => seed_set(
                self.device_type,
                "reader_01",
                "Building A - Main Entrance",
                &[
                    ("card_001", "2025-03-14T10:15:30Z", "swipe", "userID:user1; cardID:card1"),
                    ("card_002", "2025-03-14T10:17:30Z", "swipe", "userID:user2; cardID:card2"),
                    ("card_003", "2025-03-14T10:19:30Z", "swipe", "userID:user3; cardID:card3"),
                ],
            ),
            DeviceType::Cctv => seed_set(
                self.device_type,
                "cam_101",
                "Parking Lot A",
                &[
                    ("cctv_001", "2025-03-14T11:00:00Z", "motion_detected", "imageReference:img_202503141100_001.jpg"),
                    ("cctv_002", "2025-03-14T11:02:00Z", "motion_detected", "imageReference:img_202503141102_002.jpg"),
                    ("cctv_003", "2025-03-14T11:04:00Z", "motion_detected", "imageReference:img_202503141104_003.jpg"),
                ],
            ),
            DeviceType::Co2Sensor => seed_set(
                self.device_type,
                "sensor_03",
                "Building C - Lab",
                &[
                    ("sensor_001", "2025-03-14T20:00:00Z", "reading", "co2Level:500; temperature:20"),
                    ("sensor_002", "2025-03-14T20:02:00Z", "reading", "co2Level:650; temperature:22"),
                    ("sensor_003", "2025-03-14T20:04:00Z", "reading", "co2Level:800; temperature:21"),
                ],
            ),
            DeviceType::Printer => seed_set(
                self.device_type,
                "printer_1",
                "Library",
                &[
                    ("printer_001", "2025-03-14T09:30:00Z", "completed", "jobID:job_001; pagesPrinted:5; userID:student1"),
                    ("printer_002", "2025-03-14T09:32:00Z", "completed", "jobID:job_002; pagesPrinted:12; userID:student2"),
                    ("printer_003", "2025-03-14T09:34:00Z", "completed", "jobID:job_003; pagesPrinted:7; userID:student3"),
                ],
            ),
            DeviceType::Light => seed_set(
                self.device_type,
                "light_05",
                "Building B - Corridor",
                &[
                    ("light_001", "2025-03-14T18:45:00Z", "on", "brightness:75; energyConsumption:5W"),
                    ("light_002", "2025-03-14T18:47:00Z", "off", "brightness:65; energyConsumption:4W"),
                    ("light_003", "2025-03-14T18:49:00Z", "on", "brightness:80; energyConsumption:6W"),
                ],
            ),
        }
    }
}

fn seed_set(
    device_type: DeviceType,
    device_id: &str,
    location: &str,
    rows: &[(&str, &str, &str, &str)],
) -> Vec<SensorEvent> {
    rows.iter()
        .map(|(event_id, timestamp, event_type, metadata)| SensorEvent {
            event_id: event_id.to_string(),
            device_type,
            device_id: device_id.to_string(),
            timestamp: timestamp.to_string(),
            event_type: event_type.to_string(),
            location: location.to_string(),
            metadata: metadata.to_string(),
        })
        .collect()
}
