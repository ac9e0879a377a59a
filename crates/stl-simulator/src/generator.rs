use rand::Rng;

use stl_types::{DeviceType, SensorEvent};

/// Explicit per-sender state: the running event counter.
///
/// Each sender task owns one of these and threads it through event
/// generation; there is no shared or module-level counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderState {
    device_type: DeviceType,
    counter: u64,
}

impl SenderState {
    pub fn new(device_type: DeviceType) -> Self {
        Self {
            device_type,
            counter: 1,
        }
    }

    /// Events generated so far.
    pub fn sent(&self) -> u64 {
        self.counter - 1
    }

    /// Build the next telemetry envelope and advance the counter.
    ///
    /// Payload shapes mirror the deployed sensor firmware: fixed unit IDs
    /// and locations per device class, counter-derived event IDs, and
    /// randomized readings in each class's plausible range.
    pub fn next_event<R: Rng>(&mut self, rng: &mut R, timestamp: String) -> SensorEvent {
        let n = self.counter;
        self.counter += 1;

        let (event_id, device_id, event_type, location, metadata) = match self.device_type {
            DeviceType::CardReader => (
                format!("card_{n:03}"),
                "reader_01",
                "swipe".to_string(),
                "Building A - Main Entrance",
                format!(
                    "userID:user{}; cardID:card{}",
                    rng.gen_range(0..1000),
                    rng.gen_range(0..1000)
                ),
            ),
            DeviceType::Cctv => (
                format!("cctv_{n:03}"),
                "cam_101",
                "motion_detected".to_string(),
                "Parking Lot A",
                format!("imageReference:img_202503141100_{n:03}.jpg"),
            ),
            DeviceType::Co2Sensor => (
                format!("sensor_{n:03}"),
                "sensor_03",
                "reading".to_string(),
                "Building C - Lab",
                format!(
                    "co2Level:{}; temperature:{}",
                    rng.gen_range(400..=2000),
                    rng.gen_range(15..=30)
                ),
            ),
            DeviceType::Printer => (
                format!("printer_{n:03}"),
                "printer_1",
                "completed".to_string(),
                "Library",
                format!(
                    "jobID:job_{n:03}; pagesPrinted:{}; userID:student{n}",
                    rng.gen_range(1..=20)
                ),
            ),
            DeviceType::Light => (
                format!("light_{n:03}"),
                "light_05",
                if n % 2 == 0 { "off" } else { "on" }.to_string(),
                "Building B - Corridor",
                format!(
                    "brightness:{}; energyConsumption:{}W",
                    rng.gen_range(50..=100),
                    rng.gen_range(1..=10)
                ),
            ),
        };

        SensorEvent {
            event_id,
            device_type: self.device_type,
            device_id: device_id.to_string(),
            timestamp,
            event_type,
            location: location.to_string(),
            metadata,
        }
    }
}
