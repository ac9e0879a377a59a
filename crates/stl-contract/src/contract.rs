use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use stl_state::WorldState;
use stl_types::canonical::to_canonical_json;
use stl_types::{DeviceProfile, DeviceType, EventRecord, SensorEvent};

use crate::error::{ContractError, ContractResult};

/// The ledger contract for one device type.
///
/// Five instances share identical logic and one world-state namespace; only
/// the [`DeviceProfile`] (docType constant, seed data) differs. Operations
/// are existence-guarded: `create` refuses a present key, `update` and
/// `delete` refuse an absent one, so a write can never silently duplicate or
/// lose an event.
///
/// Atomicity across concurrent writers to the same key is the hosting
/// platform's concern; within this crate each operation is a single
/// synchronized store call.
pub struct EventContract {
    profile: DeviceProfile,
    state: Arc<dyn WorldState>,
}

impl EventContract {
    /// Create a contract instance over a (possibly shared) world state.
    pub fn new(profile: DeviceProfile, state: Arc<dyn WorldState>) -> Self {
        Self { profile, state }
    }

    /// The device type this contract serves.
    pub fn device_type(&self) -> DeviceType {
        self.profile.device_type
    }

    /// The tag stamped on every record this contract writes.
    pub fn doc_type(&self) -> &'static str {
        self.profile.doc_type
    }

    /// Seed the profile's sample records.
    ///
    /// Re-running overwrites the same keys with the same canonical bytes; the
    /// operation is not guarded against re-invocation.
    pub fn init_ledger(&self) -> ContractResult<()> {
        for record in self.profile.seed_records() {
            let encoded = to_canonical_json(&record)?;
            self.state.put(&record.event_id, &encoded)?;
        }
        debug!(device_type = %self.profile.device_type, "ledger seeded");
        Ok(())
    }

    /// Record a new event. Fails with `AlreadyExists` if the key is present;
    /// no partial write occurs. Returns the canonical serialized record.
    pub fn create_event(&self, envelope: SensorEvent) -> ContractResult<String> {
        if self.event_exists(&envelope.event_id)? {
            return Err(ContractError::AlreadyExists(envelope.event_id));
        }
        self.write_record(envelope)
    }

    /// Read the stored encoding for an event, unchanged from what was last
    /// written. Fails with `NotFound` if absent.
    pub fn read_event(&self, event_id: &str) -> ContractResult<String> {
        self.state
            .get(event_id)?
            .ok_or_else(|| ContractError::NotFound(event_id.to_string()))
    }

    /// Fully replace an existing event. Fails with `NotFound` if absent.
    /// The replacement goes through the same assembly and encoding as
    /// `create_event`, bypassing only the existence refusal.
    pub fn update_event(&self, envelope: SensorEvent) -> ContractResult<String> {
        if !self.event_exists(&envelope.event_id)? {
            return Err(ContractError::NotFound(envelope.event_id));
        }
        self.write_record(envelope)
    }

    /// Permanently remove an event. Fails with `NotFound` if absent.
    pub fn delete_event(&self, event_id: &str) -> ContractResult<()> {
        if !self.state.delete(event_id)? {
            return Err(ContractError::NotFound(event_id.to_string()));
        }
        debug!(event_id, "event deleted");
        Ok(())
    }

    /// Presence probe for an event key.
    pub fn event_exists(&self, event_id: &str) -> ContractResult<bool> {
        Ok(self.state.contains(event_id)?)
    }

    /// Enumerate every record in the shared namespace whose `docType` matches
    /// this contract.
    ///
    /// The scan is unscoped: all device types share one namespace, so the
    /// filter runs value-side. Values that fail to parse as JSON are passed
    /// through as raw strings rather than dropped, so a scan never hides
    /// foreign data sharing the namespace.
    pub fn get_all_events(&self) -> ContractResult<Vec<Value>> {
        let mut results = Vec::new();
        for (_key, raw) in self.state.scan()? {
            match serde_json::from_str::<Value>(&raw) {
                Ok(record) => {
                    if record.get("docType").and_then(Value::as_str) == Some(self.profile.doc_type)
                    {
                        results.push(record);
                    }
                }
                Err(_) => results.push(Value::String(raw)),
            }
        }
        Ok(results)
    }

    fn write_record(&self, envelope: SensorEvent) -> ContractResult<String> {
        let record = EventRecord::from_envelope(envelope, self.profile.doc_type);
        let encoded = to_canonical_json(&record)?;
        self.state.put(&record.event_id, &encoded)?;
        debug!(event_id = %record.event_id, doc_type = %record.doc_type, "event written");
        Ok(encoded)
    }
}
