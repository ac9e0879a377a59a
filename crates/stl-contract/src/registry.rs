use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::info;

use stl_state::WorldState;
use stl_types::{DeviceProfile, DeviceType};

use crate::contract::EventContract;
use crate::error::ContractResult;

/// The five device-type contract instances over one shared world state.
///
/// The namespace is deliberately global: `eventID` uniqueness holds across
/// device types, and each contract's enumeration filters the shared keyspace
/// by its own `docType`.
pub struct ContractRegistry {
    contracts: BTreeMap<DeviceType, EventContract>,
    state: Arc<dyn WorldState>,
}

impl ContractRegistry {
    /// Register one contract per device type over the given state.
    pub fn new(state: Arc<dyn WorldState>) -> Self {
        let contracts = DeviceType::ALL
            .into_iter()
            .map(|ty| {
                (
                    ty,
                    EventContract::new(DeviceProfile::of(ty), state.clone()),
                )
            })
            .collect();
        Self { contracts, state }
    }

    /// The contract registered for a device type.
    pub fn contract(&self, device_type: DeviceType) -> &EventContract {
        // The constructor registers all variants, so the lookup is total.
        &self.contracts[&device_type]
    }

    /// Iterate over the registered contracts in device-type order.
    pub fn contracts(&self) -> impl Iterator<Item = &EventContract> {
        self.contracts.values()
    }

    /// Exact-key read across the shared namespace.
    ///
    /// Key reads are unfiltered observations, so every instance resolves a
    /// given key identically; the registry delegates to its first contract.
    pub fn read_event(&self, event_id: &str) -> ContractResult<String> {
        self.contracts
            .values()
            .next()
            .expect("registry always holds all device types")
            .read_event(event_id)
    }

    /// Seed every contract's sample records.
    pub fn init_all(&self) -> ContractResult<()> {
        for contract in self.contracts.values() {
            contract.init_ledger()?;
        }
        info!(contracts = self.contracts.len(), "all ledgers seeded");
        Ok(())
    }

    /// The shared world state.
    pub fn state(&self) -> &Arc<dyn WorldState> {
        &self.state
    }
}
