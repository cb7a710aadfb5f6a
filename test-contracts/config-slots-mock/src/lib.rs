#![no_std]

multiversx_sc::imports!();

pub mod config_slots_mock_proxy;

use cycle_governance::types::CycleKind;

/// Stand-in for the external configuration target. Records the address
/// committed into each slot so tests can observe (or rule out) the
/// write performed at cycle close.
#[multiversx_sc::contract]
pub trait ConfigSlotsMock {
    #[init]
    fn init(&self) {}

    #[endpoint(setSlot)]
    fn set_slot(&self, kind: CycleKind, address: ManagedAddress) {
        match kind {
            CycleKind::DecisionMaker => self.dm_address().set(&address),
            CycleKind::Governance => self.gov_address().set(&address),
        }
    }

    #[view(getDmAddress)]
    fn get_dm_address(&self) -> ManagedAddress {
        if self.dm_address().is_empty() {
            ManagedAddress::zero()
        } else {
            self.dm_address().get()
        }
    }

    #[view(getGovAddress)]
    fn get_gov_address(&self) -> ManagedAddress {
        if self.gov_address().is_empty() {
            ManagedAddress::zero()
        } else {
            self.gov_address().get()
        }
    }

    #[storage_mapper("dmAddress")]
    fn dm_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("govAddress")]
    fn gov_address(&self) -> SingleValueMapper<ManagedAddress>;
}
