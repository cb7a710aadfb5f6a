#![no_std]

multiversx_sc::imports!();

pub mod reference_token_mock_proxy;

/// Stand-in for the reference token ledger used in scenario tests.
/// Balances and the circulating supply are written directly by the
/// test harness and served back through the two views the governance
/// contract consumes.
#[multiversx_sc::contract]
pub trait ReferenceTokenMock {
    #[init]
    fn init(&self) {}

    #[endpoint(setBalance)]
    fn set_balance(&self, holder: ManagedAddress, amount: BigUint) {
        self.balances(&holder).set(&amount);
    }

    #[endpoint(setCirculatingSupply)]
    fn set_circulating_supply(&self, amount: BigUint) {
        self.circulating_supply_value().set(&amount);
    }

    #[view(balanceOf)]
    fn balance_of(&self, holder: ManagedAddress) -> BigUint {
        self.balances(&holder).get()
    }

    #[view(circulatingSupply)]
    fn circulating_supply(&self) -> BigUint {
        self.circulating_supply_value().get()
    }

    #[storage_mapper("balances")]
    fn balances(&self, holder: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("circulatingSupply")]
    fn circulating_supply_value(&self) -> SingleValueMapper<BigUint>;
}
