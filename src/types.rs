multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Stage — phase within the current cycle, derived from block nonce
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Stage {
    /// Outside every active window. Covers the close slot and the
    /// trailing safety-margin slots of the period.
    Idle,
    /// Candidates may register.
    Submission,
    /// Registered candidates may receive weighted votes.
    Election,
    /// Holders may back the current finalist.
    Decision,
}

// ============================================================
// Cycle kind — alternates with the cycle counter
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum CycleKind {
    /// Even cycles commit into the decision-maker slot.
    DecisionMaker,
    /// Odd cycles commit into the governance slot.
    Governance,
}

// ============================================================
// Finalist — current vote leader, refreshed on every vote
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Finalist<M: ManagedTypeApi> {
    pub address: ManagedAddress<M>,
    /// Distinct voters backing the leader when it last took or kept the lead.
    pub vote_count: u64,
    /// Aggregate vote weight at that same moment.
    pub weight: BigUint<M>,
}

// ============================================================
// Cycle outcome — snapshot taken at close, outlives the reset
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct CycleOutcome<M: ManagedTypeApi> {
    /// Counter value of the cycle this outcome was recorded for.
    pub cycle: u64,
    pub kind: CycleKind,
    pub address: ManagedAddress<M>,
    pub vote_count: u64,
    pub weight: BigUint<M>,
    pub support: BigUint<M>,
    /// Whether quorum was reached and the external slot written.
    pub committed: bool,
}
