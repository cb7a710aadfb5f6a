#![no_std]

multiversx_sc::imports!();

pub mod config_slots_proxy;
pub mod cycle_governance_proxy;
pub mod reference_token_proxy;
pub mod types;

use types::{CycleKind, CycleOutcome, Finalist, Stage};

// ============================================================
// Constants
// ============================================================

/// Slots in one full period. Positions 1/2/3 are the submission,
/// election and decision windows; positions 4, 5 and 0 are idle.
const CYCLE_PERIOD_SLOTS: u64 = 6;

/// The single idle slot in which closeCycle is accepted.
const CLOSE_SLOT_POSITION: u64 = 4;

/// Percentage denominator for the quorum comparison.
const PERCENT_DENOMINATOR: u64 = 100;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait CycleGovernance {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        reference_token_address: ManagedAddress,
        config_target_address: ManagedAddress,
        blocks_per_slot: u64,
        quorum_threshold_percent: u64,
    ) {
        require!(blocks_per_slot > 0, "Slot width must be positive");
        require!(
            quorum_threshold_percent > 0 && quorum_threshold_percent <= PERCENT_DENOMINATOR,
            "Quorum threshold out of range"
        );
        self.reference_token_address().set(&reference_token_address);
        self.config_target_address().set(&config_target_address);
        self.blocks_per_slot().set(blocks_per_slot);
        self.quorum_threshold_percent().set(quorum_threshold_percent);
        self.cycle_counter().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: submitCandidate
    // Registers an address for the current cycle's election.
    // ========================================================

    #[endpoint(submitCandidate)]
    fn submit_candidate(&self, candidate: ManagedAddress) {
        require!(
            self.get_stage() == Stage::Submission,
            "Not in submission window"
        );

        let cycle = self.cycle_counter().get();
        require!(
            !self.candidates(cycle).contains(&candidate),
            "Candidate already registered"
        );

        self.candidates(cycle).insert(candidate.clone());

        self.candidate_submitted_event(cycle, &candidate);
    }

    // ========================================================
    // ENDPOINT: vote
    // Weighted by the caller's reference-token balance, read live
    // at call time. A voter holds at most one active vote per
    // cycle; voting again recasts or switches it.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, candidate: ManagedAddress) {
        require!(
            self.get_stage() == Stage::Election,
            "Not in election window"
        );

        let cycle = self.cycle_counter().get();
        require!(
            self.candidates(cycle).contains(&candidate),
            "Unknown candidate"
        );

        let voter = self.blockchain().get_caller();
        let new_weight = self.read_balance(&voter);
        require!(new_weight > 0u64, "No voting weight");

        if self.voter_choice(cycle, &voter).is_empty() {
            // First vote this cycle
            self.candidate_weight(cycle, &candidate)
                .update(|w| *w += &new_weight);
            self.candidate_vote_count(cycle, &candidate)
                .update(|c| *c += 1);
        } else {
            let previous = self.voter_choice(cycle, &voter).get();
            let old_weight = self.voter_weight(cycle, &voter).get();
            if previous == candidate {
                // Recast for the same candidate at the current balance
                self.candidate_weight(cycle, &candidate).update(|w| {
                    *w -= &old_weight;
                    *w += &new_weight;
                });
            } else {
                // Switch: withdraw from the previous candidate first
                self.candidate_weight(cycle, &previous)
                    .update(|w| *w -= &old_weight);
                self.candidate_vote_count(cycle, &previous)
                    .update(|c| *c -= 1);
                self.candidate_weight(cycle, &candidate)
                    .update(|w| *w += &new_weight);
                self.candidate_vote_count(cycle, &candidate)
                    .update(|c| *c += 1);
            }
        }

        self.voter_choice(cycle, &voter).set(&candidate);
        self.voter_weight(cycle, &voter).set(&new_weight);

        self.refresh_finalist(cycle, &candidate);

        self.vote_cast_event(cycle, &voter, &candidate, &new_weight);
    }

    // ========================================================
    // ENDPOINT: support
    // One-shot backing of the current finalist, weighted by the
    // caller's live balance. Feeds the quorum check at close.
    // ========================================================

    #[endpoint(support)]
    fn support(&self) {
        require!(
            self.get_stage() == Stage::Decision,
            "Not in decision window"
        );

        let cycle = self.cycle_counter().get();
        require!(!self.finalist(cycle).is_empty(), "No finalist to support");

        let supporter = self.blockchain().get_caller();
        require!(
            self.supporter_weight(cycle, &supporter).is_empty(),
            "Already supported"
        );

        let weight = self.read_balance(&supporter);
        require!(weight > 0u64, "No support weight");

        self.supporter_weight(cycle, &supporter).set(&weight);
        self.support_total(cycle).update(|t| *t += &weight);

        self.support_registered_event(cycle, &supporter, &weight);
    }

    // ========================================================
    // ENDPOINT: closeCycle
    // Accepted only in the dedicated close slot, once per period.
    // Commits the finalist into the parity-selected external slot
    // when quorum is reached, snapshots the outcome, then advances
    // the counter, retiring all per-cycle state at once.
    // ========================================================

    #[endpoint(closeCycle)]
    fn close_cycle(&self) {
        let position = self.current_slot_position();
        let period = self.current_period();
        let already_closed =
            !self.last_close_period().is_empty() && self.last_close_period().get() == period;
        require!(
            position == CLOSE_SLOT_POSITION && !already_closed,
            "Not in close window"
        );

        let cycle = self.cycle_counter().get();
        let kind = self.cycle_kind_of(cycle);

        let mut committed = false;
        if !self.finalist(cycle).is_empty() {
            let finalist = self.finalist(cycle).get();
            let support = self.support_total(cycle).get();

            if self.quorum_reached(&support) {
                let config_target = self.config_target_address().get();
                self.tx()
                    .to(&config_target)
                    .typed(config_slots_proxy::ConfigSlotsProxy)
                    .set_slot(kind, finalist.address.clone())
                    .sync_call();
                committed = true;
            }

            // The outcome is recorded whether or not it was acted upon.
            // A cycle that never saw a vote leaves the previous record.
            self.decided().set(&CycleOutcome {
                cycle,
                kind,
                address: finalist.address,
                vote_count: finalist.vote_count,
                weight: finalist.weight,
                support,
                committed,
            });
        }

        self.last_close_period().set(period);
        self.cycle_counter().set(cycle + 1);

        self.cycle_closed_event(cycle, kind, committed);
    }

    // ========================================================
    // INTERNAL: stage clock
    // Derived from the block nonce; slot boundaries fall on exact
    // multiples of the slot width.
    // ========================================================

    fn current_slot_position(&self) -> u64 {
        let nonce = self.blockchain().get_block_nonce();
        (nonce / self.blocks_per_slot().get()) % CYCLE_PERIOD_SLOTS
    }

    fn current_period(&self) -> u64 {
        let nonce = self.blockchain().get_block_nonce();
        nonce / (self.blocks_per_slot().get() * CYCLE_PERIOD_SLOTS)
    }

    /// Cycle kind is a pure function of the counter, never stored.
    fn cycle_kind_of(&self, cycle: u64) -> CycleKind {
        if cycle % 2 == 0 {
            CycleKind::DecisionMaker
        } else {
            CycleKind::Governance
        }
    }

    // ========================================================
    // INTERNAL: finalist tracking
    // Runs after every vote mutation; no rescans. A strictly
    // greater weight takes the lead; on an exact tie the incumbent
    // keeps it, unless the mutated candidate is the incumbent, in
    // which case the snapshot is refreshed in place.
    // ========================================================

    fn refresh_finalist(&self, cycle: u64, candidate: &ManagedAddress) {
        let weight = self.candidate_weight(cycle, candidate).get();
        let mapper = self.finalist(cycle);

        let takes_lead = if mapper.is_empty() {
            true
        } else {
            let current = mapper.get();
            weight > current.weight
                || (weight == current.weight && current.address == *candidate)
        };
        if !takes_lead {
            return;
        }

        mapper.set(&Finalist {
            address: candidate.clone(),
            vote_count: self.candidate_vote_count(cycle, candidate).get(),
            weight: weight.clone(),
        });

        self.finalist_updated_event(cycle, candidate, &weight);
    }

    // ========================================================
    // INTERNAL: quorum + external reads
    // Balances are never cached past the call that needed them.
    // ========================================================

    fn quorum_reached(&self, support: &BigUint) -> bool {
        let supply = self.read_circulating_supply();
        if supply == 0u64 {
            return false;
        }
        support * PERCENT_DENOMINATOR >= &supply * self.quorum_threshold_percent().get()
    }

    fn read_balance(&self, holder: &ManagedAddress) -> BigUint {
        let token_address = self.reference_token_address().get();
        self.tx()
            .to(&token_address)
            .typed(reference_token_proxy::ReferenceTokenProxy)
            .balance_of(holder.clone())
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn read_circulating_supply(&self) -> BigUint {
        let token_address = self.reference_token_address().get();
        self.tx()
            .to(&token_address)
            .typed(reference_token_proxy::ReferenceTokenProxy)
            .circulating_supply()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getStage)]
    fn get_stage(&self) -> Stage {
        match self.current_slot_position() {
            1 => Stage::Submission,
            2 => Stage::Election,
            3 => Stage::Decision,
            _ => Stage::Idle,
        }
    }

    #[view(getSlotPosition)]
    fn get_slot_position(&self) -> u64 {
        self.current_slot_position()
    }

    #[view(getCycleKind)]
    fn get_cycle_kind(&self) -> CycleKind {
        self.cycle_kind_of(self.cycle_counter().get())
    }

    #[view(getCandidateCount)]
    fn get_candidate_count(&self) -> u64 {
        let cycle = self.cycle_counter().get();
        self.candidates(cycle).len() as u64
    }

    #[view(getCandidates)]
    fn get_candidates(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let cycle = self.cycle_counter().get();
        let mut result = MultiValueEncoded::new();
        let total = self.candidates(cycle).len();
        let start = from as usize;
        let end = core::cmp::min(start + count as usize, total);

        for (idx, candidate) in self.candidates(cycle).iter().enumerate() {
            if idx >= start && idx < end {
                result.push(candidate);
            }
            if idx >= end {
                break;
            }
        }
        result
    }

    #[view(isCandidate)]
    fn is_candidate(&self, address: ManagedAddress) -> bool {
        let cycle = self.cycle_counter().get();
        self.candidates(cycle).contains(&address)
    }

    #[view(getCandidateVotes)]
    fn get_candidate_votes(&self, candidate: ManagedAddress) -> u64 {
        let cycle = self.cycle_counter().get();
        self.candidate_vote_count(cycle, &candidate).get()
    }

    #[view(getCandidateWeight)]
    fn get_candidate_weight(&self, candidate: ManagedAddress) -> BigUint {
        let cycle = self.cycle_counter().get();
        self.candidate_weight(cycle, &candidate).get()
    }

    #[view(getCandidateVoterWeight)]
    fn get_candidate_voter_weight(
        &self,
        candidate: ManagedAddress,
        voter: ManagedAddress,
    ) -> BigUint {
        let cycle = self.cycle_counter().get();
        if self.voter_choice(cycle, &voter).is_empty()
            || self.voter_choice(cycle, &voter).get() != candidate
        {
            return BigUint::zero();
        }
        self.voter_weight(cycle, &voter).get()
    }

    #[view(getVoterChoice)]
    fn get_voter_choice(
        &self,
        voter: ManagedAddress,
    ) -> OptionalValue<MultiValue2<ManagedAddress, BigUint>> {
        let cycle = self.cycle_counter().get();
        if self.voter_choice(cycle, &voter).is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(
            (
                self.voter_choice(cycle, &voter).get(),
                self.voter_weight(cycle, &voter).get(),
            )
                .into(),
        )
    }

    #[view(getFinalist)]
    fn get_finalist(&self) -> OptionalValue<Finalist<Self::Api>> {
        let cycle = self.cycle_counter().get();
        let mapper = self.finalist(cycle);
        if mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(mapper.get())
        }
    }

    #[view(getSupportTotal)]
    fn get_support_total(&self) -> BigUint {
        let cycle = self.cycle_counter().get();
        self.support_total(cycle).get()
    }

    #[view(getSupporterWeight)]
    fn get_supporter_weight(&self, supporter: ManagedAddress) -> BigUint {
        let cycle = self.cycle_counter().get();
        self.supporter_weight(cycle, &supporter).get()
    }

    #[view(isQuorumReached)]
    fn is_quorum_reached(&self) -> bool {
        let cycle = self.cycle_counter().get();
        let support = self.support_total(cycle).get();
        self.quorum_reached(&support)
    }

    #[view(getDecidedOutcome)]
    fn get_decided_outcome(&self) -> OptionalValue<CycleOutcome<Self::Api>> {
        if self.decided().is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.decided().get())
        }
    }

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue4<ManagedAddress, ManagedAddress, u64, u64> {
        (
            self.reference_token_address().get(),
            self.config_target_address().get(),
            self.blocks_per_slot().get(),
            self.quorum_threshold_percent().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("candidateSubmitted")]
    fn candidate_submitted_event(
        &self,
        #[indexed] cycle: u64,
        #[indexed] candidate: &ManagedAddress,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] cycle: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] candidate: &ManagedAddress,
        weight: &BigUint,
    );

    #[event("finalistUpdated")]
    fn finalist_updated_event(
        &self,
        #[indexed] cycle: u64,
        #[indexed] candidate: &ManagedAddress,
        weight: &BigUint,
    );

    #[event("supportRegistered")]
    fn support_registered_event(
        &self,
        #[indexed] cycle: u64,
        #[indexed] supporter: &ManagedAddress,
        weight: &BigUint,
    );

    #[event("cycleClosed")]
    fn cycle_closed_event(
        &self,
        #[indexed] cycle: u64,
        #[indexed] kind: CycleKind,
        committed: bool,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("referenceTokenAddress")]
    fn reference_token_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("configTargetAddress")]
    fn config_target_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("blocksPerSlot")]
    fn blocks_per_slot(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("quorumThresholdPercent")]
    fn quorum_threshold_percent(&self) -> SingleValueMapper<u64>;

    // ── Cycle ──

    #[view(getCycleCounter)]
    #[storage_mapper("cycleCounter")]
    fn cycle_counter(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("lastClosePeriod")]
    fn last_close_period(&self) -> SingleValueMapper<u64>;

    // ── Candidate registry (keyed by cycle; rotating the counter
    //    retires a closed cycle's entries wholesale) ──

    #[storage_mapper("candidates")]
    fn candidates(&self, cycle: u64) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("candidateVoteCount")]
    fn candidate_vote_count(
        &self,
        cycle: u64,
        candidate: &ManagedAddress,
    ) -> SingleValueMapper<u64>;

    #[storage_mapper("candidateWeight")]
    fn candidate_weight(
        &self,
        cycle: u64,
        candidate: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    // ── Voter records, keyed by voter alone, so each voter holds
    //    at most one active vote per cycle ──

    #[storage_mapper("voterChoice")]
    fn voter_choice(
        &self,
        cycle: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("voterWeight")]
    fn voter_weight(&self, cycle: u64, voter: &ManagedAddress) -> SingleValueMapper<BigUint>;

    // ── Finalist ──

    #[storage_mapper("finalist")]
    fn finalist(&self, cycle: u64) -> SingleValueMapper<Finalist<Self::Api>>;

    // ── Decision stage ──

    #[storage_mapper("supportTotal")]
    fn support_total(&self, cycle: u64) -> SingleValueMapper<BigUint>;

    #[storage_mapper("supporterWeight")]
    fn supporter_weight(
        &self,
        cycle: u64,
        supporter: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    // ── Last decided outcome (survives the cycle reset) ──

    #[storage_mapper("decided")]
    fn decided(&self) -> SingleValueMapper<CycleOutcome<Self::Api>>;
}
