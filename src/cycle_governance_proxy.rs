use multiversx_sc::proxy_imports::*;

use crate::types::{CycleKind, CycleOutcome, Finalist, Stage};

pub struct CycleGovernanceProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for CycleGovernanceProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = CycleGovernanceProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        CycleGovernanceProxyMethods { wrapped_tx: tx }
    }
}

pub struct CycleGovernanceProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> CycleGovernanceProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<u64>,
    >(
        self,
        reference_token_address: Arg0,
        config_target_address: Arg1,
        blocks_per_slot: Arg2,
        quorum_threshold_percent: Arg3,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&reference_token_address)
            .argument(&config_target_address)
            .argument(&blocks_per_slot)
            .argument(&quorum_threshold_percent)
            .original_result()
    }
}

impl<Env, From, To, Gas> CycleGovernanceProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }

    pub fn submit_candidate<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        candidate: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("submitCandidate")
            .argument(&candidate)
            .original_result()
    }

    pub fn vote<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        candidate: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("vote")
            .argument(&candidate)
            .original_result()
    }

    pub fn support(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("support")
            .original_result()
    }

    pub fn close_cycle(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("closeCycle")
            .original_result()
    }

    pub fn get_stage(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, Stage> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getStage")
            .original_result()
    }

    pub fn get_slot_position(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSlotPosition")
            .original_result()
    }

    pub fn get_cycle_counter(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCycleCounter")
            .original_result()
    }

    pub fn get_cycle_kind(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, CycleKind> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCycleKind")
            .original_result()
    }

    pub fn get_candidate_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCandidateCount")
            .original_result()
    }

    pub fn get_candidates<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCandidates")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn is_candidate<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isCandidate")
            .argument(&address)
            .original_result()
    }

    pub fn get_candidate_votes<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        candidate: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCandidateVotes")
            .argument(&candidate)
            .original_result()
    }

    pub fn get_candidate_weight<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        candidate: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCandidateWeight")
            .argument(&candidate)
            .original_result()
    }

    pub fn get_candidate_voter_weight<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        candidate: Arg0,
        voter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCandidateVoterWeight")
            .argument(&candidate)
            .argument(&voter)
            .original_result()
    }

    pub fn get_voter_choice<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        voter: Arg0,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        OptionalValue<MultiValue2<ManagedAddress<Env::Api>, BigUint<Env::Api>>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVoterChoice")
            .argument(&voter)
            .original_result()
    }

    pub fn get_finalist(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<Finalist<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFinalist")
            .original_result()
    }

    pub fn get_support_total(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSupportTotal")
            .original_result()
    }

    pub fn get_supporter_weight<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        supporter: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSupporterWeight")
            .argument(&supporter)
            .original_result()
    }

    pub fn is_quorum_reached(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isQuorumReached")
            .original_result()
    }

    pub fn get_decided_outcome(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<CycleOutcome<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDecidedOutcome")
            .original_result()
    }

    pub fn get_contract_config(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue4<ManagedAddress<Env::Api>, ManagedAddress<Env::Api>, u64, u64>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContractConfig")
            .original_result()
    }
}
