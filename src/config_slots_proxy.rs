use multiversx_sc::proxy_imports::*;

use crate::types::CycleKind;

pub struct ConfigSlotsProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ConfigSlotsProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ConfigSlotsProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ConfigSlotsProxyMethods { wrapped_tx: tx }
    }
}

pub struct ConfigSlotsProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> ConfigSlotsProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn set_slot<
        Arg0: ProxyArg<CycleKind>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        kind: Arg0,
        address: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setSlot")
            .argument(&kind)
            .argument(&address)
            .original_result()
    }
}
