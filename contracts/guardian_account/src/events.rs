use account_interfaces::Payload;
use soroban_sdk::{contractevent, Address, BytesN};

#[contractevent]
#[derive(Clone, Debug)]
pub struct TransactionProposed {
    #[topic]
    pub proposal_id: BytesN<32>,
    pub initiator: Address,
    pub destination: Address,
    pub value: i128,
    pub payload: Payload,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionConfirmed {
    #[topic]
    pub proposal_id: BytesN<32>,
    pub owner: Address,
    pub confirmations: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionExecuted {
    #[topic]
    pub proposal_id: BytesN<32>,
    pub destination: Address,
    pub value: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReplacementProposed {
    #[topic]
    pub proposal_id: BytesN<32>,
    pub initiator: Address,
    pub old_owner: Address,
    pub new_owner: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReplacementConfirmed {
    #[topic]
    pub proposal_id: BytesN<32>,
    pub owner: Address,
    pub confirmations: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerReplaced {
    #[topic]
    pub proposal_id: BytesN<32>,
    pub old_owner: Address,
    pub new_owner: Address,
}
