use account_interfaces::{Invocation, Payload};
use soroban_sdk::{contracttype, Address, Bytes, BytesN};

/// Returned by `validate_operation` when an owner signed the operation.
pub const SIG_VALIDATION_SUCCESS: u32 = 0;
/// Returned by `validate_operation` when the signer is not an owner.
pub const SIG_VALIDATION_FAILED: u32 = 1;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Config,
    Threshold,
    OwnerCount,
    Owner(Address),
    Nonce,
    Locked,
    Transaction(BytesN<32>),
    Replacement(BytesN<32>),
    Vote(BytesN<32>, Address),
}

/// Collaborators fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountConfig {
    /// The only caller allowed to validate operations; receives prefunds.
    pub relay: Address,
    /// Signature verifier contract used to recover operation signers.
    pub verifier: Address,
    /// Token used for proposal values and prefunds.
    pub fee_token: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TransactionProposal {
    pub destination: Address,
    pub value: i128,
    pub payload: Payload,
    pub initiator: Address,
    pub confirmations: u32,
    pub executed: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReplacementProposal {
    pub old_owner: Address,
    pub new_owner: Address,
    pub initiator: Address,
    pub confirmations: u32,
    pub executed: bool,
}

/// Operation as submitted by the relay. `call` is forwarded untouched.
#[contracttype]
#[derive(Clone, Debug)]
pub struct PackedOperation {
    pub sender: Address,
    pub nonce: u64,
    pub call: Invocation,
    pub signature: Bytes,
}
