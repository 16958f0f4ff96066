use account_interfaces::Payload;
use soroban_sdk::{contracttype, Address};

/// Returned by `validate_transaction` when the owner signed the transaction.
pub const ACCOUNT_VALIDATION_SUCCESS_MAGIC: [u8; 4] = [0x20, 0x2b, 0xcc, 0xe7];

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Owner,
    Services,
}

/// System contracts of the execution environment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SystemServices {
    /// Sole caller of the account's entry points and collector of fees.
    pub bootloader: Address,
    pub nonce_holder: Address,
    /// Calls to this address go through the privileged system-call path.
    pub deployer: Address,
    pub verifier: Address,
    pub fee_token: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Transaction {
    pub to: Address,
    pub value: i128,
    pub payload: Payload,
    pub nonce: u64,
    pub max_fee: i128,
}
