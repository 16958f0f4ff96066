use soroban_sdk::{contractclient, Address, Env, Symbol, Val, Vec};

/// Per-account nonce tracking. Fails the call when `expected` is not the
/// account's current nonce.
#[contractclient(name = "NonceHolderClient")]
pub trait NonceHolder {
    fn increment_nonce_if_equals(env: Env, account: Address, expected: u64);
}

/// Deployer system contract, reached through its privileged entry point.
#[contractclient(name = "SystemDeployerClient")]
pub trait SystemDeployer {
    fn system_call(env: Env, account: Address, function: Symbol, args: Vec<Val>) -> Val;
}
