use account_interfaces::Payload;
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};

use crate::errors::AccountError;
use crate::types::{AccountConfig, PackedOperation, ReplacementProposal, TransactionProposal};
use crate::{gateway, governance, ledger};

#[contract]
pub struct GuardianAccount;

#[contractimpl]
impl GuardianAccount {
    pub fn initialize(
        env: Env,
        owners: Vec<Address>,
        threshold: u32,
        config: AccountConfig,
    ) -> Result<(), AccountError> {
        if ledger::is_initialized(&env) {
            return Err(AccountError::AlreadyInitialized);
        }

        if owners.is_empty() {
            return Err(AccountError::EmptyOwnerList);
        }

        // Strictly below the owner count: a threshold equal to it is rejected.
        if threshold == 0 || threshold >= owners.len() {
            return Err(AccountError::InvalidThreshold);
        }

        for i in 0..owners.len() {
            for j in (i + 1)..owners.len() {
                if owners.get_unchecked(i) == owners.get_unchecked(j) {
                    return Err(AccountError::DuplicateOwner);
                }
            }
        }

        ledger::initialize(&env, &owners, threshold, &config);
        Ok(())
    }

    pub fn propose_transaction(
        env: Env,
        caller: Address,
        destination: Address,
        value: i128,
        payload: Payload,
    ) -> Result<BytesN<32>, AccountError> {
        ledger::require_initialized(&env)?;
        governance::propose_transaction(&env, &caller, destination, value, payload)
    }

    pub fn confirm_transaction(env: Env, caller: Address, proposal_id: BytesN<32>) -> Result<bool, AccountError> {
        ledger::require_initialized(&env)?;
        governance::confirm_transaction(&env, &caller, &proposal_id)
    }

    pub fn propose_owner_replacement(
        env: Env,
        caller: Address,
        old_owner: Address,
        new_owner: Address,
    ) -> Result<BytesN<32>, AccountError> {
        ledger::require_initialized(&env)?;
        governance::propose_owner_replacement(&env, &caller, old_owner, new_owner)
    }

    pub fn confirm_owner_replacement(
        env: Env,
        caller: Address,
        proposal_id: BytesN<32>,
    ) -> Result<bool, AccountError> {
        ledger::require_initialized(&env)?;
        governance::confirm_owner_replacement(&env, &caller, &proposal_id)
    }

    pub fn validate_operation(
        env: Env,
        relay: Address,
        operation: PackedOperation,
        operation_digest: BytesN<32>,
        missing_funds: i128,
    ) -> Result<u32, AccountError> {
        ledger::require_initialized(&env)?;
        gateway::validate_operation(&env, &relay, &operation, &operation_digest, missing_funds)
    }

    pub fn is_owner(env: Env, address: Address) -> bool {
        ledger::is_owner(&env, &address)
    }

    pub fn is_approved_transaction(env: Env, proposal_id: BytesN<32>) -> bool {
        governance::is_approved_transaction(&env, &proposal_id)
    }

    pub fn get_pending_transaction(env: Env, proposal_id: BytesN<32>) -> Result<TransactionProposal, AccountError> {
        ledger::require_initialized(&env)?;
        ledger::transaction(&env, &proposal_id).ok_or(AccountError::ProposalNotFound)
    }

    pub fn get_replacement(env: Env, proposal_id: BytesN<32>) -> Result<ReplacementProposal, AccountError> {
        ledger::require_initialized(&env)?;
        ledger::replacement(&env, &proposal_id).ok_or(AccountError::ProposalNotFound)
    }

    pub fn has_confirmed(env: Env, proposal_id: BytesN<32>, owner: Address) -> bool {
        ledger::has_voted(&env, &proposal_id, &owner)
    }

    pub fn threshold(env: Env) -> Result<u32, AccountError> {
        ledger::require_initialized(&env)?;
        Ok(ledger::threshold(&env))
    }

    pub fn owner_count(env: Env) -> Result<u32, AccountError> {
        ledger::require_initialized(&env)?;
        Ok(ledger::owner_count(&env))
    }

    pub fn nonce(env: Env) -> Result<u64, AccountError> {
        ledger::require_initialized(&env)?;
        Ok(ledger::nonce(&env))
    }

    /// Digest an owner must sign for `validate_operation` to accept it.
    pub fn signed_digest(env: Env, operation_digest: BytesN<32>) -> BytesN<32> {
        gateway::signed_digest(&env, &operation_digest)
    }
}
