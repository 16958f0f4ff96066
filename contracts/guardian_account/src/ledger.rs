use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::errors::AccountError;
use crate::types::{AccountConfig, DataKey, ReplacementProposal, TransactionProposal};

const DAY_IN_LEDGERS: u32 = 17280;
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
const RECORD_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub fn require_initialized(env: &Env) -> Result<(), AccountError> {
    if !is_initialized(env) {
        return Err(AccountError::NotInitialized);
    }
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    Ok(())
}

/// Seeds the ledger. Callers have already validated the arguments.
pub fn initialize(env: &Env, owners: &Vec<Address>, threshold: u32, config: &AccountConfig) {
    let instance = env.storage().instance();
    instance.set(&DataKey::Initialized, &true);
    instance.set(&DataKey::Config, config);
    instance.set(&DataKey::Threshold, &threshold);
    instance.set(&DataKey::OwnerCount, &owners.len());
    instance.set(&DataKey::Nonce, &0u64);

    for owner in owners.iter() {
        instance.set(&DataKey::Owner(owner), &true);
    }
    instance.extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn config(env: &Env) -> Result<AccountConfig, AccountError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(AccountError::NotInitialized)
}

pub fn threshold(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::Threshold).unwrap_or(0)
}

pub fn owner_count(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::OwnerCount).unwrap_or(0)
}

pub fn is_owner(env: &Env, address: &Address) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Owner(address.clone()))
        .unwrap_or(false)
}

/// Swaps `old_owner` out for `new_owner`. The owner count is unchanged.
pub fn replace_owner(env: &Env, old_owner: &Address, new_owner: &Address) {
    let instance = env.storage().instance();
    instance.remove(&DataKey::Owner(old_owner.clone()));
    instance.set(&DataKey::Owner(new_owner.clone()), &true);
}

pub fn nonce(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::Nonce).unwrap_or(0)
}

/// Advances the sequence counter and returns the new value.
pub fn advance_nonce(env: &Env) -> u64 {
    let next = nonce(env) + 1;
    env.storage().instance().set(&DataKey::Nonce, &next);
    next
}

fn read_record<T>(env: &Env, key: &DataKey) -> Option<T>
where
    T: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let persistent = env.storage().persistent();
    let record = persistent.get(key);
    if record.is_some() {
        persistent.extend_ttl(key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
    }
    record
}

fn write_record<T>(env: &Env, key: &DataKey, record: &T)
where
    T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    let persistent = env.storage().persistent();
    persistent.set(key, record);
    persistent.extend_ttl(key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

pub fn transaction(env: &Env, id: &BytesN<32>) -> Option<TransactionProposal> {
    read_record(env, &DataKey::Transaction(id.clone()))
}

pub fn set_transaction(env: &Env, id: &BytesN<32>, proposal: &TransactionProposal) {
    write_record(env, &DataKey::Transaction(id.clone()), proposal);
}

pub fn replacement(env: &Env, id: &BytesN<32>) -> Option<ReplacementProposal> {
    read_record(env, &DataKey::Replacement(id.clone()))
}

pub fn set_replacement(env: &Env, id: &BytesN<32>, proposal: &ReplacementProposal) {
    write_record(env, &DataKey::Replacement(id.clone()), proposal);
}

pub fn has_voted(env: &Env, id: &BytesN<32>, owner: &Address) -> bool {
    read_record(env, &DataKey::Vote(id.clone(), owner.clone())).unwrap_or(false)
}

pub fn record_vote(env: &Env, id: &BytesN<32>, owner: &Address) {
    write_record(env, &DataKey::Vote(id.clone(), owner.clone()), &true);
}

pub fn is_locked(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Locked)
}

pub fn set_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().instance().set(&DataKey::Locked, &true);
    } else {
        env.storage().instance().remove(&DataKey::Locked);
    }
}
