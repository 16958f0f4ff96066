use account_interfaces::{invoke, transfer_value, CallFailure, Payload};
use soroban_sdk::{log, symbol_short, xdr::ToXdr, Address, BytesN, Env};

use crate::errors::AccountError;
use crate::events::{
    OwnerReplaced, ReplacementConfirmed, ReplacementProposed, TransactionConfirmed, TransactionExecuted,
    TransactionProposed,
};
use crate::guard::ReentrancyGuard;
use crate::ledger;
use crate::types::{ReplacementProposal, TransactionProposal};

/// Authenticates `caller` and checks owner membership.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), AccountError> {
    caller.require_auth();
    if !ledger::is_owner(env, caller) {
        return Err(AccountError::NotOwner);
    }
    Ok(())
}

/// ID of a transaction proposal. The counter makes re-proposals of the same
/// call distinct.
pub fn transaction_id(env: &Env, destination: &Address, value: i128, payload: &Payload, nonce: u64) -> BytesN<32> {
    let preimage = (symbol_short!("tx"), destination.clone(), value, payload.clone(), nonce).to_xdr(env);
    env.crypto().sha256(&preimage).to_bytes()
}

/// ID of a replacement proposal. The leading tag keeps it apart from
/// transaction IDs derived from the same counter value.
pub fn replacement_id(env: &Env, old_owner: &Address, new_owner: &Address, nonce: u64) -> BytesN<32> {
    let preimage = (symbol_short!("swap"), old_owner.clone(), new_owner.clone(), nonce).to_xdr(env);
    env.crypto().sha256(&preimage).to_bytes()
}

pub fn propose_transaction(
    env: &Env,
    caller: &Address,
    destination: Address,
    value: i128,
    payload: Payload,
) -> Result<BytesN<32>, AccountError> {
    require_owner(env, caller)?;

    if value < 0 {
        return Err(AccountError::InvalidAmount);
    }

    let proposal_id = transaction_id(env, &destination, value, &payload, ledger::nonce(env));

    ledger::record_vote(env, &proposal_id, caller);
    let proposal = TransactionProposal {
        destination: destination.clone(),
        value,
        payload: payload.clone(),
        initiator: caller.clone(),
        confirmations: 1,
        executed: false,
    };
    ledger::set_transaction(env, &proposal_id, &proposal);
    ledger::advance_nonce(env);

    TransactionProposed {
        proposal_id: proposal_id.clone(),
        initiator: caller.clone(),
        destination,
        value,
        payload,
    }
    .publish(env);

    Ok(proposal_id)
}

/// Records `caller`'s confirmation and executes the proposal once the
/// threshold is reached. Returns whether this call executed it.
///
/// A failed destination call fails the whole confirmation; the host then
/// discards the vote, the count and the executed flag together.
pub fn confirm_transaction(env: &Env, caller: &Address, proposal_id: &BytesN<32>) -> Result<bool, AccountError> {
    let _guard = ReentrancyGuard::enter(env)?;
    require_owner(env, caller)?;

    let mut proposal = ledger::transaction(env, proposal_id).ok_or(AccountError::ProposalNotFound)?;

    if proposal.executed {
        return Err(AccountError::AlreadyExecuted);
    }

    if ledger::has_voted(env, proposal_id, caller) {
        return Err(AccountError::DuplicateVote);
    }

    ledger::record_vote(env, proposal_id, caller);
    proposal.confirmations += 1;

    TransactionConfirmed {
        proposal_id: proposal_id.clone(),
        owner: caller.clone(),
        confirmations: proposal.confirmations,
    }
    .publish(env);

    if proposal.confirmations < ledger::threshold(env) {
        ledger::set_transaction(env, proposal_id, &proposal);
        return Ok(false);
    }

    // Mark before the external call so a target that manages to call back
    // sees the proposal as executed.
    proposal.executed = true;
    ledger::set_transaction(env, proposal_id, &proposal);

    let config = ledger::config(env)?;
    if let Err(failure) = execute(env, &config.fee_token, &proposal) {
        log!(env, "proposal execution failed", proposal_id.clone(), failure.code());
        return Err(AccountError::ExecutionFailed);
    }

    TransactionExecuted {
        proposal_id: proposal_id.clone(),
        destination: proposal.destination,
        value: proposal.value,
    }
    .publish(env);

    Ok(true)
}

fn execute(env: &Env, fee_token: &Address, proposal: &TransactionProposal) -> Result<(), CallFailure> {
    transfer_value(env, fee_token, &proposal.destination, proposal.value)?;

    if let Payload::Invoke(invocation) = &proposal.payload {
        invoke(env, &proposal.destination, invocation)?;
    }
    Ok(())
}

pub fn propose_owner_replacement(
    env: &Env,
    caller: &Address,
    old_owner: Address,
    new_owner: Address,
) -> Result<BytesN<32>, AccountError> {
    require_owner(env, caller)?;

    if !ledger::is_owner(env, &old_owner) {
        return Err(AccountError::UnknownOwner);
    }

    if old_owner == new_owner {
        return Err(AccountError::IdenticalOwners);
    }

    if ledger::is_owner(env, &new_owner) {
        return Err(AccountError::DuplicateOwner);
    }

    // The counter only moves when a replacement executes, so the same pair
    // proposed twice in a row derives the same ID.
    let proposal_id = replacement_id(env, &old_owner, &new_owner, ledger::nonce(env));
    if ledger::replacement(env, &proposal_id).is_some() {
        return Err(AccountError::ProposalAlreadyExists);
    }

    ledger::record_vote(env, &proposal_id, caller);
    let proposal = ReplacementProposal {
        old_owner: old_owner.clone(),
        new_owner: new_owner.clone(),
        initiator: caller.clone(),
        confirmations: 1,
        executed: false,
    };
    ledger::set_replacement(env, &proposal_id, &proposal);

    ReplacementProposed {
        proposal_id: proposal_id.clone(),
        initiator: caller.clone(),
        old_owner,
        new_owner,
    }
    .publish(env);

    Ok(proposal_id)
}

/// Records `caller`'s confirmation and swaps the owners once the threshold is
/// reached. Returns whether this call executed the replacement.
pub fn confirm_owner_replacement(
    env: &Env,
    caller: &Address,
    proposal_id: &BytesN<32>,
) -> Result<bool, AccountError> {
    let _guard = ReentrancyGuard::enter(env)?;
    require_owner(env, caller)?;

    let mut proposal = ledger::replacement(env, proposal_id).ok_or(AccountError::ProposalNotFound)?;

    if proposal.executed {
        return Err(AccountError::AlreadyExecuted);
    }

    if ledger::has_voted(env, proposal_id, caller) {
        return Err(AccountError::DuplicateVote);
    }

    ledger::record_vote(env, proposal_id, caller);
    proposal.confirmations += 1;

    ReplacementConfirmed {
        proposal_id: proposal_id.clone(),
        owner: caller.clone(),
        confirmations: proposal.confirmations,
    }
    .publish(env);

    if proposal.confirmations < ledger::threshold(env) {
        ledger::set_replacement(env, proposal_id, &proposal);
        return Ok(false);
    }

    // Another replacement may have executed since this one was proposed.
    if !ledger::is_owner(env, &proposal.old_owner) {
        return Err(AccountError::UnknownOwner);
    }
    if ledger::is_owner(env, &proposal.new_owner) {
        return Err(AccountError::DuplicateOwner);
    }

    proposal.executed = true;
    ledger::set_replacement(env, proposal_id, &proposal);
    ledger::advance_nonce(env);
    ledger::replace_owner(env, &proposal.old_owner, &proposal.new_owner);

    OwnerReplaced {
        proposal_id: proposal_id.clone(),
        old_owner: proposal.old_owner,
        new_owner: proposal.new_owner,
    }
    .publish(env);

    Ok(true)
}

pub fn is_approved_transaction(env: &Env, proposal_id: &BytesN<32>) -> bool {
    ledger::transaction(env, proposal_id)
        .map(|proposal| proposal.confirmations >= ledger::threshold(env))
        .unwrap_or(false)
}
