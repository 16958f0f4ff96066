use account_interfaces::{transfer_best_effort, SignatureVerifierClient};
use soroban_sdk::{log, Address, Bytes, BytesN, Env};

use crate::errors::AccountError;
use crate::ledger;
use crate::types::{PackedOperation, SIG_VALIDATION_FAILED, SIG_VALIDATION_SUCCESS};

const SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Digest owners actually sign: `keccak256(prefix || operation_digest)`.
pub fn signed_digest(env: &Env, operation_digest: &BytesN<32>) -> BytesN<32> {
    let mut message = Bytes::from_slice(env, SIGNED_MESSAGE_PREFIX);
    message.extend_from_array(&operation_digest.to_array());
    env.crypto().keccak256(&message).to_bytes()
}

/// Checks that an owner signed `operation` and prefunds the relay.
///
/// A signature from anyone but an owner, or one the verifier rejects, is
/// reported through the returned status, not as an error. The prefund is best-effort: a failed transfer is
/// logged and otherwise ignored.
pub fn validate_operation(
    env: &Env,
    relay: &Address,
    operation: &PackedOperation,
    operation_digest: &BytesN<32>,
    missing_funds: i128,
) -> Result<u32, AccountError> {
    let config = ledger::config(env)?;
    if *relay != config.relay {
        return Err(AccountError::UnauthorizedCaller);
    }
    relay.require_auth();

    let digest = signed_digest(env, operation_digest);
    let verifier = SignatureVerifierClient::new(env, &config.verifier);

    let status = match verifier.try_recover(&digest, &operation.signature) {
        Ok(Ok(Some(signer))) if ledger::is_owner(env, &signer) => SIG_VALIDATION_SUCCESS,
        _ => {
            log!(env, "operation not signed by an owner", operation.sender.clone(), operation.nonce);
            SIG_VALIDATION_FAILED
        }
    };

    if missing_funds > 0 {
        transfer_best_effort(env, &config.fee_token, relay, missing_funds);
    }

    Ok(status)
}
