use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env};

/// Trusted signer recovery.
///
/// Implementations return the address that produced `signature` over
/// `digest`, or `None` when the signature recovers to no known identity.
/// Malformed or forged signatures may fail the call outright.
#[contractclient(name = "SignatureVerifierClient")]
pub trait SignatureVerifier {
    fn recover(env: Env, digest: BytesN<32>, signature: Bytes) -> Option<Address>;
}
