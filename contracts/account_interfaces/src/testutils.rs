#![cfg(any(test, feature = "testutils"))]

use ed25519_dalek::{Signer, SigningKey};
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Bytes, BytesN, Env};

use crate::verifier::SignatureVerifier;

#[contracttype]
#[derive(Clone)]
enum VerifierKey {
    Binding(BytesN<32>),
}

/// Verifier backed by ed25519 keys bound to addresses.
///
/// Signatures are `public_key (32 bytes) || signature (64 bytes)`. A bad
/// signature fails the call; a good signature from an unbound key recovers
/// to `None`.
#[contract]
pub struct Ed25519Verifier;

#[contractimpl]
impl Ed25519Verifier {
    pub fn bind(env: Env, public_key: BytesN<32>, signer: Address) {
        env.storage().persistent().set(&VerifierKey::Binding(public_key), &signer);
    }
}

#[contractimpl]
impl SignatureVerifier for Ed25519Verifier {
    fn recover(env: Env, digest: BytesN<32>, signature: Bytes) -> Option<Address> {
        if signature.len() != 96 {
            return None;
        }

        let mut public_key = [0u8; 32];
        signature.slice(0..32).copy_into_slice(&mut public_key);
        let mut raw = [0u8; 64];
        signature.slice(32..96).copy_into_slice(&mut raw);

        let public_key = BytesN::from_array(&env, &public_key);
        let message = Bytes::from_array(&env, &digest.to_array());
        env.crypto().ed25519_verify(&public_key, &message, &BytesN::from_array(&env, &raw));

        env.storage().persistent().get(&VerifierKey::Binding(public_key))
    }
}

/// Deterministic ed25519 key producing signatures in the layout
/// [`Ed25519Verifier`] expects.
pub struct TestSigner {
    key: SigningKey,
}

impl TestSigner {
    pub fn from_seed(seed: u8) -> Self {
        Self {
            key: SigningKey::from_bytes(&[seed; 32]),
        }
    }

    pub fn public_key(&self, env: &Env) -> BytesN<32> {
        BytesN::from_array(env, &self.key.verifying_key().to_bytes())
    }

    pub fn sign(&self, env: &Env, digest: &BytesN<32>) -> Bytes {
        let mut signature = Bytes::from_array(env, &self.key.verifying_key().to_bytes());
        signature.extend_from_array(&self.key.sign(&digest.to_array()).to_bytes());
        signature
    }
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TargetError {
    Refused = 42,
}

#[contracttype]
#[derive(Clone)]
enum TargetKey {
    Counter,
}

/// Call target with an observable side effect and a failing entry point.
#[contract]
pub struct CounterTarget;

#[contractimpl]
impl CounterTarget {
    pub fn bump(env: Env, by: u32) -> u32 {
        let value: u32 = env.storage().instance().get(&TargetKey::Counter).unwrap_or(0) + by;
        env.storage().instance().set(&TargetKey::Counter, &value);
        value
    }

    pub fn value(env: Env) -> u32 {
        env.storage().instance().get(&TargetKey::Counter).unwrap_or(0)
    }

    pub fn refuse(env: Env) {
        panic_with_error!(&env, TargetError::Refused);
    }
}
