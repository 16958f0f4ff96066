#![no_std]

mod call;
mod verifier;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use call::{invoke, transfer_best_effort, transfer_value, CallFailure, Invocation, Payload};
pub use verifier::{SignatureVerifier, SignatureVerifierClient};
