use account_interfaces::{invoke, transfer_value, CallFailure, Invocation, Payload, SignatureVerifierClient};
use soroban_sdk::{
    contract, contractimpl, log, symbol_short, token, xdr::ToXdr, Address, Bytes, BytesN, Env, IntoVal, Val,
};

use crate::errors::SoloError;
use crate::services::{NonceHolderClient, SystemDeployerClient};
use crate::types::{DataKey, SystemServices, Transaction, ACCOUNT_VALIDATION_SUCCESS_MAGIC};

/// Single-owner account driven by the environment's bootloader.
#[contract]
pub struct SoloAccount;

#[contractimpl]
impl SoloAccount {
    pub fn initialize(env: Env, owner: Address, services: SystemServices) -> Result<(), SoloError> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(SoloError::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Services, &services);
        Ok(())
    }

    /// Consumes the transaction nonce, checks the account can cover value
    /// and fee, and returns the success magic iff the owner signed.
    ///
    /// An all-zero `suggested_digest` makes the account derive the digest
    /// itself with [`SoloAccount::transaction_digest`].
    pub fn validate_transaction(
        env: Env,
        caller: Address,
        transaction: Transaction,
        suggested_digest: BytesN<32>,
        signature: Bytes,
    ) -> Result<BytesN<4>, SoloError> {
        let services = Self::require_bootloader(&env, &caller)?;
        let account = env.current_contract_address();

        // Fails the whole validation on a nonce mismatch.
        NonceHolderClient::new(&env, &services.nonce_holder).increment_nonce_if_equals(&account, &transaction.nonce);

        let required = Self::total_required(&transaction)?;
        let balance = token::TokenClient::new(&env, &services.fee_token).balance(&account);
        if balance < required {
            return Err(SoloError::InsufficientBalance);
        }

        let digest = if suggested_digest == BytesN::from_array(&env, &[0u8; 32]) {
            Self::transaction_digest(env.clone(), transaction)
        } else {
            suggested_digest
        };

        let owner = Self::owner(env.clone())?;
        let signer = SignatureVerifierClient::new(&env, &services.verifier).try_recover(&digest, &signature);

        // A rejected signature is a plain mismatch.
        if matches!(signer, Ok(Ok(Some(signer))) if signer == owner) {
            Ok(BytesN::from_array(&env, &ACCOUNT_VALIDATION_SUCCESS_MAGIC))
        } else {
            log!(&env, "transaction not signed by the owner", digest);
            Ok(BytesN::from_array(&env, &[0u8; 4]))
        }
    }

    /// Transfers the value and dispatches the payload. Calls to the deployer
    /// go through its system-call entry point; everything else is a plain
    /// invocation. Either kind of failure fails the execution.
    pub fn execute_transaction(env: Env, caller: Address, transaction: Transaction) -> Result<Val, SoloError> {
        let services = Self::require_bootloader(&env, &caller)?;

        if transaction.value < 0 {
            return Err(SoloError::InvalidAmount);
        }

        let outcome = transfer_value(&env, &services.fee_token, &transaction.to, transaction.value).and_then(|()| {
            match &transaction.payload {
                Payload::Empty => Ok(().into_val(&env)),
                Payload::Invoke(invocation) if transaction.to == services.deployer => {
                    Self::system_call(&env, &services.deployer, invocation)
                }
                Payload::Invoke(invocation) => invoke(&env, &transaction.to, invocation),
            }
        });

        outcome.map_err(|failure| {
            log!(&env, "transaction execution failed", transaction.to.clone(), failure.code());
            SoloError::ExecutionFailed
        })
    }

    /// Pays `max_fee` to the bootloader.
    pub fn pay_for_transaction(env: Env, caller: Address, transaction: Transaction) -> Result<(), SoloError> {
        let services = Self::require_bootloader(&env, &caller)?;

        if transaction.max_fee < 0 {
            return Err(SoloError::InvalidAmount);
        }

        transfer_value(&env, &services.fee_token, &services.bootloader, transaction.max_fee).map_err(|failure| {
            log!(&env, "fee payment failed", transaction.max_fee, failure.code());
            SoloError::FeePaymentFailed
        })
    }

    pub fn owner(env: Env) -> Result<Address, SoloError> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(SoloError::NotInitialized)
    }

    /// Digest of `transaction` bound to this account.
    pub fn transaction_digest(env: Env, transaction: Transaction) -> BytesN<32> {
        let preimage = (symbol_short!("solo_tx"), env.current_contract_address(), transaction).to_xdr(&env);
        env.crypto().sha256(&preimage).to_bytes()
    }
}

impl SoloAccount {
    fn require_bootloader(env: &Env, caller: &Address) -> Result<SystemServices, SoloError> {
        let services: SystemServices = env
            .storage()
            .instance()
            .get(&DataKey::Services)
            .ok_or(SoloError::NotInitialized)?;

        if *caller != services.bootloader {
            return Err(SoloError::UnauthorizedCaller);
        }
        caller.require_auth();
        Ok(services)
    }

    fn total_required(transaction: &Transaction) -> Result<i128, SoloError> {
        if transaction.value < 0 || transaction.max_fee < 0 {
            return Err(SoloError::InvalidAmount);
        }
        transaction
            .value
            .checked_add(transaction.max_fee)
            .ok_or(SoloError::InvalidAmount)
    }

    fn system_call(env: &Env, deployer: &Address, invocation: &Invocation) -> Result<Val, CallFailure> {
        let client = SystemDeployerClient::new(env, deployer);
        match client.try_system_call(&env.current_contract_address(), &invocation.function, &invocation.args) {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(_)) => Err(CallFailure::UnexpectedReturn),
            Err(Ok(error)) => Err(CallFailure::Reverted(error.get_code())),
            Err(_) => Err(CallFailure::Aborted),
        }
    }
}
