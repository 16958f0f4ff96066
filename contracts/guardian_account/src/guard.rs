use soroban_sdk::Env;

use crate::errors::AccountError;
use crate::ledger;

/// Holds the account-wide reentrancy lock until dropped.
///
/// The lock is an instance storage entry, so a failed invocation releases it
/// through the host rollback as well as through `Drop`.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn enter(env: &'a Env) -> Result<Self, AccountError> {
        if ledger::is_locked(env) {
            return Err(AccountError::Reentrancy);
        }
        ledger::set_locked(env, true);
        Ok(Self { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        ledger::set_locked(self.env, false);
    }
}
