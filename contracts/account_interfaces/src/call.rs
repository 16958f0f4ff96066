use soroban_sdk::{contracttype, log, token, Address, Env, Symbol, Val, Vec};

/// A contract function call: the function name and its arguments.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Invocation {
    pub function: Symbol,
    pub args: Vec<Val>,
}

/// What to do at the destination once the value has been transferred.
#[contracttype]
#[derive(Clone, Debug)]
pub enum Payload {
    /// Transfer value only.
    Empty,
    Invoke(Invocation),
}

/// Why a call made on behalf of the account did not go through.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CallFailure {
    /// The token contract refused the value transfer (e.g. balance too low).
    TransferRejected(u32),
    /// The target failed with the given error code.
    Reverted(u32),
    /// The target failed without an error the host could report.
    Aborted,
    /// The target returned something that is not a value.
    UnexpectedReturn,
}

impl CallFailure {
    /// Error code carried by the failure, 0 when there is none.
    pub fn code(&self) -> u32 {
        match self {
            CallFailure::TransferRejected(code) | CallFailure::Reverted(code) => *code,
            CallFailure::Aborted | CallFailure::UnexpectedReturn => 0,
        }
    }
}

/// Moves `amount` of `token` from the current contract to `to`.
///
/// A zero amount is a no-op. The transfer is made with the `try_` client so
/// a rejection comes back as a `CallFailure` instead of aborting the caller.
pub fn transfer_value(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), CallFailure> {
    if amount == 0 {
        return Ok(());
    }

    let client = token::TokenClient::new(env, token);
    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(_)) => Err(CallFailure::UnexpectedReturn),
        Err(Ok(error)) => Err(CallFailure::TransferRejected(error.get_code())),
        Err(_) => Err(CallFailure::Aborted),
    }
}

/// Best-effort variant of [`transfer_value`].
///
/// Failure is reported through the return value and the diagnostic log but
/// never propagated; the caller decides whether to look at it.
pub fn transfer_best_effort(env: &Env, token: &Address, to: &Address, amount: i128) -> bool {
    match transfer_value(env, token, to, amount) {
        Ok(()) => true,
        Err(failure) => {
            log!(env, "best-effort transfer skipped", to.clone(), amount, failure.code());
            false
        }
    }
}

/// Invokes `invocation` on `target` and reports the result instead of
/// propagating the target's failure.
pub fn invoke(env: &Env, target: &Address, invocation: &Invocation) -> Result<Val, CallFailure> {
    match env.try_invoke_contract::<Val, soroban_sdk::Error>(
        target,
        &invocation.function,
        invocation.args.clone(),
    ) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(_)) => Err(CallFailure::UnexpectedReturn),
        Err(Ok(error)) => Err(CallFailure::Reverted(error.get_code())),
        Err(_) => Err(CallFailure::Aborted),
    }
}
