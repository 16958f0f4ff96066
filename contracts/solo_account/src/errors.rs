use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SoloError {
    NotInitialized = 0,
    AlreadyInitialized = 1,
    UnauthorizedCaller = 2,
    InvalidAmount = 3,
    InsufficientBalance = 4,
    ExecutionFailed = 5,
    FeePaymentFailed = 6,
}
