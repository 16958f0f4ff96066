use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AccountError {
    NotInitialized = 0,
    AlreadyInitialized = 1,
    InvalidThreshold = 3,
    EmptyOwnerList = 4,
    DuplicateOwner = 5,
    NotOwner = 6,
    UnauthorizedCaller = 7,
    UnknownOwner = 8,
    IdenticalOwners = 9,
    InvalidAmount = 10,
    ProposalNotFound = 13,
    AlreadyExecuted = 14,
    DuplicateVote = 16,
    ProposalAlreadyExists = 18,
    ExecutionFailed = 19,
    Reentrancy = 20,
}
