#![no_std]

mod account;
mod errors;
mod events;
mod gateway;
mod governance;
mod guard;
mod ledger;
mod types;

pub use account::{GuardianAccount, GuardianAccountClient};
pub use errors::AccountError;
pub use types::{
    AccountConfig, PackedOperation, ReplacementProposal, TransactionProposal, SIG_VALIDATION_FAILED,
    SIG_VALIDATION_SUCCESS,
};
