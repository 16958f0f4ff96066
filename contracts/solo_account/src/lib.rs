#![no_std]

mod account;
mod errors;
mod services;
mod types;

pub use account::{SoloAccount, SoloAccountClient};
pub use errors::SoloError;
pub use services::{NonceHolder, NonceHolderClient, SystemDeployer, SystemDeployerClient};
pub use types::{SystemServices, Transaction, ACCOUNT_VALIDATION_SUCCESS_MAGIC};
