//! Account-to-Account Transfer
//!
//! A single synchronous operation: validate, then debit `from` and credit
//! `to`. Exclusive access to both accounts is guaranteed by the `&mut`
//! borrows, so no locking is involved.

pub mod error;
pub mod service;

pub use error::{ACCOUNT_NULL_MESSAGE, NON_POSITIVE_AMOUNT_MESSAGE, TransferError};
pub use service::TransferService;
