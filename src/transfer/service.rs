//! Transfer Service
//!
//! Validates and executes a balance move between two accounts.
//!
//! # Validation order
//!
//! ```text
//! account absent? ──▶ InvalidArgument(ACCOUNT_NULL_MESSAGE)
//! amount <= 0?    ──▶ InvalidArgument(NON_POSITIVE_AMOUNT_MESSAGE)
//! from < amount?  ──▶ InsufficientFunds
//! out of range?   ──▶ Overflow
//! otherwise       ──▶ from -= amount, to += amount, Ok(true)
//! ```
//!
//! Every check runs before the first write, so a failed call leaves both
//! accounts untouched.

use rust_decimal::Decimal;

use super::error::{ACCOUNT_NULL_MESSAGE, NON_POSITIVE_AMOUNT_MESSAGE, TransferError};
use crate::account::Account;

/// Stateless transfer executor. Safe to reuse for any number of calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferService;

impl TransferService {
    pub fn new() -> Self {
        Self
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// `None` stands for an absent account reference.
    ///
    /// # Errors
    /// - `InvalidArgument` if either account is `None` or `amount <= 0`
    /// - `InsufficientFunds` if `from.balance() < amount`
    /// - `Overflow` if either new balance falls outside the `Decimal` range
    pub fn transfer(
        &self,
        from: Option<&mut Account>,
        to: Option<&mut Account>,
        amount: Decimal,
    ) -> Result<bool, TransferError> {
        let (Some(from), Some(to)) = (from, to) else {
            return Err(TransferError::InvalidArgument(ACCOUNT_NULL_MESSAGE));
        };
        Self::check(from, amount)?;

        // Compute both sides before writing either
        let from_after = from
            .balance()
            .checked_sub(amount)
            .ok_or(TransferError::Overflow)?;
        let to_after = to
            .balance()
            .checked_add(amount)
            .ok_or(TransferError::Overflow)?;

        from.set_balance(from_after);
        to.set_balance(to_after);
        Ok(true)
    }

    /// Transfer from an account to itself.
    ///
    /// Two `&mut` borrows of one account cannot coexist, so `transfer` can
    /// never receive the same account twice. This runs the same checks and
    /// then applies the subtract-then-add sequence to the single account,
    /// which nets to zero.
    pub fn transfer_to_self(
        &self,
        account: Option<&mut Account>,
        amount: Decimal,
    ) -> Result<bool, TransferError> {
        let Some(account) = account else {
            return Err(TransferError::InvalidArgument(ACCOUNT_NULL_MESSAGE));
        };
        Self::check(account, amount)?;

        let debited = account
            .balance()
            .checked_sub(amount)
            .ok_or(TransferError::Overflow)?;
        let credited = debited
            .checked_add(amount)
            .ok_or(TransferError::Overflow)?;

        account.set_balance(debited);
        account.set_balance(credited);
        Ok(true)
    }

    #[inline]
    fn check(from: &Account, amount: Decimal) -> Result<(), TransferError> {
        if amount <= Decimal::ZERO {
            return Err(TransferError::InvalidArgument(NON_POSITIVE_AMOUNT_MESSAGE));
        }
        if from.balance() < amount {
            return Err(TransferError::InsufficientFunds);
        }
        Ok(())
    }
}
