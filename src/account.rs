//! ACCOUNT - a single mutable balance holder
//!
//! The balance is a fixed-decimal amount so transfers stay exact
//! (no float drift on subtract-then-add).
//!
//! # Invariants:
//! - Account itself enforces nothing about sign; sufficiency is checked by
//!   [`crate::transfer::TransferService`] before any mutation
//! - The balance only changes through `new`, `set_balance`, or a transfer
//!
//! # Usage:
//! ```ignore
//! let mut account = Account::new(Decimal::from(100));
//! account.set_balance(Decimal::ZERO);
//! assert_eq!(account.balance(), Decimal::ZERO);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    balance: Decimal, // PRIVATE - read via balance(), write via set_balance()
}

impl Default for Account {
    fn default() -> Self {
        Self {
            balance: Decimal::ZERO,
        }
    }
}

impl Account {
    /// Create an account holding `balance`. No validation is performed.
    pub fn new(balance: Decimal) -> Self {
        Self { balance }
    }

    /// Current balance (read-only)
    #[inline(always)]
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Replace the balance unconditionally.
    #[inline(always)]
    pub fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }
}
