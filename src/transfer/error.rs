//! Transfer Error Types

use thiserror::Error;

/// Message carried when either account reference is absent.
pub const ACCOUNT_NULL_MESSAGE: &str = "Account should not be null";

/// Message carried when the amount is zero or negative.
pub const NON_POSITIVE_AMOUNT_MESSAGE: &str = "Money amount should be greater than zero";

/// Transfer error types
///
/// `InvalidArgument` signals a caller bug (bad inputs). `InsufficientFunds`
/// is the one failure a well-behaved caller is expected to handle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("{0}")]
    InvalidArgument(&'static str),

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Amount would cause overflow")]
    Overflow,
}

impl TransferError {
    /// Stable error code, independent of the display message
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::InvalidArgument(_) => "INVALID_ARGUMENT",
            TransferError::InsufficientFunds => "INSUFFICIENT_FUNDS",
            TransferError::Overflow => "OVERFLOW",
        }
    }

    /// True for failures the caller can act on rather than fix in code
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TransferError::InsufficientFunds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            TransferError::InvalidArgument(ACCOUNT_NULL_MESSAGE).code(),
            "INVALID_ARGUMENT"
        );
        assert_eq!(
            TransferError::InsufficientFunds.code(),
            "INSUFFICIENT_FUNDS"
        );
        assert_eq!(TransferError::Overflow.code(), "OVERFLOW");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            TransferError::InvalidArgument(ACCOUNT_NULL_MESSAGE).to_string(),
            "Account should not be null"
        );
        assert_eq!(
            TransferError::InvalidArgument(NON_POSITIVE_AMOUNT_MESSAGE).to_string(),
            "Money amount should be greater than zero"
        );
        assert_eq!(
            TransferError::InsufficientFunds.to_string(),
            "Insufficient funds"
        );
    }

    #[test]
    fn test_only_insufficient_funds_is_recoverable() {
        assert!(TransferError::InsufficientFunds.is_recoverable());
        assert!(!TransferError::InvalidArgument(NON_POSITIVE_AMOUNT_MESSAGE).is_recoverable());
        assert!(!TransferError::Overflow.is_recoverable());
    }
}
