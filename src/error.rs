//! Error types for the bank and its accounts.

use crate::money::Money;
use thiserror::Error;

/// Result type alias for bank operations
pub type Result<T> = std::result::Result<T, BankError>;

/// Errors that can occur while running the bank.
#[derive(Error, Debug)]
pub enum BankError {
    /// Failed to open, read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid operation record
    #[error("Invalid operation at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// An account with this number is already open
    #[error("Account {0} already exists")]
    DuplicateAccount(String),

    /// No account with this number is open
    #[error("Unknown account {0}")]
    UnknownAccount(String),

    /// Operation only exists on the other account variant
    #[error("Operation '{operation}' is not supported by {kind} {account}")]
    UnsupportedOperation {
        operation: &'static str,
        kind: &'static str,
        account: String,
    },

    /// Missing script file argument
    #[error("Missing script file argument. Usage: bank-accounts <script.csv> [summary.csv]")]
    MissingArgument,
}

/// Reasons an account operation was refused.
///
/// A rejected operation leaves the account untouched. The `Display` text is
/// the message shown to the customer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Deposit amount must be greater than zero.")]
    InvalidDeposit,

    #[error("Withdrawal amount must be greater than zero.")]
    InvalidWithdrawal,

    /// Amount plus fee exceeds balance plus overdraft limit.
    #[error("Insufficient funds. Cannot exceed overdraft limit.")]
    InsufficientFunds { requested: Money, available: Money },

    /// Withdrawal would take a savings balance under its floor.
    #[error("Cannot withdraw ${amount}. Minimum balance of ${minimum} must be maintained.")]
    BelowMinimumBalance { amount: Money, minimum: Money },

    #[error("Overdraft limit cannot be negative.")]
    NegativeOverdraftLimit,

    /// Balance and rate yield no positive interest.
    #[error("No interest due. Current balance: ${balance}")]
    NoInterestDue { balance: Money },

    /// Result would not fit in a monetary amount.
    #[error("Amount is out of range.")]
    AmountOutOfRange,
}

impl Rejection {
    /// Coarse category of the refusal.
    pub fn category(&self) -> RejectionCategory {
        match self {
            Rejection::InvalidDeposit
            | Rejection::InvalidWithdrawal
            | Rejection::AmountOutOfRange => RejectionCategory::InvalidAmount,
            Rejection::InsufficientFunds { .. }
            | Rejection::BelowMinimumBalance { .. }
            | Rejection::NoInterestDue { .. } => RejectionCategory::PolicyViolation,
            Rejection::NegativeOverdraftLimit => RejectionCategory::InvalidConfiguration,
        }
    }
}

/// Groups rejections by what the caller got wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionCategory {
    /// Amount was zero, negative or too large.
    InvalidAmount,
    /// Amount was valid but the account's balance policy refused it.
    PolicyViolation,
    /// A setting was given an out-of-range value.
    InvalidConfiguration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            Rejection::InvalidDeposit.to_string(),
            "Deposit amount must be greater than zero."
        );
        let floor = Rejection::BelowMinimumBalance {
            amount: Money::from_str("60").unwrap(),
            minimum: Money::from_str("100").unwrap(),
        };
        assert_eq!(
            floor.to_string(),
            "Cannot withdraw $60.00. Minimum balance of $100.00 must be maintained."
        );
    }

    #[test]
    fn test_rejection_categories() {
        assert_eq!(
            Rejection::InvalidWithdrawal.category(),
            RejectionCategory::InvalidAmount
        );
        assert_eq!(
            Rejection::InsufficientFunds {
                requested: Money::ZERO,
                available: Money::ZERO,
            }
            .category(),
            RejectionCategory::PolicyViolation
        );
        assert_eq!(
            Rejection::NegativeOverdraftLimit.category(),
            RejectionCategory::InvalidConfiguration
        );
        assert_eq!(
            Rejection::AmountOutOfRange.category(),
            RejectionCategory::InvalidAmount
        );
        assert_eq!(
            Rejection::NoInterestDue {
                balance: Money::ZERO
            }
            .category(),
            RejectionCategory::PolicyViolation
        );
    }
}
