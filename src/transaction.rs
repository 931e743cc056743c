//! Transaction log entries.

use crate::money::Money;
use serde::Serialize;
use std::fmt;

/// The kind of balance movement a record describes.
///
/// Amounts are always positive; the direction comes from the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxKind {
    /// Funds paid in by the customer.
    Deposit,

    /// Funds taken out by the customer.
    Withdrawal,

    /// Charge levied by the bank on a withdrawal.
    Fee,

    /// Interest credited by the bank.
    Interest,
}

impl TxKind {
    /// Returns `true` if this kind adds to the balance.
    pub fn is_credit(&self) -> bool {
        matches!(self, TxKind::Deposit | TxKind::Interest)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Deposit => "DEPOSIT",
            TxKind::Withdrawal => "WITHDRAWAL",
            TxKind::Fee => "FEE",
            TxKind::Interest => "INTEREST",
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable, logged balance movement.
///
/// Records are only created by the owning account when it changes its
/// balance, so fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRecord {
    sequence: u64,
    kind: TxKind,
    amount: Money,
}

impl TransactionRecord {
    pub(crate) fn new(sequence: u64, kind: TxKind, amount: Money) -> Self {
        TransactionRecord {
            sequence,
            kind,
            amount,
        }
    }

    /// Position in the owning account's log, starting at 1.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn kind(&self) -> TxKind {
        self.kind
    }

    /// Unsigned amount of the movement.
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Signed effect on the balance.
    pub fn balance_effect(&self) -> Money {
        if self.kind.is_credit() {
            self.amount
        } else {
            -self.amount
        }
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ${}", self.sequence, self.kind, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn test_credit_kinds() {
        assert!(TxKind::Deposit.is_credit());
        assert!(TxKind::Interest.is_credit());
        assert!(!TxKind::Withdrawal.is_credit());
        assert!(!TxKind::Fee.is_credit());
    }

    #[test]
    fn test_balance_effect_follows_kind() {
        let deposit = TransactionRecord::new(1, TxKind::Deposit, money("10"));
        let fee = TransactionRecord::new(2, TxKind::Fee, money("1.5"));

        assert_eq!(deposit.balance_effect(), money("10"));
        assert_eq!(fee.balance_effect(), money("-1.5"));
        assert_eq!(fee.amount(), money("1.5"));
    }

    #[test]
    fn test_display() {
        let record = TransactionRecord::new(3, TxKind::Withdrawal, money("140"));
        assert_eq!(record.to_string(), "#3 WITHDRAWAL $140.00");
        assert_eq!(TxKind::Interest.to_string(), "INTEREST");
    }
}
