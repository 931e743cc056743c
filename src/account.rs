//! Base account state shared by every account variant.
//!
//! The balance is private to [`Account`] and changes only through
//! [`Account::post`], which appends one [`TransactionRecord`] per movement.
//! That keeps the invariant: every balance change has a matching record.

use crate::error::Rejection;
use crate::money::Money;
use crate::transaction::{TransactionRecord, TxKind};
use log::debug;

/// Outcome of an accepted account operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Customer-facing confirmation lines, in the order they were produced.
    pub messages: Vec<String>,

    /// Balance after the operation.
    pub balance: Money,
}

impl Receipt {
    pub(crate) fn new(balance: Money) -> Self {
        Receipt {
            messages: Vec::new(),
            balance,
        }
    }

    pub(crate) fn with_message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }
}

/// Identity, balance and transaction log of an account.
///
/// Not used on its own: [`CheckingAccount`](crate::CheckingAccount) and
/// [`SavingsAccount`](crate::SavingsAccount) wrap it and add their policies.
#[derive(Debug, Clone)]
pub struct Account {
    account_number: String,
    customer_name: String,
    balance: Money,
    transactions: Vec<TransactionRecord>,
}

impl Account {
    /// Creates an account holding `initial_balance`.
    ///
    /// The opening balance is not a logged movement, so the log starts empty.
    pub fn new(
        account_number: impl Into<String>,
        customer_name: impl Into<String>,
        initial_balance: Money,
    ) -> Self {
        Account {
            account_number: account_number.into(),
            customer_name: customer_name.into(),
            balance: initial_balance,
            transactions: Vec::new(),
        }
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Logged movements in insertion order.
    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    /// Deposits a positive amount.
    ///
    /// Both variants accept deposits under the same rule, so it lives here.
    pub fn deposit(&mut self, amount: Money) -> Result<Receipt, Rejection> {
        if !amount.is_positive() {
            debug!(
                "{}: rejected deposit of {}",
                self.account_number, amount
            );
            return Err(Rejection::InvalidDeposit);
        }

        self.post(&[(TxKind::Deposit, amount)])?;
        debug!("{}: deposited {}", self.account_number, amount);

        Ok(Receipt::new(self.balance).with_message(format!("Deposit successful: ${}", amount)))
    }

    /// Applies a batch of movements to the balance and logs each of them.
    ///
    /// This is the only place the balance changes after construction. Either
    /// every entry is applied or, on overflow, none is.
    pub(crate) fn post(&mut self, entries: &[(TxKind, Money)]) -> Result<Money, Rejection> {
        let first = self.transactions.len() as u64 + 1;
        let records: Vec<TransactionRecord> = entries
            .iter()
            .zip(first..)
            .map(|(&(kind, amount), sequence)| TransactionRecord::new(sequence, kind, amount))
            .collect();

        let mut balance = self.balance;
        for record in &records {
            balance = balance
                .checked_add(record.balance_effect())
                .ok_or(Rejection::AmountOutOfRange)?;
        }

        self.balance = balance;
        self.transactions.extend(records);
        Ok(balance)
    }

    /// Identity lines common to every account type.
    pub fn display_info(&self) -> Vec<String> {
        vec![
            format!("Account Number: {}", self.account_number),
            format!("Customer Name: {}", self.customer_name),
            format!("Balance: ${}", self.balance),
        ]
    }

    /// One line per logged movement.
    pub fn statement(&self) -> Vec<String> {
        self.transactions.iter().map(|t| t.to_string()).collect()
    }

    /// Recomputes the balance from the opening amount and the log.
    #[cfg(test)]
    pub(crate) fn replay_from(&self, opening: Money) -> Money {
        self.transactions
            .iter()
            .fold(opening, |acc, t| acc + t.balance_effect())
    }
}
