//! Checking accounts: overdraft up to a limit, flat fee per withdrawal.

use crate::account::{Account, Receipt};
use crate::error::Rejection;
use crate::money::Money;
use crate::transaction::TxKind;
use log::debug;

/// Fee charged on every successful withdrawal.
pub const TRANSACTION_FEE: Money = Money::from_ten_thousandths(15_000);

/// An account that may go below zero, down to `-overdraft_limit`.
///
/// # Invariants
///
/// - `overdraft_limit >= 0`
/// - Withdrawals keep `balance >= -overdraft_limit`
#[derive(Debug, Clone)]
pub struct CheckingAccount {
    account: Account,
    overdraft_limit: Money,
}

impl CheckingAccount {
    /// Opens a checking account.
    ///
    /// A negative `overdraft_limit` is treated as zero.
    pub fn new(
        account_number: impl Into<String>,
        customer_name: impl Into<String>,
        initial_balance: Money,
        overdraft_limit: Money,
    ) -> Self {
        CheckingAccount {
            account: Account::new(account_number, customer_name, initial_balance),
            overdraft_limit: overdraft_limit.max(Money::ZERO),
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    pub fn overdraft_limit(&self) -> Money {
        self.overdraft_limit
    }

    /// Replaces the overdraft limit. Negative limits are refused.
    pub fn set_overdraft_limit(&mut self, new_limit: Money) -> Result<Receipt, Rejection> {
        if new_limit.is_negative() {
            debug!(
                "{}: refused negative overdraft limit {}",
                self.account.account_number(),
                new_limit
            );
            return Err(Rejection::NegativeOverdraftLimit);
        }

        self.overdraft_limit = new_limit;
        Ok(Receipt::new(self.account.balance())
            .with_message(format!("Overdraft limit updated to: ${}", new_limit)))
    }

    pub fn deposit(&mut self, amount: Money) -> Result<Receipt, Rejection> {
        self.account.deposit(amount)
    }

    /// Withdraws `amount` and charges [`TRANSACTION_FEE`].
    ///
    /// Succeeds when `amount + fee <= balance + overdraft_limit`. Logs the
    /// withdrawal and the fee as separate records.
    pub fn withdraw(&mut self, amount: Money) -> Result<Receipt, Rejection> {
        let number = self.account.account_number().to_owned();

        if !amount.is_positive() {
            debug!("{}: rejected withdrawal of {}", number, amount);
            return Err(Rejection::InvalidWithdrawal);
        }

        let total_deduction = amount
            .checked_add(TRANSACTION_FEE)
            .ok_or(Rejection::AmountOutOfRange)?;
        let available_funds = self
            .account
            .balance()
            .checked_add(self.overdraft_limit)
            .ok_or(Rejection::AmountOutOfRange)?;

        if total_deduction > available_funds {
            debug!(
                "{}: withdrawal of {} exceeds available {}",
                number, total_deduction, available_funds
            );
            return Err(Rejection::InsufficientFunds {
                requested: total_deduction,
                available: available_funds,
            });
        }

        let balance = self
            .account
            .post(&[(TxKind::Withdrawal, amount), (TxKind::Fee, TRANSACTION_FEE)])?;
        debug!("{}: withdrew {} plus fee, balance {}", number, amount, balance);

        let mut receipt = Receipt::new(balance)
            .with_message(format!("Withdrew ${} from checking account", amount))
            .with_message(format!("Transaction fee: ${}", TRANSACTION_FEE));

        // Informational only: the limit check above bounds how far below zero we go.
        if balance.is_negative() {
            receipt = receipt.with_message(format!(
                "Account is in overdraft. Current balance: ${}",
                balance
            ));
        }

        Ok(receipt)
    }

    pub fn display_info(&self) -> Vec<String> {
        let mut lines = self.account.display_info();
        lines.push("Account Type: Checking Account".to_string());
        lines.push(format!("Overdraft Limit: ${}", self.overdraft_limit));
        lines.push(format!("Transaction Fee: ${}", TRANSACTION_FEE));
        lines
    }
}
