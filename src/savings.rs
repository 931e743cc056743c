//! Savings accounts: interest on demand, minimum balance floor.

use crate::account::{Account, Receipt};
use crate::error::Rejection;
use crate::money::Money;
use crate::transaction::TxKind;
use log::debug;
use rust_decimal::Decimal;

/// Floor a withdrawal may not take the balance below.
pub const MIN_BALANCE: Money = Money::from_ten_thousandths(1_000_000);

/// An interest-bearing account that keeps at least [`MIN_BALANCE`].
#[derive(Debug, Clone)]
pub struct SavingsAccount {
    account: Account,
    /// Percent per annum, fixed at opening.
    interest_rate: Decimal,
}

impl SavingsAccount {
    pub fn new(
        account_number: impl Into<String>,
        customer_name: impl Into<String>,
        initial_balance: Money,
        interest_rate: Decimal,
    ) -> Self {
        SavingsAccount {
            account: Account::new(account_number, customer_name, initial_balance),
            interest_rate,
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// Interest the current balance would earn. Has no side effects.
    pub fn calculate_interest(&self) -> Result<Money, Rejection> {
        self.account
            .balance()
            .checked_percent(self.interest_rate)
            .ok_or(Rejection::AmountOutOfRange)
    }

    /// Credits [`calculate_interest`](Self::calculate_interest) to the balance.
    ///
    /// Refused when the interest is not positive, which happens for a zero
    /// rate or a balance at or below zero.
    pub fn apply_interest(&mut self) -> Result<Receipt, Rejection> {
        let number = self.account.account_number().to_owned();
        let interest = self.calculate_interest()?;

        if !interest.is_positive() {
            debug!("{}: no interest due ({})", number, interest);
            return Err(Rejection::NoInterestDue {
                balance: self.account.balance(),
            });
        }

        let balance = self.account.post(&[(TxKind::Interest, interest)])?;
        debug!("{}: applied interest {}", number, interest);

        Ok(Receipt::new(balance).with_message(format!("Interest applied: ${}", interest)))
    }

    pub fn deposit(&mut self, amount: Money) -> Result<Receipt, Rejection> {
        self.account.deposit(amount)
    }

    /// Withdraws `amount` if the balance stays at or above [`MIN_BALANCE`].
    pub fn withdraw(&mut self, amount: Money) -> Result<Receipt, Rejection> {
        let number = self.account.account_number().to_owned();
        let balance = self.account.balance();

        if !amount.is_positive() {
            debug!("{}: rejected withdrawal of {}", number, amount);
            return Err(Rejection::InvalidWithdrawal);
        }

        let remaining = balance
            .checked_sub(amount)
            .ok_or(Rejection::AmountOutOfRange)?;

        if remaining < MIN_BALANCE {
            debug!(
                "{}: withdrawal of {} would breach minimum balance",
                number, amount
            );
            return Err(Rejection::BelowMinimumBalance {
                amount,
                minimum: MIN_BALANCE,
            });
        }

        let mut receipt = Receipt::new(balance);

        // Unreachable while the floor above zero holds; reports the pre-withdrawal balance.
        if balance.is_negative() {
            receipt = receipt.with_message(format!(
                "Account is in overdraft. Current balance: ${}",
                balance
            ));
        }

        receipt.balance = self.account.post(&[(TxKind::Withdrawal, amount)])?;
        debug!("{}: withdrew {}, balance {}", number, amount, receipt.balance);

        Ok(receipt.with_message(format!(
            "Withdrawal successful: ${} from savings account",
            amount
        )))
    }

    /// Base lines followed by the savings terms.
    ///
    /// The rate is printed in normalized form (`5%`, `2.5%`), without a
    /// trailing `.0`.
    pub fn display_info(&self) -> Vec<String> {
        let mut lines = self.account.display_info();
        lines.push("Account Type: Savings Account".to_string());
        lines.push(format!("Interest Rate: {}%", self.interest_rate.normalize()));
        lines.push(format!("Minimum Balance Requirement: ${}", MIN_BALANCE));
        lines
    }
}
