//! Operation script records for CSV parsing.

use crate::money::Money;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Raw operation row as read from CSV.
///
/// Columns other than `op` and `account` are optional; which ones an
/// operation needs depends on its type.
#[derive(Debug, Deserialize)]
pub struct CommandRecord {
    /// Operation name, e.g. `deposit` or `open_savings`
    pub op: String,

    /// Account number the operation targets
    pub account: String,

    /// Customer name (open and rename operations)
    #[serde(default)]
    pub customer: Option<String>,

    /// Amount, opening balance or new overdraft limit
    #[serde(default)]
    pub amount: Option<String>,

    /// Overdraft limit or interest rate when opening
    #[serde(default)]
    pub param: Option<String>,
}

impl CommandRecord {
    /// Parses the raw CSV record into a typed command.
    ///
    /// Returns `None` if the record is invalid (unknown op, missing field, bad number).
    pub fn parse(&self) -> Option<ParsedCommand> {
        let op = self.op.trim().to_lowercase();
        let account = self.account.trim();
        if account.is_empty() {
            return None;
        }

        let kind = match op.as_str() {
            "open_checking" => CommandKind::OpenChecking {
                customer: self.customer()?,
                initial_balance: self.money_field(&self.amount).unwrap_or(Money::ZERO),
                overdraft_limit: self.money_field(&self.param)?,
            },
            "open_savings" => CommandKind::OpenSavings {
                customer: self.customer()?,
                initial_balance: self.money_field(&self.amount).unwrap_or(Money::ZERO),
                interest_rate: self.interest_rate()?,
            },
            "deposit" => CommandKind::Deposit(self.money_field(&self.amount)?),
            "withdraw" | "withdrawal" => CommandKind::Withdraw(self.money_field(&self.amount)?),
            "apply_interest" => CommandKind::ApplyInterest,
            "set_overdraft" => CommandKind::SetOverdraft(self.money_field(&self.amount)?),
            "rename" => CommandKind::Rename(self.customer()?),
            "display" => CommandKind::Display,
            "statement" => CommandKind::Statement,
            _ => return None,
        };

        Some(ParsedCommand {
            account: account.to_string(),
            kind,
        })
    }

    fn customer(&self) -> Option<String> {
        non_empty(&self.customer).map(str::to_string)
    }

    /// Percent rate; negative rates are invalid.
    fn interest_rate(&self) -> Option<Decimal> {
        let rate = Decimal::from_str(non_empty(&self.param)?).ok()?;
        if rate < Decimal::ZERO {
            return None;
        }
        Some(rate)
    }

    fn money_field(&self, field: &Option<String>) -> Option<Money> {
        Money::from_str(non_empty(field)?).ok()
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    let trimmed = field.as_deref()?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// A parsed operation ready for the bank.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCommand {
    /// Target account number
    pub account: String,

    /// Operation with its arguments
    pub kind: CommandKind,
}

/// Operation variants with associated data.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandKind {
    /// Open a checking account.
    OpenChecking {
        customer: String,
        initial_balance: Money,
        overdraft_limit: Money,
    },

    /// Open a savings account.
    OpenSavings {
        customer: String,
        initial_balance: Money,
        interest_rate: Decimal,
    },

    Deposit(Money),

    Withdraw(Money),

    /// Credit interest (savings only).
    ApplyInterest,

    /// Change the overdraft limit (checking only).
    SetOverdraft(Money),

    /// Change the customer name.
    Rename(String),

    /// Show account details.
    Display,

    /// Show the transaction log.
    Statement,
}

impl CommandKind {
    /// Operation name as written in scripts.
    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::OpenChecking { .. } => "open_checking",
            CommandKind::OpenSavings { .. } => "open_savings",
            CommandKind::Deposit(_) => "deposit",
            CommandKind::Withdraw(_) => "withdraw",
            CommandKind::ApplyInterest => "apply_interest",
            CommandKind::SetOverdraft(_) => "set_overdraft",
            CommandKind::Rename(_) => "rename",
            CommandKind::Display => "display",
            CommandKind::Statement => "statement",
        }
    }
}
