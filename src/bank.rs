//! Account registry and script runner.
//!
//! Executes operation scripts in order against the accounts it owns. Each
//! operation yields transcript lines; rejected operations are part of the
//! transcript, malformed rows are logged and skipped.

use crate::account::{Account, Receipt};
use crate::checking::CheckingAccount;
use crate::command::{CommandKind, CommandRecord, ParsedCommand};
use crate::error::{BankError, Rejection, Result};
use crate::money::Money;
use crate::savings::SavingsAccount;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{Read, Write};

/// The closed set of account types.
#[derive(Debug, Clone)]
pub enum BankAccount {
    Checking(CheckingAccount),
    Savings(SavingsAccount),
}

impl BankAccount {
    /// Shared identity, balance and log.
    pub fn account(&self) -> &Account {
        match self {
            BankAccount::Checking(c) => c.account(),
            BankAccount::Savings(s) => s.account(),
        }
    }

    pub fn account_mut(&mut self) -> &mut Account {
        match self {
            BankAccount::Checking(c) => c.account_mut(),
            BankAccount::Savings(s) => s.account_mut(),
        }
    }

    /// Human-readable account type.
    pub fn kind_name(&self) -> &'static str {
        match self {
            BankAccount::Checking(_) => "Checking Account",
            BankAccount::Savings(_) => "Savings Account",
        }
    }

    pub fn deposit(&mut self, amount: Money) -> std::result::Result<Receipt, Rejection> {
        match self {
            BankAccount::Checking(c) => c.deposit(amount),
            BankAccount::Savings(s) => s.deposit(amount),
        }
    }

    pub fn withdraw(&mut self, amount: Money) -> std::result::Result<Receipt, Rejection> {
        match self {
            BankAccount::Checking(c) => c.withdraw(amount),
            BankAccount::Savings(s) => s.withdraw(amount),
        }
    }

    pub fn display_info(&self) -> Vec<String> {
        match self {
            BankAccount::Checking(c) => c.display_info(),
            BankAccount::Savings(s) => s.display_info(),
        }
    }
}

impl From<CheckingAccount> for BankAccount {
    fn from(account: CheckingAccount) -> Self {
        BankAccount::Checking(account)
    }
}

impl From<SavingsAccount> for BankAccount {
    fn from(account: SavingsAccount) -> Self {
        BankAccount::Savings(account)
    }
}

/// One row of the account summary CSV.
#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    account: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    customer: &'a str,
    balance: Money,
    transactions: usize,
}

/// Owns every open account, keyed by account number.
///
/// # Output Ordering
///
/// Accounts are kept in a `BTreeMap` so summaries list them by account
/// number in ascending order.
#[derive(Debug, Default)]
pub struct Bank {
    accounts: BTreeMap<String, BankAccount>,
}

impl Bank {
    /// Creates a bank with no accounts.
    pub fn new() -> Self {
        Bank {
            accounts: BTreeMap::new(),
        }
    }

    /// Registers a new account. Account numbers must be unique.
    pub fn open(&mut self, account: impl Into<BankAccount>) -> Result<&mut BankAccount> {
        let account = account.into();
        let number = account.account().account_number().to_string();

        if self.accounts.contains_key(&number) {
            return Err(BankError::DuplicateAccount(number));
        }

        debug!("Opened {} {}", account.kind_name(), number);
        Ok(self.accounts.entry(number).or_insert(account))
    }

    pub fn get(&self, number: &str) -> Option<&BankAccount> {
        self.accounts.get(number)
    }

    pub fn get_mut(&mut self, number: &str) -> Option<&mut BankAccount> {
        self.accounts.get_mut(number)
    }

    /// Open accounts in account-number order.
    pub fn accounts(&self) -> impl Iterator<Item = &BankAccount> {
        self.accounts.values()
    }

    /// Runs an operation script, returning the transcript.
    ///
    /// Invalid rows and operations the bank cannot route are logged at warn
    /// level and skipped.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<Vec<String>> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut transcript = Vec::new();

        for (row_idx, result) in csv_reader.deserialize::<CommandRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => match record.parse() {
                    Some(command) => match self.execute(command) {
                        Ok(lines) => transcript.extend(lines),
                        Err(e) => warn!("Row {}: {}", row_num, e),
                    },
                    None => warn!(
                        "{}",
                        BankError::InvalidRecord {
                            row: row_num,
                            message: format!("cannot parse '{}' operation", record.op),
                        }
                    ),
                },
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        Ok(transcript)
    }

    /// Executes a single operation and returns its transcript lines.
    pub fn execute(&mut self, command: ParsedCommand) -> Result<Vec<String>> {
        let ParsedCommand { account: number, kind } = command;
        let operation = kind.name();

        let outcome: std::result::Result<Vec<String>, Rejection> = match kind {
            CommandKind::OpenChecking {
                customer,
                initial_balance,
                overdraft_limit,
            } => {
                let opened = self.open(CheckingAccount::new(
                    number.as_str(),
                    customer,
                    initial_balance,
                    overdraft_limit,
                ))?;
                Ok(vec![format!(
                    "Opened {} with balance ${}",
                    opened.kind_name(),
                    opened.account().balance()
                )])
            }
            CommandKind::OpenSavings {
                customer,
                initial_balance,
                interest_rate,
            } => {
                let opened = self.open(SavingsAccount::new(
                    number.as_str(),
                    customer,
                    initial_balance,
                    interest_rate,
                ))?;
                Ok(vec![format!(
                    "Opened {} with balance ${}",
                    opened.kind_name(),
                    opened.account().balance()
                )])
            }
            CommandKind::Deposit(amount) => self.find(&number)?.deposit(amount).map(messages),
            CommandKind::Withdraw(amount) => self.find(&number)?.withdraw(amount).map(messages),
            CommandKind::ApplyInterest => match self.find(&number)? {
                BankAccount::Savings(s) => s.apply_interest().map(messages),
                other => return Err(unsupported(operation, other)),
            },
            CommandKind::SetOverdraft(limit) => match self.find(&number)? {
                BankAccount::Checking(c) => c.set_overdraft_limit(limit).map(messages),
                other => return Err(unsupported(operation, other)),
            },
            CommandKind::Rename(name) => {
                let account = self.find(&number)?.account_mut();
                account.set_customer_name(name);
                Ok(vec![format!(
                    "Customer name updated to: {}",
                    account.customer_name()
                )])
            }
            CommandKind::Display => Ok(self.find(&number)?.display_info()),
            CommandKind::Statement => {
                let account = self.find(&number)?.account();
                if account.transactions().is_empty() {
                    Ok(vec!["No transactions recorded.".to_string()])
                } else {
                    Ok(account.statement())
                }
            }
        };

        let lines = outcome.unwrap_or_else(|rejection| {
            debug!("{}: {} rejected: {:?}", number, operation, rejection);
            vec![rejection.to_string()]
        });

        Ok(lines
            .into_iter()
            .map(|line| format!("[{}] {}", number, line))
            .collect())
    }

    fn find(&mut self, number: &str) -> Result<&mut BankAccount> {
        self.accounts
            .get_mut(number)
            .ok_or_else(|| BankError::UnknownAccount(number.to_string()))
    }

    /// Writes one CSV row per account, ordered by account number.
    pub fn write_summary<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for entry in self.accounts.values() {
            let account = entry.account();
            csv_writer.serialize(SummaryRow {
                account: account.account_number(),
                kind: entry.kind_name(),
                customer: account.customer_name(),
                balance: account.balance(),
                transactions: account.transactions().len(),
            })?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Writes an account's transaction log as CSV.
    pub fn write_transactions<W: Write>(&self, number: &str, writer: W) -> Result<()> {
        let entry = self
            .accounts
            .get(number)
            .ok_or_else(|| BankError::UnknownAccount(number.to_string()))?;

        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in entry.account().transactions() {
            csv_writer.serialize(record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

fn messages(receipt: Receipt) -> Vec<String> {
    receipt.messages
}

fn unsupported(operation: &'static str, account: &BankAccount) -> BankError {
    BankError::UnsupportedOperation {
        operation,
        kind: account.kind_name(),
        account: account.account().account_number().to_string(),
    }
}
