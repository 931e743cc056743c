//! # Bank Accounts
//!
//! Checking and savings accounts that enforce their own balance policies
//! and keep an append-only transaction log.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: Balances use `rust_decimal`, shown with 2 decimal places
//! - **Single mutation path**: Every balance change is posted together with its log record
//! - **Explicit outcomes**: Operations return a [`Receipt`] or a [`Rejection`], never a partial update
//! - **Deterministic output**: Accounts are listed by account number
//!
//! ## Example
//!
//! ```
//! use bank_accounts::{CheckingAccount, Money};
//! use std::str::FromStr;
//!
//! let mut account = CheckingAccount::new(
//!     "CHK-001",
//!     "Ada",
//!     Money::from_str("100").unwrap(),
//!     Money::from_str("50").unwrap(),
//! );
//! let receipt = account.withdraw(Money::from_str("140").unwrap()).unwrap();
//! assert_eq!(receipt.balance.to_string(), "-41.50");
//! assert_eq!(account.account().transactions().len(), 2);
//! ```

pub mod account;
pub mod bank;
pub mod checking;
pub mod command;
pub mod error;
pub mod money;
pub mod savings;
pub mod transaction;

pub use account::{Account, Receipt};
pub use bank::{Bank, BankAccount};
pub use checking::{CheckingAccount, TRANSACTION_FEE};
pub use command::{CommandKind, CommandRecord, ParsedCommand};
pub use error::{BankError, Rejection, RejectionCategory, Result};
pub use money::Money;
pub use savings::{SavingsAccount, MIN_BALANCE};
pub use transaction::{TransactionRecord, TxKind};
