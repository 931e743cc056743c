//! Bank Accounts CLI
//!
//! Runs an operation script against a fresh bank, prints the transcript and
//! optionally writes the final account summary.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- operations.csv > transcript.txt
//! cargo run -- operations.csv summary.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use bank_accounts::{Bank, BankError, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(BankError::MissingArgument);
    }

    let script_path = &args[1];
    let file = File::open(script_path)?;
    let reader = BufReader::new(file);

    let mut bank = Bank::new();
    let transcript = bank.process_csv(reader)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for line in &transcript {
        writeln!(handle, "{}", line)?;
    }
    handle.flush()?;

    if let Some(summary_path) = args.get(2) {
        let summary = BufWriter::new(File::create(summary_path)?);
        bank.write_summary(summary)?;
    }

    Ok(())
}
