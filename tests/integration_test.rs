//! Integration tests for the bank-accounts CLI.
//!
//! These tests run the actual binary and verify the transcript against
//! expected files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, NamedTempFile};

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Run the binary with the given script and return stdout
fn run_bank(script: &str) -> String {
    let mut cmd = Command::cargo_bin("bank-accounts").unwrap();
    let assert = cmd.arg(script).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

fn lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|l| l.trim_end().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

#[test]
fn test_sample_a_mixed_accounts() {
    let output = run_bank(&test_data_path("sample_a.csv"));
    let expected = fs::read_to_string(test_data_path("expected_a.txt")).unwrap();

    assert_eq!(lines(&output), lines(&expected));
}

#[test]
fn test_sample_b_bad_rows_are_skipped() {
    let output = run_bank(&test_data_path("sample_b_bad_rows.csv"));
    let expected = fs::read_to_string(test_data_path("expected_b.txt")).unwrap();

    assert_eq!(lines(&output), lines(&expected));
}

#[test]
fn test_summary_file_is_written() {
    let dir = tempdir().unwrap();
    let summary_path = dir.path().join("summary.csv");

    Command::cargo_bin("bank-accounts")
        .unwrap()
        .arg(test_data_path("sample_a.csv"))
        .arg(&summary_path)
        .assert()
        .success();

    let summary = fs::read_to_string(&summary_path).unwrap();
    assert_eq!(
        lines(&summary),
        vec![
            "account,type,customer,balance,transactions",
            "CHK-001,Checking Account,Ada Lovelace,-41.00,3",
            "SAV-001,Savings Account,Alan Turing,157.50,1",
        ]
    );
}

#[test]
fn test_script_from_temp_file() {
    let script = NamedTempFile::new().unwrap();
    fs::write(
        script.path(),
        "op,account,customer,amount,param\n\
         open_savings,S-9,Emmy,1000,2\n\
         apply_interest,S-9,,,\n\
         withdraw,S-9,,920,\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("bank-accounts").unwrap();
    cmd.arg(script.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[S-9] Interest applied: $20.00"))
        .stdout(predicate::str::contains(
            "[S-9] Withdrawal successful: $920.00 from savings account",
        ));
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("bank-accounts").unwrap();
    cmd.arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("Error")));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("bank-accounts").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing script file"));
}

#[test]
fn test_amounts_have_two_decimal_places() {
    let output = run_bank(&test_data_path("sample_a.csv"));

    for line in output.lines() {
        for (idx, _) in line.match_indices('$') {
            let amount: String = line[idx + 1..]
                .chars()
                .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            let amount = amount.trim_end_matches('.');
            let dot = amount.find('.').expect("amount has a decimal point");
            assert_eq!(amount.len() - dot - 1, 2, "Expected 2 decimal places in: {}", line);
        }
    }
}
