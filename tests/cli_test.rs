use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use common::{ALICE, BOB};
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

mod common;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let accounts = NamedTempFile::new()?;
    common::write_accounts_csv(accounts.path())?;

    let mut operations = NamedTempFile::new()?;
    writeln!(operations, "type, from, to, amount")?;
    writeln!(operations, "transfer, {ALICE}, {BOB}, 80")?;
    writeln!(operations, "withdraw, {ALICE}, , 550")?;

    let mut cmd = Command::new(cargo_bin!("moneybox"));
    cmd.arg(accounts.path()).arg(operations.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("id,email,balance,withdrawn,paid_in"))
        .stdout(predicate::str::contains(format!(
            "{ALICE},alice@example.com,370,1430,200"
        )))
        .stdout(predicate::str::contains(format!(
            "{BOB},bob@example.com,180,100,280"
        )))
        .stderr(predicate::str::contains("Notification sent: funds low"));

    Ok(())
}

#[test]
fn test_cli_pay_in_limit_flag() -> Result<(), Box<dyn std::error::Error>> {
    let accounts = NamedTempFile::new()?;
    common::write_accounts_csv(accounts.path())?;

    let mut operations = NamedTempFile::new()?;
    writeln!(operations, "type, from, to, amount")?;
    writeln!(operations, "transfer, {ALICE}, {BOB}, 100")?;

    let mut cmd = Command::new(cargo_bin!("moneybox"));
    cmd.arg(accounts.path())
        .arg(operations.path())
        .arg("--pay-in-limit")
        .arg("250");

    // 200 + 100 exceeds the lowered limit.
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Operation rejected"))
        .stdout(predicate::str::contains(format!(
            "{BOB},bob@example.com,100,100,200"
        )));

    Ok(())
}

#[test]
fn test_cli_missing_accounts_file() {
    let mut cmd = Command::new(cargo_bin!("moneybox"));
    cmd.arg("does-not-exist.csv").arg("does-not-exist-either.csv");

    cmd.assert().failure();
}
