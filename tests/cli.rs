//! Integration tests for the `payroll-ledger` binary
//!
//! Drives the compiled binary over stdin and checks its output, exit status
//! and ledger file side effects.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PERMANENT_INPUT: &str = "Budi\nTetap\n1000000\nya\n";

fn payroll_ledger(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("payroll-ledger").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_default_run_appends_to_database_txt() {
    let dir = TempDir::new().unwrap();

    payroll_ledger(&dir)
        .write_stdin(PERMANENT_INPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Gaji untuk Budi adalah: 1050000"))
        .stdout(predicate::str::contains("ditambahkan ke database.txt"));

    let contents = fs::read_to_string(dir.path().join("database.txt")).unwrap();
    assert!(contents.ends_with("TotalGaji: 1050000\n"));
}

#[test]
fn test_unknown_category_exits_cleanly_without_ledger() {
    let dir = TempDir::new().unwrap();

    payroll_ledger(&dir)
        .write_stdin("Rina\nfreelance\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jenis pegawai tidak dikenal."))
        .stdout(predicate::str::contains("Gaji untuk").not());

    assert!(!dir.path().join("database.txt").exists());
}

#[test]
fn test_output_flag_redirects_ledger() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("x.txt");

    payroll_ledger(&dir)
        .arg("--output")
        .arg(&target)
        .write_stdin("Ayu\nKontrak\n50000\n20\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gaji untuk Ayu adalah: 970000"));

    let contents = fs::read_to_string(&target).unwrap();
    assert_eq!(
        contents,
        "Nama: Ayu | Jenis: Kontrak | Gaji: 1000000 | Tunjangan: 0 | JamKerja: 20 | TotalGaji: 970000\n"
    );
    assert!(!dir.path().join("database.txt").exists());
}

#[test]
fn test_unwritable_ledger_reports_failure_and_exits_zero() {
    let dir = TempDir::new().unwrap();

    // A directory cannot be opened for append.
    payroll_ledger(&dir)
        .arg("--output")
        .arg(dir.path())
        .write_stdin(PERMANENT_INPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Gaji untuk Budi adalah: 1050000"))
        .stdout(predicate::str::contains("Gagal menyimpan ke file:"))
        .stdout(predicate::str::contains("Data berhasil").not());
}

#[test]
fn test_non_numeric_base_pay_exits_non_zero() {
    let dir = TempDir::new().unwrap();

    payroll_ledger(&dir)
        .write_stdin("Budi\nTetap\nsejuta\nya\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Payroll session aborted"));

    assert!(!dir.path().join("database.txt").exists());
}

#[test]
fn test_config_file_rates_are_applied() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("payroll.yaml");
    fs::write(&config, "rates:\n  married_allowance: \"0.12\"\n").unwrap();

    payroll_ledger(&dir)
        .arg("--config")
        .arg(&config)
        .write_stdin(PERMANENT_INPUT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Gaji untuk Budi adalah: 1070000"));

    let contents = fs::read_to_string(dir.path().join("database.txt")).unwrap();
    assert!(contents.contains("Tunjangan: 120000"));
}

#[test]
fn test_missing_config_file_exits_non_zero() {
    let dir = TempDir::new().unwrap();

    payroll_ledger(&dir)
        .arg("--config")
        .arg(dir.path().join("absent.yaml"))
        .write_stdin(PERMANENT_INPUT)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}
