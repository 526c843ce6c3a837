//! End-to-end tests: invoke the built `stak` binary against fixture
//! source files and check what it prints on stdout.

use std::path::PathBuf;
use std::process::Command;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn run(file: &PathBuf) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_stak"))
        .arg(file)
        .output()
        .expect("failed to run stak binary");
    (
        output.status.success(),
        String::from_utf8(output.stdout).expect("stdout is utf8"),
    )
}

#[test]
fn runs_arithmetic_fixture() {
    let (success, stdout) = run(&fixture("arithmetic.stak"));
    assert!(success);
    assert_eq!(stdout.trim(), "[3]");
}

#[test]
fn runs_user_word_definition_fixture() {
    let (success, stdout) = run(&fixture("square.stak"));
    assert!(success);
    assert_eq!(stdout.trim(), "[36]");
}

#[test]
fn a_syntax_error_is_a_fatal_error_and_prints_nothing() {
    let (success, stdout) = run(&fixture("syntax_error.stak"));
    assert!(!success);
    assert_eq!(stdout.trim(), "");
}

#[test]
fn a_missing_file_is_a_fatal_error() {
    let missing = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/nope.stak");
    let (success, _) = run(&missing);
    assert!(!success);
}

#[test]
fn missing_argument_is_rejected_by_clap() {
    let output = Command::new(env!("CARGO_BIN_EXE_stak"))
        .output()
        .expect("failed to run stak binary");
    assert!(!output.status.success());
}
