//! Integration tests for the GLEAM CLI.
//!
//! These tests invoke the `gleam` binary as a subprocess and check
//! exit codes, stdout, and stderr.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn gleam() -> Command {
    Command::cargo_bin("gleam").unwrap()
}

/// Return the workspace root (parent of gleam-cli/).
fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .to_path_buf()
}

/// Return the absolute path to a bundled contract template.
fn contract(name: &str) -> PathBuf {
    workspace_root().join("contracts").join(name)
}

/// Write bytecode text to a scratch file and return its path.
fn write_temp(dir: &TempDir, name: &str, text: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path.to_str().unwrap().to_string()
}

/// Serialized genesis block with the given timestamp, via `gleam block`.
fn serialized_block(timestamp: i64) -> String {
    let output = gleam()
        .args(["block", "--timestamp", timestamp.to_string().as_str()])
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

// ---- No-args / help ----

#[test]
fn no_args_prints_usage_and_exits_1() {
    gleam()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage: gleam"));
}

#[test]
fn help_flag_exits_0() {
    gleam()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::contains("Commands:"));
}

#[test]
fn unknown_command_exits_1() {
    gleam()
        .arg("frobnicate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown command"));
}

// ---- Run ----

#[test]
fn run_addition() {
    let dir = TempDir::new().unwrap();
    let file = write_temp(&dir, "add.gleam", "PUSH 5\nPUSH 3\nADD\nRETURN\n");

    gleam()
        .args(["run", file.as_str()])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn run_without_return_prints_undefined() {
    let dir = TempDir::new().unwrap();
    let file = write_temp(&dir, "noret.gleam", "PUSH 1\n");

    gleam()
        .args(["run", file.as_str()])
        .assert()
        .success()
        .stdout("undefined\n");
}

#[test]
fn run_print_goes_to_stderr() {
    let dir = TempDir::new().unwrap();
    let file = write_temp(&dir, "print.gleam", "PUSH 7\nPRINT\nPUSH 0\nRETURN\n");

    gleam()
        .args(["run", file.as_str()])
        .assert()
        .success()
        .stdout("0\n")
        .stderr(predicate::str::contains("7"));
}

#[test]
fn run_stack_underflow_exits_3() {
    let dir = TempDir::new().unwrap();
    let file = write_temp(&dir, "under.gleam", "PUSH 1\nADD\nRETURN\n");

    gleam()
        .args(["run", file.as_str()])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("stack underflow at instruction 1"));
}

#[test]
fn run_out_of_gas_exits_4() {
    let dir = TempDir::new().unwrap();
    let file = write_temp(&dir, "loop.gleam", "top:\nJUMP top\n");

    gleam()
        .args(["run", file.as_str(), "--gas", "20"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("out of gas"));
}

#[test]
fn run_unverifiable_program_exits_2() {
    let dir = TempDir::new().unwrap();
    let file = write_temp(&dir, "dead.gleam", "PUSH 1\nRETURN\nHALT\n");

    gleam()
        .args(["run", file.as_str()])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown opcode 'HALT'"));
}

#[test]
fn run_no_verify_skips_checks() {
    let dir = TempDir::new().unwrap();
    let file = write_temp(&dir, "dead.gleam", "PUSH 1\nRETURN\nHALT\n");

    gleam()
        .args(["run", file.as_str(), "--no-verify"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn run_missing_file_exits_1() {
    gleam()
        .args(["run", "nonexistent.gleam"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn run_payout_template_with_args() {
    let even = serialized_block(1_700_000_000_000);
    let odd = serialized_block(1_700_000_000_001);
    let template = contract("payout.tmpl");

    for (block, expected) in [(even, "bob\n"), (odd, "charlie\n")] {
        gleam()
            .arg("run")
            .arg(&template)
            .args(["--arg", format!("block={block}").as_str()])
            .args(["--arg", "even_addr=bob", "--arg", "odd_addr=charlie"])
            .assert()
            .success()
            .stdout(expected);
    }
}

// ---- Bind ----

#[test]
fn bind_writes_staged_file() {
    let dir = TempDir::new().unwrap();
    let template = write_temp(&dir, "pay.tmpl", "<to>\nRETURN\n");

    gleam()
        .args(["bind", template.as_str(), "--arg", "to=bob"])
        .assert()
        .success()
        .stderr(predicate::str::contains("bound 2 lines"));

    let staged = fs::read_to_string(dir.path().join("pay.gleam")).unwrap();
    assert_eq!(staged, "PUSHARG bob\nRETURN\n");
}

#[test]
fn bind_explicit_output() {
    let dir = TempDir::new().unwrap();
    let template = write_temp(&dir, "pay.tmpl", "<to>\nRETURN\n");
    let out = dir.path().join("sample.gleam");

    gleam()
        .args(["bind", template.as_str(), "--arg", "to=7", "-o", out.to_str().unwrap()])
        .assert()
        .success();

    gleam()
        .args(["run", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn bind_unbound_placeholder_exits_1() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("x.gleam");

    gleam()
        .args(["bind", contract("payout.tmpl").to_str().unwrap(), "-o"])
        .arg(&out)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unbound argument 'block'"));
    assert!(!out.exists());
}

#[test]
fn bind_refuses_to_overwrite_template() {
    let dir = TempDir::new().unwrap();
    let template = write_temp(&dir, "pay.gleam", "<to>\nRETURN\n");

    gleam()
        .args(["bind", template.as_str(), "--arg", "to=bob"])
        .assert()
        .failure()
        .code(1);
    assert_eq!(fs::read_to_string(&template).unwrap(), "<to>\nRETURN\n");
}

// ---- Check ----

#[test]
fn check_valid_program() {
    let dir = TempDir::new().unwrap();
    let file = write_temp(&dir, "ok.gleam", "start:\nPUSH 1\nJNZ start\nPUSH 0\nRETURN\n");

    gleam()
        .args(["check", file.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("(5 lines, 1 labels)"));
}

#[test]
fn check_reports_every_error() {
    let dir = TempDir::new().unwrap();
    let file = write_temp(&dir, "bad.gleam", "PUSH x\nJUMP nowhere\n");

    gleam()
        .args(["check", file.as_str()])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid integer literal 'x'"))
        .stderr(predicate::str::contains("unresolved label 'nowhere'"));
}

#[test]
fn check_malformed_line_exits_1() {
    let dir = TempDir::new().unwrap();
    let file = write_temp(&dir, "bad.gleam", "PUSH 1\nend: RETURN\n");

    gleam()
        .args(["check", file.as_str()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 2"));
}

// ---- Fmt ----

#[test]
fn fmt_prints_canonical_text() {
    let dir = TempDir::new().unwrap();
    let file = write_temp(&dir, "messy.gleam", "  # comment\n\nend:   \n   PUSH   3 # three\nRETURN\n");

    gleam()
        .args(["fmt", file.as_str()])
        .assert()
        .success()
        .stdout("end:\nPUSH 3\nRETURN\n");
}

// ---- Block ----

#[test]
fn block_is_a_single_token() {
    let block = serialized_block(42);
    assert!(!block.is_empty());
    assert!(!block.contains(char::is_whitespace));
}

#[test]
fn block_timestamp_reaches_the_vm() {
    let dir = TempDir::new().unwrap();
    let file = write_temp(&dir, "ts.gleam", "<b>\nTIMESTAMP\nRETURN\n");

    gleam()
        .args(["run", file.as_str(), "--arg", format!("b={}", serialized_block(1234)).as_str()])
        .assert()
        .success()
        .stdout("1234\n");
}

// ---- Logging ----

#[test]
fn verbose_flag_emits_debug_logs() {
    let dir = TempDir::new().unwrap();
    let file = write_temp(&dir, "add.gleam", "PUSH 1\nRETURN\n");

    gleam()
        .args(["-v", "run", file.as_str()])
        .assert()
        .success()
        .stdout("1\n")
        .stderr(predicate::str::contains("evaluation finished"));
}
