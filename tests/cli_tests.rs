//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn poyo(store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("poyo").unwrap();
    cmd.env("POYO_STORE", store).env_remove("RUST_LOG");
    cmd
}

fn temp_store() -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("aliases").join("poyo.yaml");
    (temp_dir, store)
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("poyo").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("poyo"));
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("poyo").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("A CLI shortcut manager"));
}

#[test]
fn test_no_subcommand_prints_usage() {
    let (_temp_dir, store) = temp_store();
    poyo(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
    assert!(!store.exists());
}

#[test]
fn test_add_then_list() {
    let (_temp_dir, store) = temp_store();

    poyo(&store)
        .args(["add", "greet", "echo hello {name}"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: 'greet'"));

    assert!(fs::read_to_string(&store).unwrap().contains("echo hello {name}"));

    poyo(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved Commands:"))
        .stdout(predicate::str::contains("greet \u{2192} echo hello {name}"));
}

#[test]
fn test_list_empty() {
    let (_temp_dir, store) = temp_store();
    poyo(&store)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved commands yet."));
}

#[test]
fn test_duplicate_add_is_reported_not_fatal() {
    let (_temp_dir, store) = temp_store();
    poyo(&store).args(["add", "k", "echo one"]).assert().success();

    poyo(&store)
        .args(["add", "k", "echo two"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Key 'k' already exists"));

    assert!(fs::read_to_string(&store).unwrap().contains("echo one"));
}

#[test]
fn test_update_and_delete() {
    let (_temp_dir, store) = temp_store();
    poyo(&store).args(["add", "k", "echo one"]).assert().success();

    poyo(&store)
        .args(["update", "k", "echo two"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated 'k'"));

    poyo(&store)
        .args(["delete", "k"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 'k'"));

    poyo(&store)
        .args(["delete", "k"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No command found for 'k'."));
}

#[test]
fn test_update_missing_suggests_add() {
    let (_temp_dir, store) = temp_store();
    poyo(&store)
        .args(["update", "k", "echo two"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No command found for 'k'. Use 'poyo add' to create one.",
        ));
    assert!(!store.exists());
}

#[test]
fn test_run_missing_alias() {
    let (_temp_dir, store) = temp_store();
    poyo(&store)
        .args(["run", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No command found for 'nope'."));
}

#[cfg(unix)]
#[test]
fn test_run_with_explicit_value() {
    let (_temp_dir, store) = temp_store();
    poyo(&store)
        .args(["add", "greet", "echo hello {name}"])
        .assert()
        .success();

    poyo(&store)
        .args(["run", "greet", "name=World"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Running: echo hello World"))
        .stdout(predicate::str::contains("Enter value").not());
}

#[cfg(unix)]
#[test]
fn test_run_prompts_for_missing_value() {
    let (_temp_dir, store) = temp_store();
    poyo(&store)
        .args(["add", "greet", "echo hello {name}"])
        .assert()
        .success();

    poyo(&store)
        .args(["run", "greet"])
        .write_stdin("Ana\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter value for 'name': "))
        .stdout(predicate::str::contains("hello Ana"));
}

#[cfg(unix)]
#[test]
fn test_run_reports_exit_status_without_failing() {
    let (_temp_dir, store) = temp_store();
    poyo(&store).args(["add", "boom", "exit {code}"]).assert().success();

    poyo(&store)
        .args(["run", "boom", "code=7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exited with status 7"));
}

#[test]
fn test_run_malformed_template_fails() {
    let (_temp_dir, store) = temp_store();
    poyo(&store).args(["add", "bad", "echo {name"]).assert().success();

    poyo(&store)
        .args(["run", "bad"])
        .write_stdin("never read\n")
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("Malformed template"))
        .stdout(predicate::str::contains("Enter value").not());
}

#[test]
fn test_store_flag_overrides_env() {
    let (temp_dir, store) = temp_store();
    let other = temp_dir.path().join("other.yaml");

    poyo(&store)
        .args(["--store", other.to_str().unwrap(), "add", "k", "echo x"])
        .assert()
        .success();

    assert!(other.exists());
    assert!(!store.exists());
}
