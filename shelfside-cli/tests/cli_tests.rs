//! Integration tests for the Shelfside CLI
//!
//! Everything here stays offline: only commands that never touch the
//! remote catalog are exercised, against a throwaway data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shelfside-cli").unwrap();
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("shelfside-cli").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("recommend"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("borrow"))
        .stdout(predicate::str::contains("login"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("shelfside-cli").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shelfside"));
}

#[test]
fn test_search_help() {
    let mut cmd = Command::cargo_bin("shelfside-cli").unwrap();
    cmd.args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search the shared catalog"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_commands_require_a_session() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_login_rejects_bad_credentials() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["login", "user123", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid credentials"));
}

#[test]
fn test_login_then_list_then_logout() {
    let dir = TempDir::new().unwrap();

    cli(&dir)
        .args(["login", "user123", "vit1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, User"));

    cli(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found."));

    cli(&dir)
        .args(["logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."));

    cli(&dir)
        .args(["logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No active session."));
}

#[test]
fn test_admin_login_greets_administrator() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["login", "user789", "vit2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, Administrator"));
}

#[test]
fn test_add_list_remove_flow() {
    let dir = TempDir::new().unwrap();

    cli(&dir)
        .args(["--role", "user", "add", "Dune", "Frank Herbert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added \"Dune\" by Frank Herbert (id 1)."));

    cli(&dir)
        .args(["--role", "user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("Available"));

    cli(&dir)
        .args(["--role", "user", "remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed book 1."));

    cli(&dir)
        .args(["--role", "user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found."));
}

#[test]
fn test_duplicate_and_empty_adds_are_reported_distinctly() {
    let dir = TempDir::new().unwrap();

    cli(&dir)
        .args(["--role", "user", "add", "Dune", "Frank Herbert"])
        .assert()
        .success();

    cli(&dir)
        .args(["--role", "user", "add", "DUNE", "frank herbert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already in the collection"));

    cli(&dir)
        .args(["--role", "user", "add", "Dune", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("both required"));
}

#[test]
fn test_borrow_and_return_flow() {
    let dir = TempDir::new().unwrap();

    cli(&dir)
        .args(["--role", "user", "add", "Dune", "Frank Herbert"])
        .assert()
        .success();

    cli(&dir)
        .args(["--role", "user", "borrow", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book 1 marked as borrowed."));

    cli(&dir)
        .args(["--role", "user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Borrowed"));

    cli(&dir)
        .args(["--role", "user", "return", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book 1 marked as available."));

    cli(&dir)
        .args(["--role", "user", "borrow", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No book with id 99"));
}

#[test]
fn test_admin_and_user_collections_are_separate() {
    let dir = TempDir::new().unwrap();

    cli(&dir)
        .args(["--role", "admin", "add", "Dune", "Frank Herbert"])
        .assert()
        .success();

    // The user's personal library does not show the shared entry
    cli(&dir)
        .args(["--role", "user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found."));

    cli(&dir)
        .args(["--role", "admin", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"));
}

#[test]
fn test_import_forces_available_and_dedups() {
    let dir = TempDir::new().unwrap();

    cli(&dir)
        .args([
            "--role",
            "user",
            "import",
            "Dune",
            "Frank Herbert",
            "--cover",
            "https://covers.openlibrary.org/b/id/44-M.jpg",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported \"Dune\""));

    cli(&dir)
        .args(["--role", "user", "import", "dune", "FRANK HERBERT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already in your library"));

    cli(&dir)
        .args(["--role", "user", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"coverImage\""))
        .stdout(predicate::str::contains("\"status\": \"Available\""));
}

#[test]
fn test_list_filter_matches_title_or_author() {
    let dir = TempDir::new().unwrap();

    cli(&dir)
        .args(["--role", "user", "add", "Dune", "Frank Herbert"])
        .assert()
        .success();
    cli(&dir)
        .args(["--role", "user", "add", "Emma", "Jane Austen"])
        .assert()
        .success();

    cli(&dir)
        .args(["--role", "user", "list", "--filter", "austen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emma"))
        .stdout(predicate::str::contains("Dune").not());
}

#[test]
fn test_data_dir_env_fallback() {
    let dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("shelfside-cli").unwrap();
    cmd.env("SHELFSIDE_DATA_DIR", dir.path())
        .args(["--role", "user", "add", "Dune", "Frank Herbert"])
        .assert()
        .success();

    let mut cmd = Command::cargo_bin("shelfside-cli").unwrap();
    cmd.env("SHELFSIDE_DATA_DIR", dir.path())
        .args(["--role", "user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"));
}

#[test]
fn test_unknown_role_is_rejected() {
    let dir = TempDir::new().unwrap();
    cli(&dir)
        .args(["--role", "librarian", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown role"));
}
