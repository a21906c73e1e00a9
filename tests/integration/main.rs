//! Integration tests for gloomlog CLI
//!
//! These tests simulate real campaigns end to end: the interactive menu
//! writes saves, the subcommands read and repair them.


use assert_cmd::cargo;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper function to create a gloomlog command isolated in `home`
fn gloomlog(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("gloomlog"));
    cmd.current_dir(home)
        .env("HOME", home)
        .env_remove("GLOOMLOG_SAVE_DIR")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to feed the menu one answer per line
fn menu(home: &Path, answers: &[&str]) -> assert_cmd::assert::Assert {
    let mut input = answers.join("\n");
    input.push('\n');
    gloomlog(home).write_stdin(input).assert()
}

fn save_dir(home: &Path) -> PathBuf {
    home.join("__gloomsave__")
}

// =============================================================================
// END-TO-END WORKFLOW TESTS
// =============================================================================

/// Create a campaign, log a scenario, then read it back
#[test]
fn test_e2e_campaign_workflow() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    // Step 1: Create a campaign and log a scenario with an unlock
    menu(
        home,
        &[
            "new", "Gloom", "add", "scenario", "1", "Black Barrow", "G", "10", "yes", "yes",
            "scenario", "2", "Barrow Lair", "G", "11", "no", "exit",
        ],
    )
    .success()
    .stdout(predicate::str::contains(
        "What would you like to do with campaign save 'gloom'?",
    ));

    // Step 2: The save is listed with its backup
    gloomlog(home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("gloom"))
        .stdout(predicate::str::contains("(no backup)").not());

    // Step 3: The log reads back in order
    gloomlog(home)
        .args(["show", "gloom"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "City Event: 0.: A\nScenario: 1. Black Barrow (G-10): success\n+ Scenario: 2. Barrow Lair (G-11)\n",
        ));

    // Step 4: Load it again and log a treasure
    menu(home, &["load", "gloom", "add", "treasure", "7", "no", "list", "exit"])
        .success()
        .stdout(predicate::str::contains("Treasure: 7."));

    // Step 5: JSON output carries the whole document
    gloomlog(home)
        .args(["show", "gloom", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"EnounterList\""))
        .stdout(predicate::str::contains("\"type\": \"Treasure\""));

    // Step 6: Restore undoes the treasure
    gloomlog(home).args(["restore", "gloom"]).assert().success();
    gloomlog(home)
        .args(["show", "gloom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Treasure").not());
}

/// Two campaigns live side by side
#[test]
fn test_e2e_two_campaigns() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    menu(home, &["n", "first", "e"]).success();
    menu(home, &["n", "first", "second", "e"])
        .success()
        .stdout(predicate::str::contains("Save already exists."));

    gloomlog(home)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"first\""))
        .stdout(predicate::str::contains("\"second\""));
    assert!(save_dir(home).join("second.json.gml").exists());
}
