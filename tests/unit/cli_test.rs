//! Integration tests for the gloomlog CLI

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// A gloomlog command isolated from the user's config and saves
fn gloomlog(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("gloomlog"));
    cmd.current_dir(home)
        .env("HOME", home)
        .env_remove("GLOOMLOG_SAVE_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn saves(home: &Path) -> std::path::PathBuf {
    home.join("__gloomsave__")
}

fn seed(home: &Path, name: &str, current: &str, backup: Option<&str>) {
    let dir = saves(home);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{name}.json.gml")), current).unwrap();
    if let Some(backup) = backup {
        fs::write(dir.join(format!("{name}.json.gml.prev")), backup).unwrap();
    }
}

const ONE_EVENT: &str = r#"{"EnounterList":[{"type":"CityEvent","identifier":0,"choice":"A","unlockables":[]}]}"#;
const TWO_EVENTS: &str = r#"{"EnounterList":[{"type":"CityEvent","identifier":0,"choice":"A","unlockables":[]},{"type":"RoadEvent","identifier":3,"choice":"B","unlockables":[]}]}"#;

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    gloomlog(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gloomlog"));

    gloomlog(temp.path())
        .args(["version", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    gloomlog(temp.path())
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Campaign log for Gloomhaven"));
}

#[test]
fn test_long_help() {
    let temp = TempDir::new().unwrap();
    gloomlog(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Keep a log of everything your Gloomhaven party encounters.",
        ))
        .stdout(predicate::str::contains("--save-dir"));
}

#[test]
fn test_list_empty() {
    let temp = TempDir::new().unwrap();
    gloomlog(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No campaign saves"));
    assert!(!saves(temp.path()).exists());
}

#[test]
fn test_list_shows_saves() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), "alice", ONE_EVENT, None);
    seed(temp.path(), "bob", ONE_EVENT, Some(ONE_EVENT));

    gloomlog(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("alice").and(predicate::str::contains("bob")))
        .stdout(predicate::str::contains("(no backup)"));

    gloomlog(temp.path())
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"has_backup\": true"));
}

#[test]
fn test_show_prints_encounters() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), "alice", TWO_EVENTS, None);

    gloomlog(temp.path())
        .args(["show", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("City Event: 0.: A"))
        .stdout(predicate::str::contains("Road Event: 3.: B"));
}

#[test]
fn test_show_missing_save_fails() {
    let temp = TempDir::new().unwrap();
    gloomlog(temp.path())
        .args(["show", "nosuchsave"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("save not found: nosuchsave"));
}

#[test]
fn test_show_invalid_document_fails() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), "broken", "{", None);

    gloomlog(temp.path())
        .args(["show", "broken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid campaign"));
}

#[test]
fn test_save_dir_flag() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("elsewhere");
    fs::create_dir_all(&custom).unwrap();
    fs::write(custom.join("carol.json.gml"), ONE_EVENT).unwrap();

    gloomlog(temp.path())
        .arg("--save-dir")
        .arg(&custom)
        .args(["show", "carol"])
        .assert()
        .success()
        .stdout(predicate::str::contains("City Event: 0.: A"));
}

#[test]
fn test_save_dir_from_environment() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("env-saves");
    fs::create_dir_all(&custom).unwrap();
    fs::write(custom.join("dave.json.gml"), ONE_EVENT).unwrap();

    gloomlog(temp.path())
        .env("GLOOMLOG_SAVE_DIR", &custom)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("dave"));
}

#[test]
fn test_project_config_sets_save_dir() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("gloomlog.toml"),
        "[storage]\nsave_dir = \"campaigns\"\n",
    )
    .unwrap();

    gloomlog(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("save_dir = \"campaigns\""));
}

#[test]
fn test_invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("gloomlog.toml"), "[storage]\nbogus = 1\n").unwrap();

    gloomlog(temp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_status_reports_interrupted_write() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), "alice", ONE_EVENT, None);
    fs::write(saves(temp.path()).join("alice.json.gml.new"), "{").unwrap();

    gloomlog(temp.path())
        .args(["status", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Interrupted write detected"))
        .stdout(predicate::str::contains("discard incoming"));

    // status never changes the files
    assert!(saves(temp.path()).join("alice.json.gml.new").exists());
}

#[test]
fn test_repair_applies_plan() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), "alice", ONE_EVENT, None);
    fs::write(saves(temp.path()).join("alice.json.gml.old"), TWO_EVENTS).unwrap();

    gloomlog(temp.path())
        .args(["repair", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rename stale -> backup"));

    let backup = fs::read_to_string(saves(temp.path()).join("alice.json.gml.prev")).unwrap();
    assert_eq!(backup, TWO_EVENTS);

    gloomlog(temp.path())
        .arg("repair")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to repair."));
}

#[test]
fn test_restore_swaps_generations() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), "alice", TWO_EVENTS, Some(ONE_EVENT));

    gloomlog(temp.path())
        .args(["restore", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored 'alice'"));

    let dir = saves(temp.path());
    assert_eq!(fs::read_to_string(dir.join("alice.json.gml")).unwrap(), ONE_EVENT);
    assert_eq!(fs::read_to_string(dir.join("alice.json.gml.prev")).unwrap(), TWO_EVENTS);
}

#[test]
fn test_restore_without_backup_fails() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), "alice", ONE_EVENT, None);

    gloomlog(temp.path())
        .args(["restore", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no backup"));
}

#[test]
fn test_menu_reads_stdin() {
    let temp = TempDir::new().unwrap();

    gloomlog(temp.path())
        .write_stdin("n\nalice\ne\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bye!"));

    assert!(saves(temp.path()).join("alice.json.gml").exists());
}
