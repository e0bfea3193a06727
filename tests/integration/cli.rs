//! Integration tests for the chatdeck binary

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{NamedTempFile, TempDir};

use super::common::determinism::setup_deterministic_env;

fn chatdeck(data_dir: &TempDir) -> Command {
    setup_deterministic_env();
    let mut cmd = Command::cargo_bin("chatdeck").expect("binary should build");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn test_show_prints_initial_state() {
    let dir = TempDir::new().unwrap();

    chatdeck(&dir)
        .args(["--memory", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""theme": "light""#))
        .stdout(predicate::str::contains(r#""breakpoint": "desktop""#));

    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn test_apply_reads_stdin_and_skips_bad_lines() {
    let dir = TempDir::new().unwrap();
    let input = concat!(
        r#"{"type":"set_theme","payload":"dark"}"#,
        "\n",
        "not json\n",
        "\n",
        r#"{"type":"update_viewport_size","payload":{"width":500,"height":900}}"#,
        "\n",
    );

    chatdeck(&dir)
        .args(["--memory", "apply"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""theme": "dark""#))
        .stdout(predicate::str::contains(r#""breakpoint": "mobile""#))
        .stderr(predicate::str::contains("line 2: invalid action"));
}

#[test]
fn test_apply_persists_to_sqlite_between_runs() {
    let dir = TempDir::new().unwrap();
    let mut actions = NamedTempFile::new().unwrap();
    writeln!(actions, r#"{{"type":"set_language","payload":"it"}}"#).unwrap();

    chatdeck(&dir)
        .arg("apply")
        .arg(actions.path())
        .assert()
        .success();

    assert!(dir.path().join("chatdeck.db").exists());

    chatdeck(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""language": "it""#));
}

#[test]
fn test_viewport_flags() {
    let dir = TempDir::new().unwrap();

    chatdeck(&dir)
        .args(["--memory", "--width", "800", "--height", "600", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""breakpoint": "tablet""#));
}

#[test]
fn test_missing_action_file_fails() {
    let dir = TempDir::new().unwrap();

    chatdeck(&dir)
        .args(["--memory", "apply"])
        .arg(dir.path().join("nope.jsonl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open"));
}
