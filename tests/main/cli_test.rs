//! CLI contract tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assurance_toolkit::mock::SharedStateMock;
use assurance_toolkit::mobile::versions;
use serde_json::json;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("assurance-validate").expect("binary should build");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_session(dir: &Path, with_edge: bool) -> PathBuf {
    let extensions = if with_edge {
        json!({ "com.adobe.edge": { "version": "1.0.0" } })
    } else {
        json!({})
    };
    let event = SharedStateMock::new("client-1")
        .owner(versions::EVENT_HUB_OWNER)
        .state("extensions", extensions)
        .build();
    let session = json!({ "events": [event], "connections": [], "settings": {} });

    let path = dir.join("session.json");
    std::fs::write(&path, session.to_string()).expect("write session");
    path
}

fn write_empty_config(dir: &Path) -> PathBuf {
    let path = dir.join("validators.toml");
    std::fs::write(&path, "").expect("write config");
    path
}

#[test]
fn list_prints_every_validator() {
    let output = cmd().arg("list").output().expect("run list");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in assurance_validators::validators::names() {
        assert!(stdout.contains(name), "missing {name}");
    }
}

#[test]
fn run_matched_validator_exits_zero() {
    let dir = tempfile::tempdir().expect("tempdir");
    let session = write_session(dir.path(), true);
    let config = write_empty_config(dir.path());

    let output = cmd()
        .arg("run")
        .arg(&session)
        .args(["--validator", "edge-installed", "--config"])
        .arg(&config)
        .output()
        .expect("run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Edge extension was registered."));
}

#[test]
fn run_not_matched_exits_one_with_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let session = write_session(dir.path(), false);
    let config = write_empty_config(dir.path());

    let output = cmd()
        .arg("run")
        .arg(&session)
        .args(["--validator", "edge-installed", "--format", "json", "--config"])
        .arg(&config)
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));

    let verdicts: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(verdicts[0]["validator"], "edge-installed");
    assert_eq!(verdicts[0]["result"], "not matched");
    assert_eq!(verdicts[0]["events"].as_array().map(Vec::len), Some(1));
}

#[test]
fn run_rejects_unknown_validator() {
    let dir = tempfile::tempdir().expect("tempdir");
    let session = write_session(dir.path(), true);
    let config = write_empty_config(dir.path());

    let output = cmd()
        .arg("run")
        .arg(&session)
        .args(["--validator", "nope", "--config"])
        .arg(&config)
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown validator 'nope'"));
}

#[test]
fn run_reports_missing_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = write_empty_config(dir.path());

    let output = cmd()
        .arg("run")
        .arg(dir.path().join("absent.json"))
        .arg("--config")
        .arg(&config)
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load session"));
}

#[test]
fn invalid_config_exits_two() {
    let dir = tempfile::tempdir().expect("tempdir");
    let session = write_session(dir.path(), true);
    let config = dir.path().join("validators.toml");
    std::fs::write(&config, "[output]\nformat = \"yaml\"\n").expect("write config");

    let output = cmd()
        .arg("run")
        .arg(&session)
        .arg("--config")
        .arg(&config)
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
