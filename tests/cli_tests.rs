use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn proptrade() -> Command {
    let mut cmd = Command::cargo_bin("proptrade").expect("binary built");
    cmd.env_remove("PROPTRADE_API_URL")
        .env_remove("PROPTRADE_USER_ID")
        .env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

/// A base URL nothing listens on; connections are refused immediately.
const DEAD_API: &str = "http://127.0.0.1:9";

#[test]
fn help_lists_subcommands() {
    proptrade()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("watch"))
        .stdout(predicate::str::contains("order"));
}

#[test]
fn show_without_id_prints_placeholder_view() {
    let dir = TempDir::new().unwrap();
    let output = proptrade()
        .args(["--json", "--config"])
        .arg(dir.path().join("absent.toml"))
        .arg("show")
        .output()
        .expect("run proptrade");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout
        .lines()
        .find(|line| line.contains("\"command\""))
        .expect("show emits a JSON document");
    let json: serde_json::Value = serde_json::from_str(line).unwrap();

    assert_eq!(json["view"]["state"], "fallback");
    assert_eq!(json["view"]["property"]["name"], "Property Title");
    assert_eq!(json["table"]["rows"].as_array().unwrap().len(), 5);
    assert_eq!(json["table"]["rows"][0]["rank"], 1);
}

#[test]
fn show_falls_back_when_api_is_unreachable() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        &format!("[api]\nbase_url = \"{DEAD_API}\"\nretry_max_attempts = 1\n"),
    );

    proptrade()
        .args(["--json", "--config"])
        .arg(&config)
        .args(["show", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"state\":\"fallback\""))
        .stdout(predicate::str::contains("Property Title"));
}

#[test]
fn human_show_renders_bid_table() {
    let dir = TempDir::new().unwrap();
    proptrade()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Top buy bids"))
        .stdout(predicate::str::contains("Property Location"));
}

#[test]
fn list_falls_back_to_featured_listings() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        &format!("[api]\nbase_url = \"{DEAD_API}\"\nretry_max_attempts = 1\n"),
    );

    proptrade()
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Los Angeles"))
        .stdout(predicate::str::contains("/property/1"));
}

#[test]
fn invalid_config_exits_nonzero_with_location() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[api]\ntimeout_ms = \"soon\"\n");

    let output = proptrade()
        .arg("--config")
        .arg(&config)
        .arg("list")
        .output()
        .expect("run proptrade");

    assert!(!output.status.success(), "Expected nonzero exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid configuration") && stderr.contains("timeout_ms"),
        "Expected a config diagnostic.\nstderr: {stderr}"
    );
}

#[test]
fn env_override_rejects_bad_url() {
    let dir = TempDir::new().unwrap();
    proptrade()
        .env("PROPTRADE_API_URL", "no scheme here")
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("api.base_url"));
}

#[test]
fn watch_in_json_mode_requires_yes() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &format!("[api]\nbase_url = \"{DEAD_API}\"\n"));

    proptrade()
        .args(["--json", "--config"])
        .arg(&config)
        .args(["watch", "add", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn watch_failure_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        &format!("[api]\nbase_url = \"{DEAD_API}\"\nretry_max_attempts = 1\n"),
    );

    proptrade()
        .arg("--config")
        .arg(&config)
        .args(["watch", "remove", "42", "--yes"])
        .assert()
        .failure();
}
