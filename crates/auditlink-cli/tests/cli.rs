//! End-to-end tests for the `auditlink` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ENV_VARS: &[&str] = &[
    "AUDIT_GATEWAY_URL",
    "SERVICE_NAME",
    "AUDIT_ENABLED",
    "AUDIT_TIMEOUT",
    "AUDIT_MASK_PII",
    "AUDIT_MAX_PAYLOAD_BYTES",
    "AUDITLINK_CONFIG",
    "AUDITLINK_LOG_FILE",
    "ENVIRONMENT",
    "AUDITLINK_LOG_LEVEL",
    "RUST_LOG",
];

/// Command running in an empty directory with a clean audit environment.
fn auditlink(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("auditlink").unwrap();
    cmd.current_dir(dir.path());
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    auditlink(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("page-view"))
        .stdout(predicate::str::contains("envelope"));
}

#[test]
fn test_envelope_applies_defaults() {
    let dir = TempDir::new().unwrap();
    auditlink(&dir)
        .args(["envelope", "doc.read", "read"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""service": "unknown-service""#))
        .stdout(predicate::str::contains(r#""actor_id": "anonymous""#))
        .stdout(predicate::str::contains(r#""actor_type": "system""#))
        .stdout(predicate::str::contains(r#""event_category": "general""#))
        .stdout(predicate::str::contains("resource_type").not());
}

#[test]
fn test_envelope_uses_config_file_and_flags() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join(".auditlink")).unwrap();
    fs::write(
        dir.path().join(".auditlink/config.yaml"),
        "service_name: billing\ngateway_url: http://gateway.internal\n",
    )
    .unwrap();

    auditlink(&dir)
        .args(["envelope", "invoice.pay", "pay", "--actor", "u-9", "--outcome", "blocked"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""service": "billing""#))
        .stdout(predicate::str::contains(r#""actor_type": "user""#))
        .stdout(predicate::str::contains(r#""outcome": "blocked""#));

    auditlink(&dir)
        .args(["--service-name", "ledger", "envelope", "invoice.pay", "pay"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""service": "ledger""#));
}

#[test]
fn test_env_file_settings_are_used() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "SERVICE_NAME=from-dotenv\n").unwrap();

    auditlink(&dir)
        .args(["envelope", "doc.read", "read"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""service": "from-dotenv""#));
}

#[test]
fn test_malformed_env_file_warns_and_continues() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "NOT A VALID LINE\n").unwrap();

    auditlink(&dir)
        .args(["envelope", "doc.read", "read"])
        .assert()
        .success()
        .stderr(predicate::str::contains("failed to load .env files"))
        .stdout(predicate::str::contains(r#""service": "unknown-service""#));
}

#[test]
fn test_disabled_emission_sends_nothing() {
    let dir = TempDir::new().unwrap();
    auditlink(&dir)
        .env("AUDIT_ENABLED", "false")
        .args(["--gateway-url", "http://127.0.0.1:1", "login", "u-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("disabled"));
}

#[test]
fn test_invalid_gateway_is_config_error() {
    let dir = TempDir::new().unwrap();
    auditlink(&dir)
        .env("AUDIT_GATEWAY_URL", "ftp://gateway.internal")
        .args(["envelope", "doc.read", "read"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_explicit_config_is_config_error() {
    let dir = TempDir::new().unwrap();
    auditlink(&dir)
        .args(["--config", "absent.yaml", "envelope", "doc.read", "read"])
        .assert()
        .code(2);
}

#[test]
fn test_unreachable_gateway_exits_with_network_code() {
    let dir = TempDir::new().unwrap();
    auditlink(&dir)
        .args(["--gateway-url", "http://127.0.0.1:1", "login", "u-1", "--ip", "10.0.0.1"])
        .assert()
        .code(4)
        .stdout(predicate::str::contains("transport error"));
}

#[test]
fn test_malformed_payload_is_usage_error() {
    let dir = TempDir::new().unwrap();
    auditlink(&dir)
        .args(["event", "doc.read", "read", "--payload", "{not json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("JSON object"));
}
