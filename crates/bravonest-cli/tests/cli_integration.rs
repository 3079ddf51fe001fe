//! CLI Integration Tests
//!
//! Run the `bravonest` binary end-to-end against temporary config files.
//! No test configures a relay that would reach the network.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

const RELAY_VARS: [&str; 4] = [
    "BRAVONEST_FORMSUBMIT_ENDPOINT",
    "BRAVONEST_EMAILJS_SERVICE_ID",
    "BRAVONEST_EMAILJS_TEMPLATE_ID",
    "BRAVONEST_EMAILJS_PUBLIC_KEY",
];

/// A CLI command with relay overrides cleared from the environment
fn cli_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bravonest").expect("Failed to find bravonest binary");
    for var in RELAY_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Write `contents` to a config file inside `dir`
fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("site.toml");
    fs::write(&path, contents).unwrap();
    path
}

const MAILTO_ONLY: &str = r#"
[contact]
recipient = "hello@example.com"
site_name = "Example Studio"
"#;

// ============================================================================
// check-config
// ============================================================================

#[test]
fn test_help_lists_commands() {
    cli_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check-config"))
        .stdout(predicate::str::contains("preview"))
        .stdout(predicate::str::contains("send"));
}

#[test]
fn test_check_config_defaults() {
    cli_cmd()
        .arg("check-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Source: built-in defaults"))
        .stdout(predicate::str::contains("Recipient: support@bravonest.lk"))
        .stdout(predicate::str::contains("1. formsubmit (not configured)"))
        .stdout(predicate::str::contains("3. mailto (always available)"))
        .stdout(predicate::str::contains("Config OK"));
}

#[test]
fn test_check_config_reports_configured_relay() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[contact]
recipient = "hello@example.com"

[relay.formsubmit]
endpoint = "https://formsubmit.co/ajax/hello@example.com"

[effects]
typing_speed_ms = 50
"#,
    );

    cli_cmd()
        .arg("--config")
        .arg(&path)
        .arg("check-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipient: hello@example.com"))
        .stdout(predicate::str::contains("1. formsubmit (configured)"))
        .stdout(predicate::str::contains("2. emailjs (not configured)"))
        .stdout(predicate::str::contains("typing_speed_ms: 50"));
}

#[test]
fn test_env_override_configures_emailjs() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, MAILTO_ONLY);

    cli_cmd()
        .env("BRAVONEST_EMAILJS_SERVICE_ID", "service_1")
        .env("BRAVONEST_EMAILJS_TEMPLATE_ID", "template_1")
        .env("BRAVONEST_EMAILJS_PUBLIC_KEY", "key_1")
        .arg("--config")
        .arg(&path)
        .arg("check-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("2. emailjs (configured)"));
}

#[test]
fn test_check_config_rejects_bad_recipient() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[contact]\nrecipient = \"not-an-address\"\n");

    cli_cmd()
        .arg("--config")
        .arg(&path)
        .arg("check-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_check_config_rejects_out_of_range_ease() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[effects]\ncursor_ease = 1.5\n");

    cli_cmd()
        .arg("--config")
        .arg(&path)
        .arg("check-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cursor_ease"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("check-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

// ============================================================================
// preview
// ============================================================================

#[test]
fn test_preview_project() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, MAILTO_ONLY);

    cli_cmd()
        .arg("--config")
        .arg(&path)
        .args([
            "preview",
            "project",
            "--name",
            "Ada Lovelace",
            "--email",
            "ada@example.com",
            "--type",
            "pcb",
            "--description",
            "Four-layer board for a sensor hub",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("To: hello@example.com"))
        .stdout(predicate::str::contains("Reply-To: Ada Lovelace <ada@example.com>"))
        .stdout(predicate::str::contains("Subject: Project Call Request - PCB Design Only"))
        .stdout(predicate::str::contains("Preferred Time Window: Not specified"))
        .stdout(predicate::str::contains("sent from the Example Studio website"))
        .stdout(predicate::str::contains("mailto:hello@example.com?subject=Project%20Call%20Request"));
}

#[test]
fn test_preview_course_with_message() {
    cli_cmd()
        .args([
            "preview",
            "course",
            "--name",
            "Grace",
            "--email",
            "grace@example.com",
            "--course",
            "embedded",
            "--message",
            "Weekend batch?",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subject: Course Enquiry - Embedded Systems Starter"))
        .stdout(predicate::str::contains("Weekend batch?"));
}

#[test]
fn test_preview_reports_missing_fields() {
    cli_cmd()
        .args(["preview", "course", "--email", "grace@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Full name is required."))
        .stderr(predicate::str::contains("Course is required."))
        .stderr(predicate::str::contains("Please fill in all required fields."));
}

#[test]
fn test_preview_reports_invalid_email() {
    cli_cmd()
        .args([
            "preview",
            "project",
            "--name",
            "Ada",
            "--email",
            "ada-at-example",
            "--type",
            "software",
            "--description",
            "App",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid email address."));
}

#[test]
fn test_preview_rejects_unknown_course() {
    cli_cmd()
        .args([
            "preview",
            "course",
            "--name",
            "Grace",
            "--email",
            "grace@example.com",
            "--course",
            "basket-weaving",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Select a course."));
}

// ============================================================================
// send
// ============================================================================

#[test]
fn test_send_without_relays_hands_off_to_mailto() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, MAILTO_ONLY);

    cli_cmd()
        .arg("--config")
        .arg(&path)
        .args([
            "send",
            "course",
            "--name",
            "Grace",
            "--email",
            "grace@example.com",
            "--course",
            "programming",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Open in your mail client:"))
        .stdout(predicate::str::contains("mailto:hello@example.com?subject=Course%20Enquiry"))
        .stdout(predicate::str::contains("handed off via mailto"));
}

#[test]
fn test_send_invalid_form_never_dispatches() {
    cli_cmd()
        .args(["send", "project", "--name", "Ada"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("mailto:").not())
        .stderr(predicate::str::contains("Invalid enquiry"));
}
