//! Basic CLI E2E tests.
//!
//! Tests invoke read-only CLI commands via cargo run and verify outputs.
//! They run against the dev data directory (LIFTPLAN_ENV=dev) and avoid
//! mutating commands so they stay order-independent.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "liftplan-cli", "--"])
        .args(args)
        .env("LIFTPLAN_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn help_succeeds() {
    let (stdout, _, code) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("workout planner"));
}

#[test]
fn template_list_names_all_five_entries() {
    let (stdout, _, code) = run_cli(&["template", "list"]);
    assert_eq!(code, 0);
    for key in [
        "cardio-warmup",
        "cardio-cooldown",
        "cardio-interval",
        "strength-set",
        "strength-rest",
    ] {
        assert!(stdout.contains(key), "missing template {key}");
    }
}

#[test]
fn template_show_json_exposes_strength_defaults() {
    let (stdout, _, code) = run_cli(&["template", "show", "strength-set", "--json"]);
    assert_eq!(code, 0);
    let block: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON block");
    assert_eq!(block["type"], "strength");
    assert_eq!(block["subtype"], "set");
    assert_eq!(block["reps"], 10);
    assert_eq!(block["weight"], 100);
}

#[test]
fn template_show_json_exposes_interval_defaults() {
    let (stdout, _, code) = run_cli(&["template", "show", "cardio-interval", "--json"]);
    assert_eq!(code, 0);
    let block: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON block");
    assert_eq!(block["type"], "cardio");
    assert_eq!(block["duration"], 4);
    assert_eq!(block["zone"], 1);
}

#[test]
fn unknown_template_fails() {
    let (_, stderr, code) = run_cli(&["template", "show", "cardio-sprint"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown template"));
}
