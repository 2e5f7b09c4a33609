//! Integration tests for top-level CLI behavior.
//!
//! These tests never reach a workspace: they either exercise argument
//! parsing or stop at provider configuration by leaving credential
//! variables unset.

use std::process::Command;

/// Environment variables the binary reads; cleared before each run so the
/// parent environment cannot leak in.
const ENV_VARS: &[&str] = &[
    "DBFS_CLIENT_ID",
    "DBFS_CLIENT_SECRET",
    "DBFS_SUBSCRIPTION_ID",
    "DBFS_TENANT_ID",
    "DBFS_ADB_ID",
    "DBFS_TOKEN",
];

fn run_dbfsctl(args: &[&str], env: &[(&str, &str)]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_dbfsctl");
    let mut command = Command::new(bin);
    for var in ENV_VARS {
        command.env_remove(var);
    }
    // Run from a scratch directory so no .env file is picked up.
    let cwd = std::env::temp_dir();
    command.current_dir(cwd).args(args).envs(env.iter().copied());
    command.output().expect("failed to run dbfsctl binary")
}

fn full_env() -> Vec<(&'static str, &'static str)> {
    vec![
        ("DBFS_CLIENT_ID", "client"),
        ("DBFS_CLIENT_SECRET", "secret"),
        ("DBFS_SUBSCRIPTION_ID", "sub"),
        ("DBFS_TENANT_ID", "tenant"),
        ("DBFS_ADB_ID", "https://adb.example.invalid"),
        ("DBFS_TOKEN", "token"),
    ]
}

#[test]
fn no_arguments_shows_usage() {
    let output = run_dbfsctl(&[], &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Usage") || stderr.contains("usage"));
}

#[test]
fn help_lists_subcommands() {
    let output = run_dbfsctl(&["--help"], &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("list"));
    assert!(stdout.contains("push"));
    assert!(stdout.contains("remove"));
}

#[test]
fn missing_workspace_url_is_reported() {
    let output = run_dbfsctl(&["list", "/FileStore"], &[("DBFS_TOKEN", "token")]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("DBFS_ADB_ID"));
}

#[test]
fn missing_credentials_produce_attribute_diagnostics() {
    let output = run_dbfsctl(
        &["list", "/FileStore"],
        &[("DBFS_ADB_ID", "https://adb.example.invalid"), ("DBFS_TOKEN", "token")],
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    // One attribute-scoped diagnostic per missing credential field.
    assert!(stderr.contains("clientid"));
    assert!(stderr.contains("clientsecret"));
    assert!(stderr.contains("subscriptionid"));
    assert!(stderr.contains("tenantid"));
}

#[test]
fn empty_credential_field_is_one_diagnostic() {
    let mut env = full_env();
    env[0] = ("DBFS_CLIENT_ID", "");
    let output = run_dbfsctl(&["list", "/FileStore"], &env);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Missing clientid"));
    assert!(!stderr.contains("Missing tenantid"));
}

#[test]
fn list_swallows_transport_errors_and_prints_nothing() {
    let mut env = full_env();
    env[4] = ("DBFS_ADB_ID", "http://127.0.0.1:9");
    let output = run_dbfsctl(&["list", "/FileStore"], &env);
    let stdout = String::from_utf8_lossy(&output.stdout);
    // An unreachable workspace degrades to an empty listing, not a failure.
    assert!(output.status.success());
    assert!(stdout.trim().is_empty());
}

#[test]
fn remove_without_state_fails_before_any_call() {
    let output = run_dbfsctl(&["remove", "/tmp/dbfsctl-never-pushed.jar"], &full_env());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("no state for"));
}

#[test]
fn push_help_documents_md5_flag() {
    let output = run_dbfsctl(&["push", "--help"], &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--content-md5"));
}
