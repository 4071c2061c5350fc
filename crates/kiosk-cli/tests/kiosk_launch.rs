use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_kiosk_refuses_to_run_without_a_terminal() {
    let dir = tempdir().unwrap();

    // Test harness stdio is piped, so the terminal check fires before
    // any screen setup happens.
    cargo_bin_cmd!("kiosk")
        .env("KIOSK_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}

#[test]
fn test_invalid_theme_override_is_rejected() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("kiosk")
        .env("KIOSK_HOME", dir.path())
        .args(["--theme", "sepia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid theme 'sepia'"));
}

#[test]
fn test_malformed_config_is_reported() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "theme = 42\n").unwrap();

    cargo_bin_cmd!("kiosk")
        .env("KIOSK_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("load config"));
}
