//! End-to-end tests running the `lookup-bench` binary
//!
//! Everything except the full default run fails or exits before the
//! benchmark starts, so these stay fast in debug builds.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

const ENV_VARS: [&str; 4] = ["BENCH_SEED", "ENABLE_COLOR", "SHOW_CHART", "CHART_FONT"];

/// Helper function to create a test command with a clean environment
fn create_test_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lookup-bench").unwrap();
    cmd.current_dir(dir.path());
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help_lists_options() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--seed"))
        .stdout(predicate::str::contains("--no-show"))
        .stdout(predicate::str::contains("--font"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_seed_env_exits_with_config_code() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .env("BENCH_SEED", "not-a-number")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("BENCH_SEED"));
}

#[test]
fn test_invalid_env_file_value() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".env"), "SHOW_CHART=maybe\n").unwrap();

    create_test_cmd(&dir)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("SHOW_CHART"));

    assert!(!dir.path().join("performance_comparison.png").exists());
}

#[test]
fn test_conflicting_color_flags() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .args(["--color", "--no-color"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--color"));
}

#[test]
fn test_missing_font_file() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .args(["--no-show", "--font", "missing-font.ttf"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing-font.ttf"));
}

#[test]
fn test_error_report_honors_env_color_setting() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .env("ENABLE_COLOR", "false")
        .env("FORCE_COLOR", "1")
        .env("CLICOLOR_FORCE", "1")
        .args(["--no-show", "--font", "missing-font.ttf"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_unknown_flag_rejected() {
    let dir = TempDir::new().unwrap();
    create_test_cmd(&dir)
        .arg("--sizes")
        .assert()
        .failure();
}

/// Full default run: every size up to 50000 with the quadratic matcher
#[test]
#[ignore = "runs the complete benchmark; slow without optimizations"]
fn test_full_run_saves_chart() {
    let dir = TempDir::new().unwrap();
    let cwd = dir.path().canonicalize().unwrap();

    create_test_cmd(&dir)
        .args(["--no-show", "--no-color", "--seed", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Graph saved as 'performance_comparison.png' in {}",
            cwd.display()
        )));

    assert!(dir.path().join("performance_comparison.png").is_file());
}
