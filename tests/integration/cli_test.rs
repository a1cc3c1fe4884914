//! Integration tests for the tldemo binary

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::write_config;

fn tldemo() -> Command {
    let mut cmd = Command::cargo_bin("tldemo").expect("Failed to find tldemo binary");
    cmd.env_remove("TERMLIB_LOG");
    cmd
}

// ============================================================================
// Informational Flags
// ============================================================================

#[test]
fn help_exits_0_and_shows_options() {
    tldemo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--license"))
        .stdout(predicate::str::contains("--version"))
        .stdout(predicate::str::contains("--steps"));
}

#[test]
fn version_prints_name_and_version() {
    tldemo()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "tldemo {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn license_prints_agpl_notice() {
    tldemo()
        .arg("--license")
        .assert()
        .success()
        .stdout(predicate::str::contains("GNU Affero General Public License"));
}

#[test]
fn unknown_flag_exits_2() {
    tldemo()
        .arg("--nope")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--nope"));
}

// ============================================================================
// Demo Run
// ============================================================================

#[test]
fn demo_runs_to_completion_when_piped() {
    let (_dir, config) = write_config("[demo]\nsteps = 3\ndelay_ms = 0\n");
    tldemo()
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[2J\x1b[H"))
        .stdout(predicate::str::contains("Processing item 3 of 3..."))
        .stdout(predicate::str::contains("Progress: 100%"))
        .stdout(predicate::str::contains("Task completed!"))
        .stdout(predicate::str::ends_with("\x1b[0m\n"));
}

#[test]
fn steps_flag_overrides_config() {
    let (_dir, config) = write_config("[demo]\nsteps = 9\n");
    tldemo()
        .arg("--config")
        .arg(&config)
        .args(["--steps", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing item 2 of 2..."))
        .stdout(predicate::str::contains("of 9").not());
}

#[test]
fn piped_output_uses_fallback_height_for_progress() {
    let (_dir, config) = write_config("[demo]\nsteps = 1\n");
    tldemo()
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[24;1H"));
}

#[test]
fn invalid_config_exits_1_with_path() {
    let (_dir, config) = write_config("[demo\nsteps =");
    tldemo()
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load configuration"))
        .stderr(predicate::str::contains("config.toml"));
}

#[test]
fn missing_config_file_uses_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    tldemo()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["--steps", "1", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task completed!"));
}

#[test]
fn logs_go_to_stderr_not_stdout() {
    let (_dir, config) = write_config("[demo]\nsteps = 1\n");
    tldemo()
        .arg("--config")
        .arg(&config)
        .env("TERMLIB_LOG", "debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("demo finished").not())
        .stderr(predicate::str::contains("demo finished"));
}
