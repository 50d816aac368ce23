use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn convoy() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("convoy");
    // Keep the host environment out of resolution tests.
    cmd.env_remove("CONVOY_CONSUL_LOCATION");
    cmd
}

// ── Help / Version ──

#[test]
fn help_lists_every_option() {
    convoy()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--consul-location"))
        .stdout(predicate::str::contains("--envoy-version"))
        .stdout(predicate::str::contains("CONVOY_CONSUL_LOCATION"));
}

#[test]
fn short_help_works_too() {
    convoy()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("--consul-location"));
}

#[test]
fn shows_version() {
    convoy()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("convoy"));
}

// ── Configuration resolution ──

#[test]
fn fails_without_consul_location() {
    convoy()
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "consul source location must be supplied",
        ));
}

#[test]
fn env_var_supplies_the_location() {
    // The location resolves via the env var, then the pipeline rejects it
    // because nothing exists there: resolution itself succeeded.
    convoy()
        .env("CONVOY_CONSUL_LOCATION", "/nonexistent/env-consul")
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/env-consul"))
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn flag_beats_env_var() {
    convoy()
        .env("CONVOY_CONSUL_LOCATION", "/nonexistent/env-consul")
        .args(["--consul-location", "/nonexistent/flag-consul"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/flag-consul"));
}

#[test]
fn short_flag_is_accepted() {
    convoy()
        .args(["-c", "/nonexistent/short-consul"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/short-consul"));
}
