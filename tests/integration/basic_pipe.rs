//! Integration tests for basic stdin->stdout piping.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn tracefmt() -> Command {
    let mut cmd = Command::cargo_bin("tracefmt").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/tracefmt-test-no-config");
    cmd
}

#[test]
fn empty_stdin_exits_zero() {
    tracefmt().write_stdin("").assert().success().stdout("");
}

#[test]
fn entry_with_annotations() {
    let input = "2024-01-02T03:04:05.123456Z INFO worker-1 (span1){k=v}: hello world\n";
    tracefmt()
        .args(["--color=never", "--width=120"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(
            "2024-01-02T03:04:05.123456Z INFO  worker-1         hello world (span1){k=v}: \n",
        );
}

#[test]
fn entry_with_annotations_colorized() {
    let input = "2024-01-02T03:04:05.123456Z INFO worker-1 (span1){k=v}: hello world\n";
    tracefmt()
        .args(["--color=always", "--width=120"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[92mINFO \x1b[0m"))
        .stdout(predicate::str::contains("worker-1        "))
        .stdout(predicate::str::contains(" hello world "))
        .stdout(predicate::str::contains("(span1){k=v}: "));
}

#[test]
fn envelope_stripped_before_parsing() {
    let input = "Jan  2 03:04:05 myhost myproc: 2024-01-02T03:04:05.000000Z ERROR t0 boom\n";
    tracefmt()
        .args(["--color=always", "--width=80"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("myhost").not())
        .stdout(predicate::str::contains("\x1b[91mERROR\x1b[0m"))
        .stdout(predicate::str::contains(" boom "));
}

#[test]
fn default_color_mode_is_always() {
    // Piped stdout still gets colors so output can go through `less -r`.
    let input = "2024-01-02T03:04:05.000000Z WARN t0 careful\n";
    tracefmt()
        .arg("--width=80")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[93mWARN \x1b[0m"));
}

#[test]
fn one_output_line_per_input_line() {
    let input = std::fs::read_to_string("tests/fixtures/kumod.log").unwrap();
    let output = tracefmt()
        .args(["--color=never", "--width=100"])
        .write_stdin(input.clone())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), input.lines().count());
}

#[test]
fn fixture_span_context_moves_after_message() {
    let input = std::fs::read_to_string("tests/fixtures/kumod.log").unwrap();
    let output = tracefmt()
        .args(["--color=never", "--width=200"])
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let debug_line = stdout
        .lines()
        .find(|l| l.contains("EHLO accepted"))
        .expect("debug entry rendered");
    assert!(
        debug_line.contains(
            "kumod::smtp_server: EHLO accepted smtp_server{peer=10.0.0.1:2525}:session{id=7}: "
        ),
        "got {debug_line:?}"
    );
    assert!(debug_line.contains(" DEBUG localset-0       "));
}

#[test]
fn extremely_long_line_no_crash() {
    let long_val = "x".repeat(1_100_000);
    let input = format!("2024-01-02T03:04:05.000000Z INFO t0 span{{data={long_val}}}: big\n");
    tracefmt()
        .args(["--color=never", "--width=80"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("big"));
}
