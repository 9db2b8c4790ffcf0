//! Integration tests for color control: `NO_COLOR`, `FORCE_COLOR`, --color flag, `TERM`.

use assert_cmd::Command;

const ENTRY: &str = "2024-01-02T03:04:05.000000Z INFO t0 span{a=1}: hello\n";

#[allow(deprecated)]
fn tracefmt() -> Command {
    let mut cmd = Command::cargo_bin("tracefmt").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/tracefmt-test-no-config");
    cmd.arg("--width=80");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.write_stdin(ENTRY).output().unwrap();
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn color_never_disables_ansi() {
    let stdout = stdout_of(tracefmt().arg("--color=never"));
    assert!(
        !stdout.contains("\x1b["),
        "Should not contain ANSI escapes with --color=never"
    );
    assert!(stdout.contains("hello"));
}

#[test]
fn color_always_enables_ansi() {
    let stdout = stdout_of(tracefmt().arg("--color=always"));
    assert!(
        stdout.contains("\x1b["),
        "Should contain ANSI escapes with --color=always"
    );
}

#[test]
fn color_always_overrides_no_color() {
    let stdout = stdout_of(tracefmt().arg("--color=always").env("NO_COLOR", "1"));
    assert!(
        stdout.contains("\x1b["),
        "--color=always should override NO_COLOR"
    );
}

#[test]
fn auto_piped_stdout_disables_colors() {
    let stdout = stdout_of(
        tracefmt()
            .arg("--color=auto")
            .env_remove("FORCE_COLOR")
            .env_remove("NO_COLOR"),
    );
    assert!(
        !stdout.contains("\x1b["),
        "Piped output should not have ANSI escapes in auto mode"
    );
}

#[test]
fn auto_no_color_env_disables_colors() {
    let stdout = stdout_of(
        tracefmt()
            .arg("--color=auto")
            .env("NO_COLOR", "1")
            .env("FORCE_COLOR", "1"),
    );
    assert!(!stdout.contains("\x1b["), "NO_COLOR wins in auto mode");
}

#[test]
fn auto_force_color_enables_colors_when_piped() {
    let stdout = stdout_of(
        tracefmt()
            .arg("--color=auto")
            .env_remove("NO_COLOR")
            .env("FORCE_COLOR", "1"),
    );
    assert!(stdout.contains("\x1b["), "FORCE_COLOR should enable colors");
}

#[test]
fn color_never_overrides_force_color() {
    let stdout = stdout_of(tracefmt().arg("--color=never").env("FORCE_COLOR", "1"));
    assert!(
        !stdout.contains("\x1b["),
        "--color=never should override FORCE_COLOR"
    );
}

#[test]
fn passthrough_lines_never_colored() {
    let output = tracefmt()
        .arg("--color=always")
        .write_stdin("plain line\n")
        .output()
        .unwrap();
    assert_eq!(output.stdout, b"plain line\n");
}
