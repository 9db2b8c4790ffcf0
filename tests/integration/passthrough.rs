//! Integration tests for lines that are not diagnostic entries.

use assert_cmd::Command;

#[allow(deprecated)]
fn tracefmt() -> Command {
    let mut cmd = Command::cargo_bin("tracefmt").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/tracefmt-test-no-config");
    cmd
}

#[test]
fn plain_text_unchanged() {
    tracefmt()
        .args(["--color=always", "--width=80"])
        .write_stdin("not a log line at all\n")
        .assert()
        .success()
        .stdout("not a log line at all\n");
}

#[test]
fn unknown_level_unchanged() {
    let input = "2024-01-02T03:04:05.000000Z CRITICAL t0 boom\n";
    tracefmt()
        .args(["--color=always", "--width=80"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(input);
}

#[test]
fn foreign_lines_are_byte_for_byte() {
    let input = "Starting application...\n\
                 {\"level\":\"info\",\"msg\":\"json is not our format\"}\n\
                 \n\
                 \tindented (with) {braces}: and colons\n\
                 2024-01-02T03:04:05Z INFO t0 no fraction\n";
    tracefmt()
        .args(["--color=always", "--width=80"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(input);
}

#[test]
fn entries_and_plain_text_mixed() {
    let input = "Starting application...\n\
                 2024-01-02T03:04:05.000000Z INFO main server started\n\
                 Plain text log line\n\
                 2024-01-02T03:04:06.000000Z ERROR main connection failed\n";

    let output = tracefmt()
        .args(["--color=never", "--width=100"])
        .write_stdin(input)
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Starting application...");
    assert!(lines[1].contains("INFO  main             server started"));
    assert_eq!(lines[2], "Plain text log line");
    assert!(lines[3].contains("ERROR main             connection failed"));
}

#[test]
fn envelope_with_foreign_payload_prints_payload() {
    tracefmt()
        .args(["--color=never", "--width=80"])
        .write_stdin("Mar 14 15:09:26 mx1 sshd[42]: Accepted publickey for root\n")
        .assert()
        .success()
        .stdout("Accepted publickey for root\n");
}

#[test]
fn invalid_utf8_passes_through_byte_for_byte() {
    let input: &[u8] = b"bad \xff byte\n";
    let output = tracefmt()
        .args(["--color=never", "--width=80"])
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, input);
}

#[test]
fn invalid_utf8_envelope_payload_keeps_bytes() {
    let output = tracefmt()
        .args(["--color=never", "--width=80"])
        .write_stdin(&b"Mar 14 15:09:26 mx\xe9 kumod[7]: caf\xe9 \xff\n"[..])
        .output()
        .unwrap();
    assert_eq!(output.stdout, b"caf\xe9 \xff\n");
}

#[test]
fn invalid_utf8_does_not_abort() {
    let input: &[u8] = b"bad \xff byte\n2024-01-02T03:04:05.000000Z INFO t0 after\n";
    let output = tracefmt()
        .args(["--color=never", "--width=80"])
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.starts_with(b"bad \xff byte\n"));
    assert!(String::from_utf8_lossy(&output.stdout).contains("after"));
}
