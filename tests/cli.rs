use std::io::Write;
use std::process::{Command, Stdio};

fn treesketch() -> Command {
    Command::new(env!("CARGO_BIN_EXE_treesketch"))
}

#[test]
fn prints_header_then_diagram() {
    let output = treesketch()
        .args(["7", "--seed", "5"])
        .output()
        .expect("binary runs");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8 output");
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("Number of nodes: 7"));
    let markers: usize = lines.map(|line| line.matches('*').count()).sum();
    assert_eq!(markers, 7);
}

#[test]
fn reads_count_from_stdin() {
    let mut child = treesketch()
        .args(["--seed", "1"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary starts");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(b"1\n")
        .expect("write count");

    let output = child.wait_with_output().expect("binary finishes");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Number of nodes: 1\n*\n");
}

#[test]
fn zero_nodes_prints_header_only() {
    let output = treesketch().arg("0").output().expect("binary runs");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Number of nodes: 0\n");
}

#[test]
fn rejects_negative_count() {
    let output = treesketch().arg("--").arg("-3").output().expect("binary runs");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("expected a non-negative integer"),
        "unexpected stderr: {stderr}"
    );
}
