use std::io::Write;
use std::process::{Command, Output, Stdio};

fn exec(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_ip-filter"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn exits_with_failure_on_bad_line() {
    let out = exec("1.2.3.4\n1.2.3.256\n");
    assert_eq!(Some(1), out.status.code());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("Error: "));
    assert_eq!(
        "Error: line 2: out of range: 256 (expected 0-255)\n",
        stderr
    );
}

#[test]
fn empty_input_succeeds() {
    let out = exec("");
    assert_eq!(Some(0), out.status.code());
    assert!(out.stdout.is_empty());
    assert!(out.stderr.is_empty());
}

#[test]
fn prints_four_passes() {
    let out = exec("46.70.1.1\tx\n1.1.1.1\n");
    assert!(out.status.success());
    assert_eq!(
        "46.70.1.1\n1.1.1.1\n1.1.1.1\n46.70.1.1\n46.70.1.1\n",
        String::from_utf8(out.stdout).unwrap()
    );
}
