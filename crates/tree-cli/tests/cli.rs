//! End-to-end tests for the `tree_to_text` binary.
//!
//! Each test spawns the built binary, feeds a record on stdin, and checks
//! stdout, stderr and the exit status.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn tree_to_text(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tree_to_text"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn tree_to_text");

    {
        let mut pipe = child.stdin.take().expect("stdin is piped");
        // The binary may exit before reading everything (e.g. usage errors).
        let _ = pipe.write_all(stdin);
    }

    child.wait_with_output().expect("failed to wait on tree_to_text")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn empty_record_succeeds() {
    let out = tree_to_text(&[], b"tree 0\0");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"tree:0\n");
    assert!(out.stderr.is_empty(), "unexpected stderr: {}", stderr(&out));
}

#[test]
fn one_entry_record_succeeds() {
    let mut input = b"tree 0\0644 a.txt\0".to_vec();
    input.extend(0u8..20);

    let out = tree_to_text(&[], &input);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        out.stdout,
        b"tree:0\n644:a.txt:000102030405060708090a0b0c0d0e0f10111213\n"
    );
}

#[test]
fn any_argument_is_a_usage_error() {
    let cases: [&[&str]; 4] = [&["file.bin"], &["--help"], &["-V"], &["a", "b"]];
    for args in cases {
        let out = tree_to_text(args, b"tree 0\0");
        assert_eq!(out.status.code(), Some(1), "args {args:?}");
        assert!(out.stdout.is_empty(), "args {args:?}");
        assert!(
            stderr(&out).starts_with("Usage: tree_to_text"),
            "args {args:?}: {}",
            stderr(&out)
        );
    }
}

#[test]
fn bad_header_names_the_header() {
    let out = tree_to_text(&[], b"blob 0\0");
    assert_eq!(out.status.code(), Some(1));
    let msg = stderr(&out);
    assert!(msg.starts_with("error: "), "{msg}");
    assert!(msg.contains("header"), "{msg}");
    assert!(out.stdout.is_empty());
}

#[test]
fn empty_permissions_fails() {
    let out = tree_to_text(&[], b"tree 0\0 a\0");
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("empty permissions field"));
    // The header line was already streamed.
    assert_eq!(out.stdout, b"tree:0\n");
}

#[test]
fn truncated_hash_fails() {
    let mut input = b"tree 0\0644 a\0".to_vec();
    input.extend([7u8; 19]);

    let out = tree_to_text(&[], &input);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("hash field"));
}

#[test]
fn empty_input_fails() {
    let out = tree_to_text(&[], b"");
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("header field"));
}
