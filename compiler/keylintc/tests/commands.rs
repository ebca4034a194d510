//! Command handlers driven through the library, as the binary drives them.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::io::{self, Write};

use keylintc::commands::{explain_code, list_rules, run_demo};
use keylintc::CliError;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

/// A writer that refuses everything.
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn rules_lists_every_code() {
    let mut out = Vec::new();
    list_rules(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("ArrayAsKeyOfSetOrMap [warning]\n"));
    assert!(text.contains("reference equality"));
    assert!(!text.contains("(undocumented)"));
}

#[test]
fn explain_prints_docs_for_any_case() {
    for spelling in ["ArrayAsKeyOfSetOrMap", "arrayaskeyofsetormap"] {
        let mut out = Vec::new();
        explain_code(spelling, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# ArrayAsKeyOfSetOrMap"), "{spelling}");
    }
}

#[test]
fn explain_unknown_code_fails() {
    let mut out = Vec::new();
    let err = explain_code("MutableKey", &mut out).unwrap_err();

    assert!(matches!(err, CliError::UnknownCode(ref code) if code == "MutableKey"));
    assert_eq!(err.to_string(), "unknown lint code: MutableKey");
    assert!(out.is_empty());
}

#[test]
fn demo_json_reports_two_findings() {
    let mut out = Vec::new();
    run_demo(&args(&["--format=json"]), false, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.matches("\"severity\": \"warning\"").count(), 2);
}

#[test]
fn demo_terminal_summary() {
    let mut out = Vec::new();
    run_demo(&args(&["--color=never"]), true, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.ends_with("warning: 2 warnings emitted\n"));
}

#[test]
fn demo_rejects_unknown_option_before_writing() {
    let mut out = Vec::new();
    let err = run_demo(&args(&["--fix"]), false, &mut out).unwrap_err();

    assert!(matches!(err, CliError::UnknownOption { command: "demo", .. }));
    assert!(out.is_empty());
}

#[test]
fn demo_write_failure_is_an_io_error() {
    let err = run_demo(&[], false, &mut BrokenPipe).unwrap_err();
    assert!(matches!(err, CliError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
}
