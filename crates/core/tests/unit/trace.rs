//! Trace Parser Tests.
//!
//! Verifies acceptance of well-formed records, each rejection class with
//! line-number attribution, the `strtoul`-style size bases, and the
//! file-backed ingestion path.

use std::io::{Cursor, Write as _};

use cachesim_core::SimError;
use cachesim_core::common::data::AccessKind;
use cachesim_core::sim::{load_trace, parse_trace};

fn parse(text: &str) -> Result<Vec<cachesim_core::common::data::Access>, SimError> {
    parse_trace(Cursor::new(text))
}

// ──────────────────────────────────────────────────────────
// Acceptance
// ──────────────────────────────────────────────────────────

#[test]
fn parses_loads_and_stores_in_order() {
    let trace = parse("L 4f6b868,8\nS 7ff0005c8,4\n").unwrap();

    assert_eq!(trace.len(), 2);
    assert_eq!(trace[0].kind, AccessKind::Load);
    assert_eq!(trace[0].addr, 0x4f6_b868);
    assert_eq!(trace[0].size, 8);
    assert_eq!(trace[1].kind, AccessKind::Store);
    assert_eq!(trace[1].addr, 0x7_ff00_05c8);
    assert_eq!(trace[1].size, 4);
}

#[test]
fn empty_trace_is_a_valid_trace() {
    assert!(parse("").unwrap().is_empty());
}

#[test]
fn address_accepts_an_explicit_hex_prefix() {
    let trace = parse("L 0x1f,1\n").unwrap();
    assert_eq!(trace[0].addr, 0x1f);
}

/// Size follows C `strtoul` base detection: hex with `0x`, octal with a
/// leading zero, decimal otherwise.
#[test]
fn size_bases_follow_strtoul_rules() {
    let trace = parse("L 0,0x10\nL 0,010\nL 0,10\n").unwrap();
    assert_eq!(trace[0].size, 16);
    assert_eq!(trace[1].size, 8);
    assert_eq!(trace[2].size, 10);
}

// ──────────────────────────────────────────────────────────
// Rejection classes
// ──────────────────────────────────────────────────────────

#[test]
fn rejects_unknown_operation() {
    let err = parse("M 0,1\n").unwrap_err();
    assert!(matches!(err, SimError::MalformedTrace { line: 1, .. }));
}

#[test]
fn rejects_missing_space_after_operation() {
    assert!(parse("L0x20,1\n").is_err());
}

#[test]
fn rejects_double_space_after_operation() {
    assert!(parse("L  20,1\n").is_err());
}

#[test]
fn rejects_truncated_record() {
    assert!(parse("L 0,\n").is_err());
}

#[test]
fn rejects_missing_size_field() {
    assert!(parse("L 0400\n").is_err());
}

#[test]
fn rejects_non_hex_address() {
    assert!(parse("L zz,1\n").is_err());
}

#[test]
fn rejects_non_numeric_size() {
    assert!(parse("S 4,abc\n").is_err());
}

#[test]
fn rejects_blank_lines() {
    assert!(parse("L 0,1\n\nL 4,1\n").is_err());
}

/// The error names the first offending line, not the first line.
#[test]
fn attributes_errors_to_the_offending_line() {
    let err = parse("L 0,1\nM 4,1\n").unwrap_err();
    match err {
        SimError::MalformedTrace { line, .. } => assert_eq!(line, 2),
        other => panic!("expected MalformedTrace, got {other}"),
    }
}

// ──────────────────────────────────────────────────────────
// File-backed ingestion
// ──────────────────────────────────────────────────────────

#[test]
fn loads_a_trace_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "L 0,1\nS 4,2\n").unwrap();

    let trace = load_trace(file.path()).unwrap();
    assert_eq!(trace.len(), 2);
    assert_eq!(trace[1].kind, AccessKind::Store);
}

#[test]
fn missing_trace_file_is_an_io_error() {
    let err = load_trace(std::path::Path::new("/no/such/trace/file")).unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}
