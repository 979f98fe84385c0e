//! Trace ingestion: parsing line-oriented access logs.
//!
//! A trace is a text file with one access per line:
//!
//! ```text
//! L 4f6b868,8
//! S 7ff0005c8,8
//! ```
//!
//! Byte 0 is the operation (`L` load, `S` store), byte 1 a single space,
//! then `<address>,<size>` with a hexadecimal address (optional `0x` prefix)
//! and a `strtoul`-style size (`0x…` hex, leading `0` octal, decimal
//! otherwise). Any malformed line aborts ingestion; the resulting error
//! names the offending line. The parsed sequence is an owned vector —
//! replay order is what determines recency downstream.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::common::data::{Access, AccessKind};
use crate::common::error::SimError;

/// Shortest line that can hold an operation, address, and size.
const MIN_RECORD_LEN: usize = 5;

/// Reads and validates a trace file into an ordered access sequence.
///
/// # Errors
///
/// [`SimError::Io`] when the file cannot be opened or read,
/// [`SimError::MalformedTrace`] on the first invalid record.
pub fn load_trace(path: &Path) -> Result<Vec<Access>, SimError> {
    let file = File::open(path)?;
    let accesses = parse_trace(BufReader::new(file))?;
    debug!(records = accesses.len(), ?path, "trace loaded");
    Ok(accesses)
}

/// Parses trace records from any buffered reader.
///
/// # Errors
///
/// Same conditions as [`load_trace`].
pub fn parse_trace<R: BufRead>(reader: R) -> Result<Vec<Access>, SimError> {
    let mut accesses = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        accesses.push(parse_record(&line?, idx + 1)?);
    }
    Ok(accesses)
}

/// Validates and parses a single trace line.
fn parse_record(line: &str, lineno: usize) -> Result<Access, SimError> {
    let malformed = |reason: &str| SimError::MalformedTrace {
        line: lineno,
        reason: reason.to_owned(),
    };

    let bytes = line.as_bytes();
    if bytes.len() < MIN_RECORD_LEN {
        return Err(malformed("record too short"));
    }
    let kind = match bytes[0] {
        b'L' => AccessKind::Load,
        b'S' => AccessKind::Store,
        _ => return Err(malformed("operation must be 'L' or 'S'")),
    };
    if bytes[1] != b' ' || bytes[2] == b' ' {
        return Err(malformed("expected a single space after the operation"));
    }

    let (addr_str, size_str) = line[2..]
        .split_once(',')
        .ok_or_else(|| malformed("expected '<address>,<size>'"))?;

    let addr_str = addr_str.trim();
    let addr_str = addr_str
        .strip_prefix("0x")
        .or_else(|| addr_str.strip_prefix("0X"))
        .unwrap_or(addr_str);
    let addr = u64::from_str_radix(addr_str, 16).map_err(|_| malformed("invalid address"))?;

    let size = parse_c_ulong(size_str.trim()).ok_or_else(|| malformed("invalid size"))?;

    Ok(Access { addr, size, kind })
}

/// Parses an unsigned integer with C `strtoul(_, _, 0)` base detection:
/// `0x`/`0X` prefix means hexadecimal, a leading `0` means octal, anything
/// else decimal.
fn parse_c_ulong(s: &str) -> Option<u64> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()
    } else if s.len() > 1 && s.starts_with('0') {
        u64::from_str_radix(&s[1..], 8).ok()
    } else {
        s.parse().ok()
    }
}
