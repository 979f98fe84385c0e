//! Error types for configuration, allocation, and trace ingestion.
//!
//! Every variant is fatal to the run it occurs in: the simulation is a
//! finite deterministic batch computation, so there is no retry path, and
//! the engine never returns partial statistics alongside an error.

use thiserror::Error;

/// Fatal errors surfaced by the simulator and its collaborators.
#[derive(Debug, Error)]
pub enum SimError {
    /// The set-index and block-offset bits together address more than the
    /// 64-bit word. No simulation is attempted.
    #[error("geometry addresses more than 64 bits (s = {set_bits}, b = {block_bits})")]
    Geometry {
        /// Requested set-index bits.
        set_bits: u32,
        /// Requested block-offset bits.
        block_bits: u32,
    },

    /// A set must hold at least one line.
    #[error("associativity must be at least one line per set")]
    ZeroAssociativity,

    /// The cache matrix or a derived quantity cannot be represented or
    /// allocated on this host.
    #[error("cannot allocate cache state: {0}")]
    Allocation(String),

    /// A trace record failed validation during ingestion.
    #[error("malformed trace record at line {line}: {reason}")]
    MalformedTrace {
        /// 1-based line number of the offending record.
        line: usize,
        /// What the validator rejected.
        reason: String,
    },

    /// Trace file or verbose-sink I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A JSON configuration document failed to parse.
    #[error("invalid configuration document: {0}")]
    ConfigFormat(#[from] serde_json::Error),
}
