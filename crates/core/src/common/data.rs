//! Memory access records.
//!
//! This module defines the replayed operations the engine consumes:
//! 1. **Classification:** Loads versus stores, which is what decides dirty marking.
//! 2. **Records:** The `(address, size, kind)` triple parsed from a trace line.

/// Kind of memory operation replayed from a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessKind {
    /// Data load (`L` trace records). Never dirties a line.
    Load,

    /// Data store (`S` trace records). Marks the touched line dirty.
    Store,
}

impl AccessKind {
    /// Returns `true` for store operations.
    #[inline]
    pub const fn is_store(self) -> bool {
        matches!(self, Self::Store)
    }

    /// Single-letter trace mnemonic (`L` or `S`).
    #[inline]
    pub const fn mnemonic(self) -> char {
        match self {
            Self::Load => 'L',
            Self::Store => 'S',
        }
    }
}

/// One replayed memory access.
///
/// The sequence order of these records is semantically meaningful: it
/// determines line recency. Records are immutable once parsed; the engine
/// only reads them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Access {
    /// Byte address touched by the access.
    pub addr: u64,
    /// Access width in bytes. Accepted and echoed in verbose output, but it
    /// never alters the simulation outcome.
    pub size: u64,
    /// Load or store.
    pub kind: AccessKind,
}
