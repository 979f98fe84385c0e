//! Configuration for the cache simulator.
//!
//! This module defines the validated geometry consumed by the engine. It provides:
//! 1. **Geometry:** Set-index bits, associativity, and block-offset bits.
//! 2. **Validation:** The addressable-width and associativity invariants.
//! 3. **Interchange:** JSON deserialization for embedding callers.

use serde::Deserialize;
use tracing::debug;

use crate::common::addr::AddrParts;
use crate::common::error::SimError;

/// Width in bits of a simulated memory address.
pub const ADDRESS_BITS: u32 = 64;

/// Validated cache geometry and replay options.
///
/// Once validation has passed, `set_bits + block_bits` never exceeds
/// [`ADDRESS_BITS`] and `ways` is at least 1. The value is immutable for the
/// lifetime of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    /// Number of set-index bits; the cache has `2^set_bits` sets.
    pub set_bits: u32,

    /// Lines per set (associativity).
    pub ways: usize,

    /// Number of block-offset bits; each block holds `2^block_bits` bytes.
    pub block_bits: u32,

    /// Emit one outcome line per access during replay.
    #[serde(default)]
    pub verbose: bool,
}

impl CacheConfig {
    /// Builds and validates a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Geometry`] when the set-index and block-offset
    /// bits together address more than [`ADDRESS_BITS`] bits, and
    /// [`SimError::ZeroAssociativity`] when `ways` is zero.
    pub fn new(set_bits: u32, ways: usize, block_bits: u32, verbose: bool) -> Result<Self, SimError> {
        let config = Self {
            set_bits,
            ways,
            block_bits,
            verbose,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the geometry invariants.
    ///
    /// # Errors
    ///
    /// Same conditions as [`CacheConfig::new`].
    pub fn validate(&self) -> Result<(), SimError> {
        if self.ways == 0 {
            return Err(SimError::ZeroAssociativity);
        }
        if self.set_bits.saturating_add(self.block_bits) > ADDRESS_BITS {
            return Err(SimError::Geometry {
                set_bits: self.set_bits,
                block_bits: self.block_bits,
            });
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// The `verbose` field may be omitted and defaults to `false`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ConfigFormat`] when the document does not parse,
    /// plus the [`CacheConfig::validate`] conditions.
    pub fn from_json(doc: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(doc)?;
        config.validate()?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Decomposes an address under this geometry.
    #[inline]
    pub fn decompose(&self, addr: u64) -> AddrParts {
        AddrParts::decompose(addr, self.set_bits, self.block_bits)
    }
}
