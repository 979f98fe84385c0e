//! Address decomposition for set-associative lookup.
//!
//! Splits a 64-bit address into the three fields the engine correlates:
//! the low `b` bits select a byte within the block, the next `s` bits select
//! the set, and the remaining high bits form the tag. All arithmetic is
//! bit-exact: a zero-width field reads as zero and a full-width shift yields
//! zero rather than tripping Rust's shift-overflow checks.

/// Decomposed view of a memory address under a given cache geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddrParts {
    /// Byte offset within the block (low `b` bits). Carried for
    /// completeness; the simulation outcome never depends on it.
    pub block_offset: u64,
    /// Set selector (the `s` bits above the block offset).
    pub set_index: u64,
    /// High-order bits identifying which memory block occupies a line.
    pub tag: u64,
}

impl AddrParts {
    /// Splits `addr` into block offset, set index, and tag.
    #[inline]
    pub const fn decompose(addr: u64, set_bits: u32, block_bits: u32) -> Self {
        Self {
            block_offset: addr & low_mask(block_bits),
            set_index: shr_or_zero(addr, block_bits) & low_mask(set_bits),
            tag: shr_or_zero(addr, set_bits + block_bits),
        }
    }
}

/// Mask of the low `bits` bits of a 64-bit word; `bits >= 64` is all ones.
#[inline]
const fn low_mask(bits: u32) -> u64 {
    if bits >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Logical right shift that yields zero once the count reaches the word width.
#[inline]
const fn shr_or_zero(value: u64, shift: u32) -> u64 {
    if shift >= u64::BITS { 0 } else { value >> shift }
}
