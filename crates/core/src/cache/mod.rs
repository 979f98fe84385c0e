//! Set-associative cache storage.
//!
//! This module implements the in-memory representation the engine mutates:
//! a fixed matrix of `2^s` sets of `E` lines, held as one flat contiguous
//! buffer indexed `set * ways + way`. No per-line heap allocation takes
//! place; the store is either fully constructed or not created at all.
//! Lines carry no data bytes, only tag and state bits — the simulation never
//! touches real memory contents.

/// Cache replacement policy implementations.
pub mod policies;

use crate::common::error::SimError;
use crate::config::CacheConfig;

/// Cache line entry: tag plus validity, dirty, and recency state.
///
/// Initial state is invalid, clean, recency 0. Only the engine mutates a
/// line, and only through [`CacheStore`]'s interface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheLine {
    /// High-order address bits identifying the resident block.
    pub tag: u64,
    /// Line holds a block.
    pub valid: bool,
    /// Resident block has been written but not yet written back.
    pub dirty: bool,
    /// Global access counter value of the last touch; larger is more recent.
    pub recency: u64,
}

/// The set/line matrix.
///
/// All mutating operations act only on the targeted line. Uniqueness of a
/// valid tag within a set is an invariant the engine preserves; the store
/// itself never checks it.
#[derive(Clone, Debug)]
pub struct CacheStore {
    lines: Vec<CacheLine>,
    sets: usize,
    ways: usize,
}

impl CacheStore {
    /// Allocates the matrix for the given geometry, every line invalid.
    ///
    /// # Errors
    ///
    /// Propagates the [`CacheConfig::validate`] conditions, and returns
    /// [`SimError::Allocation`] when `2^s` sets of `ways` lines cannot be
    /// represented or reserved on this host.
    pub fn new(config: &CacheConfig) -> Result<Self, SimError> {
        config.validate()?;
        let sets = 1usize.checked_shl(config.set_bits).ok_or_else(|| {
            SimError::Allocation(format!("2^{} sets exceed the address space", config.set_bits))
        })?;
        let total = sets.checked_mul(config.ways).ok_or_else(|| {
            SimError::Allocation(format!("{sets} sets of {} lines overflow", config.ways))
        })?;
        let mut lines = Vec::new();
        lines
            .try_reserve_exact(total)
            .map_err(|e| SimError::Allocation(e.to_string()))?;
        lines.resize(total, CacheLine::default());
        Ok(Self {
            lines,
            sets,
            ways: config.ways,
        })
    }

    /// Number of sets.
    #[inline]
    pub const fn sets(&self) -> usize {
        self.sets
    }

    /// Lines per set.
    #[inline]
    pub const fn ways(&self) -> usize {
        self.ways
    }

    #[inline]
    const fn base(&self, set: usize) -> usize {
        set * self.ways
    }

    /// All lines of one set, in way order.
    #[inline]
    pub fn set_lines(&self, set: usize) -> &[CacheLine] {
        let base = self.base(set);
        &self.lines[base..base + self.ways]
    }

    /// One line, by set and way.
    #[inline]
    pub fn line(&self, set: usize, way: usize) -> &CacheLine {
        debug_assert!(way < self.ways);
        &self.lines[self.base(set) + way]
    }

    /// Finds the valid line in `set` holding `tag`.
    ///
    /// Returns the first match of a left-to-right scan; the engine keeps
    /// valid tags unique per set, so at most one line can match.
    pub fn lookup(&self, set: usize, tag: u64) -> Option<usize> {
        self.set_lines(set)
            .iter()
            .position(|line| line.valid && line.tag == tag)
    }

    /// Finds the first invalid line in `set`, if any.
    pub fn find_empty(&self, set: usize) -> Option<usize> {
        self.set_lines(set).iter().position(|line| !line.valid)
    }

    /// Overwrites a line wholesale: new tag, valid, given dirty state and
    /// recency. Used both for filling an empty line and for reusing an
    /// evicted one.
    pub fn install(&mut self, set: usize, way: usize, tag: u64, recency: u64, dirty: bool) {
        let idx = self.base(set) + way;
        self.lines[idx] = CacheLine {
            tag,
            valid: true,
            dirty,
            recency,
        };
    }

    /// Sets the dirty flag on a line.
    pub fn mark_dirty(&mut self, set: usize, way: usize) {
        let idx = self.base(set) + way;
        self.lines[idx].dirty = true;
    }

    /// Records a touch of the line at the given recency counter value.
    pub fn touch_recency(&mut self, set: usize, way: usize, recency: u64) {
        let idx = self.base(set) + way;
        self.lines[idx].recency = recency;
    }

    /// Number of valid lines currently marked dirty, across every set.
    ///
    /// Lets callers reconstruct the resident dirty-byte count from first
    /// principles after a run.
    pub fn dirty_line_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| line.valid && line.dirty)
            .count()
    }
}
