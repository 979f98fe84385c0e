//! Simulation statistics collection and reporting.
//!
//! This module tracks the aggregate outcome of one trace replay. It provides:
//! 1. **Counters:** Hits, misses, and evictions.
//! 2. **Dirty accounting:** Bytes currently resident dirty and bytes written back by evictions.
//! 3. **Reporting:** A human-readable summary block and serde serialization for JSON output.

use serde::Serialize;

/// Aggregate outcome of one simulated trace replay.
///
/// Created empty at simulation start and accumulated by the engine; all
/// counters grow monotonically except `dirty_bytes_resident`, which drops
/// when a dirty line is evicted. The value is final once the run ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Accesses whose tag was resident in the target set.
    pub hits: u64,
    /// Accesses that required a fill.
    pub misses: u64,
    /// Misses that displaced a valid line.
    pub evictions: u64,
    /// Bytes currently held dirty in the cache (whole blocks of `2^b` bytes).
    pub dirty_bytes_resident: u64,
    /// Bytes written back by evictions of dirty lines (whole blocks).
    pub dirty_bytes_evicted: u64,
}

impl SimStats {
    /// Total number of accesses replayed.
    #[inline]
    pub const fn total_accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// Hit rate over the whole replay, as a fraction in `[0, 1]`.
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Prints the summary block to stdout.
    pub fn print(&self) {
        println!("==========================================================");
        println!("CACHE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("accesses                 {}", self.total_accesses());
        println!("hits                     {}", self.hits);
        println!("misses                   {}", self.misses);
        println!("evictions                {}", self.evictions);
        println!("hit_rate                 {:.2}%", self.hit_rate() * 100.0);
        println!("dirty_bytes_resident     {}", self.dirty_bytes_resident);
        println!("dirty_bytes_evicted      {}", self.dirty_bytes_evicted);
        println!("==========================================================");
    }
}
