//! Simulator: owns the cache store and the statistics for one run.
//!
//! The replay is a strictly single-threaded, deterministic fold over the
//! access sequence: decode, look up, fill or evict, account. The only I/O in
//! the loop is the optional verbose line written to a caller-supplied sink.

use std::io::Write;

use tracing::debug;

use crate::cache::CacheStore;
use crate::cache::policies::{LruPolicy, ReplacementPolicy};
use crate::common::data::Access;
use crate::common::error::SimError;
use crate::config::CacheConfig;
use crate::stats::SimStats;

/// Outcome of a single replayed access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// Tag was already resident in the target set.
    pub hit: bool,
    /// A valid line was displaced to make room.
    pub eviction: bool,
}

/// Trace-driven cache simulation engine.
///
/// Exclusively owns the store and the accumulator for the lifetime of one
/// run; `run` hands the final statistics back and the store stays readable
/// for post-run inspection.
pub struct Simulator {
    config: CacheConfig,
    cache: CacheStore,
    policy: Box<dyn ReplacementPolicy>,
    stats: SimStats,
    block_bytes: u64,
    tick: u64,
}

impl Simulator {
    /// Builds the engine for one run.
    ///
    /// # Errors
    ///
    /// Invalid geometry surfaces as the [`CacheConfig::validate`] errors;
    /// an unconstructible store or block size as [`SimError::Allocation`].
    pub fn new(config: CacheConfig) -> Result<Self, SimError> {
        config.validate()?;
        let cache = CacheStore::new(&config)?;
        let block_bytes = 1u64.checked_shl(config.block_bits).ok_or_else(|| {
            SimError::Allocation(format!(
                "blocks of 2^{} bytes exceed the address space",
                config.block_bits
            ))
        })?;
        debug!(
            sets = cache.sets(),
            ways = cache.ways(),
            block_bytes,
            "cache allocated"
        );
        Ok(Self {
            config,
            cache,
            policy: Box::new(LruPolicy),
            stats: SimStats::default(),
            block_bytes,
            tick: 0,
        })
    }

    /// Replays the whole trace and returns the final statistics.
    ///
    /// In verbose mode one outcome line per access is written to `out`;
    /// otherwise `out` is never touched.
    ///
    /// # Errors
    ///
    /// Only the verbose sink can fail here, surfaced as [`SimError::Io`].
    pub fn run<W: Write>(&mut self, trace: &[Access], out: &mut W) -> Result<SimStats, SimError> {
        for access in trace {
            let outcome = self.step(access);
            if self.config.verbose {
                write_trace_line(out, access, outcome)?;
            }
        }
        Ok(self.stats)
    }

    /// Processes a single access, updating the store and the statistics.
    ///
    /// The access's position in the replay (a strictly increasing counter)
    /// becomes the recency stamp of the touched line.
    pub fn step(&mut self, access: &Access) -> StepOutcome {
        let parts = self.config.decompose(access.addr);
        let set = parts.set_index as usize;
        let recency = self.tick;
        self.tick += 1;
        let is_store = access.kind.is_store();

        if let Some(way) = self.cache.lookup(set, parts.tag) {
            self.stats.hits += 1;
            self.cache.touch_recency(set, way, recency);
            // Dirty state is idempotent per line: only a clean line gains bytes.
            if is_store && !self.cache.line(set, way).dirty {
                self.cache.mark_dirty(set, way);
                self.stats.dirty_bytes_resident += self.block_bytes;
            }
            return StepOutcome {
                hit: true,
                eviction: false,
            };
        }

        self.stats.misses += 1;
        let (way, eviction) = match self.cache.find_empty(set) {
            Some(way) => (way, false),
            None => {
                self.stats.evictions += 1;
                let way = self.policy.victim(self.cache.set_lines(set));
                if self.cache.line(set, way).dirty {
                    // The old contents are written back and leave the
                    // resident dirty accounting.
                    self.stats.dirty_bytes_evicted += self.block_bytes;
                    self.stats.dirty_bytes_resident -= self.block_bytes;
                }
                (way, true)
            }
        };

        // A write fills the line freshly dirty; a read leaves it clean.
        self.cache.install(set, way, parts.tag, recency, is_store);
        if is_store {
            self.stats.dirty_bytes_resident += self.block_bytes;
        }
        StepOutcome {
            hit: false,
            eviction,
        }
    }

    /// Statistics accumulated so far.
    #[inline]
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Read-only view of the store, for diagnostics and post-run checks.
    #[inline]
    pub const fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// The configuration this engine was built from.
    #[inline]
    pub const fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Bytes per block (`2^b`), the unit of dirty accounting.
    #[inline]
    pub const fn block_bytes(&self) -> u64 {
        self.block_bytes
    }
}

/// Emits one verbose line: operation letter, bare-hex address, decimal size,
/// then the outcome tags.
fn write_trace_line<W: Write>(
    out: &mut W,
    access: &Access,
    outcome: StepOutcome,
) -> Result<(), SimError> {
    write!(
        out,
        "{} {:x},{}",
        access.kind.mnemonic(),
        access.addr,
        access.size
    )?;
    if outcome.hit {
        write!(out, " hit")?;
    } else {
        write!(out, " miss")?;
        if outcome.eviction {
            write!(out, " eviction")?;
        }
    }
    writeln!(out)?;
    Ok(())
}
