//! Trace-driven set-associative cache simulator library.
//!
//! This crate replays a log of memory accesses against a modelled cache and
//! reports aggregate behavior, without touching any real memory contents:
//! 1. **Configuration:** Validated cache geometry (set-index bits, associativity, block-offset bits).
//! 2. **Decomposition:** Bit-exact address splitting into block offset, set index, and tag.
//! 3. **Storage:** A flat set/line matrix holding per-line tag, validity, dirty, and recency state.
//! 4. **Replacement:** Victim selection behind a policy trait; least-recently-used by default.
//! 5. **Engine & statistics:** The per-access hit/miss/eviction loop, write-back dirty-byte
//!    accounting, and the final statistics record.

/// Set-associative storage and replacement policies.
pub mod cache;
/// Common leaf types (address decomposition, access records, errors).
pub mod common;
/// Validated cache geometry configuration.
pub mod config;
/// Simulation driving: the engine loop and trace ingestion.
pub mod sim;
/// Statistics accumulation and reporting.
pub mod stats;

/// Error type covering configuration, allocation, and ingestion failures.
pub use crate::common::error::SimError;
/// Validated cache geometry; construct with `CacheConfig::new` or deserialize from JSON.
pub use crate::config::CacheConfig;
/// Simulation engine; owns the cache store and statistics for one run.
pub use crate::sim::Simulator;
/// Final statistics record handed back by a completed run.
pub use crate::stats::SimStats;
