//! Cache replacement policies.
//!
//! Victim selection for a set with no empty line left. The engine stamps
//! every touched line with a globally increasing recency counter, so a
//! policy only needs a read-only view of the candidate set.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used.

/// Least Recently Used replacement policy.
pub mod lru;

pub use lru::LruPolicy;

use crate::cache::CacheLine;

/// Trait for cache replacement policies.
pub trait ReplacementPolicy {
    /// Selects the way to evict from a fully valid set.
    ///
    /// Invoked only when every line in `lines` is valid; `lines` is never
    /// empty (associativity is at least 1).
    ///
    /// # Arguments
    ///
    /// * `lines` - The candidate set's lines, in way order.
    ///
    /// # Returns
    ///
    /// The index of the way to evict.
    fn victim(&self, lines: &[CacheLine]) -> usize;
}
