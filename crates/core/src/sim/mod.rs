//! Simulation driving.
//!
//! This module owns everything around the per-access loop:
//! 1. **Engine:** The simulator that decodes, looks up, fills, evicts, and accumulates statistics.
//! 2. **Ingestion:** Parsing a line-oriented trace file into an ordered access sequence.

/// The per-access simulation engine.
pub mod simulator;

/// Trace file parsing.
pub mod trace;

pub use simulator::{Simulator, StepOutcome};
pub use trace::{load_trace, parse_trace};
