//! Command implementations

pub mod simple;
pub mod simulate;
pub mod stats;

pub use simple::run_simple;
pub use simulate::{Policy, RoundRecord, SimulationResult, play_round, run_simulation};
pub use stats::{CategoryStats, StatsReport, collect_stats};
