//! Terminal output formatting
//!
//! Colored printing for the plain-text modes and shared formatting helpers.

pub mod display;
pub mod formatters;

pub use display::{print_events, print_round, print_simulation_result, print_stats};
