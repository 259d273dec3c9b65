//! Performance and vertical-analysis calculations.

pub mod calculator;
pub mod types;

#[cfg(test)]
mod tests;

pub use calculator::{performance, performance_status, round_for_display, vertical_analysis};
pub use types::PerformanceStatus;
