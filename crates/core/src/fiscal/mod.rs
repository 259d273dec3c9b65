//! Reporting calendar: months and quarters.

pub mod period;

pub use period::{MONTHS_PER_QUARTER, MONTHS_PER_YEAR, Month, Quarter};
