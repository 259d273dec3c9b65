//! Core computation for the cash-flow dashboard.
//!
//! This crate contains pure logic with ZERO web or database dependencies.
//! Entries arrive already fetched; everything here is in-memory derivation.
//!
//! # Modules
//!
//! - `fiscal` - Months and quarters of the reporting year
//! - `cashflow` - Entry model and the category/month aggregation matrix
//! - `variance` - Performance ratio and vertical analysis
//! - `report` - Derived dashboard view combining both
//! - `settings` - User settings model with targeted updates

pub mod cashflow;
pub mod fiscal;
pub mod report;
pub mod settings;
pub mod variance;
