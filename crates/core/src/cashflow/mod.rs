//! Cash-flow entries and their category/month aggregation.

pub mod aggregate;
pub mod cache;
pub mod error;
pub mod types;


pub use aggregate::{
    aggregate, annual_total, monthly_totals, quarter_total, quarter_totals, try_aggregate,
    validate_entries,
};
pub use cache::{AggregationCache, DatasetKey};
pub use error::CashFlowError;
pub use types::{CategoryMatrix, CategoryRow, ColumnTotal, Entry, EntryType, MonthCell};
