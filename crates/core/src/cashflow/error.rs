//! Cash-flow error types.

use cashflow_shared::AppError;
use cashflow_shared::types::EntryId;
use thiserror::Error;

/// Errors raised by strict entry validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CashFlowError {
    /// Entry month is outside `1..=12`.
    #[error("Entry {entry_id} has month {month}, expected 1..=12")]
    MonthOutOfRange {
        /// Offending entry.
        entry_id: EntryId,
        /// Month as supplied.
        month: u8,
    },

    /// Entry has a blank category name.
    #[error("Entry {0} has an empty category")]
    EmptyCategory(EntryId),
}

impl From<CashFlowError> for AppError {
    fn from(err: CashFlowError) -> Self {
        Self::Validation(err.to_string())
    }
}
