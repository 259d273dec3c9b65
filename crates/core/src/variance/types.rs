//! Variance data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a performance ratio relative to plan.
///
/// Applied uniformly to revenue, cost and expense: a cost that runs over plan
/// reads as `Met`. Accounting-aware direction is not modelled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceStatus {
    /// Actual reached or exceeded plan.
    Met,
    /// Actual fell short of plan.
    Under,
    /// No actual recorded, or nothing was planned.
    NoSignal,
}

impl PerformanceStatus {
    /// Classifies an already computed performance percentage.
    #[must_use]
    pub fn classify(performance: Decimal) -> Self {
        if performance >= Decimal::ONE_HUNDRED {
            Self::Met
        } else {
            Self::Under
        }
    }

    /// Returns true for `Met`.
    #[must_use]
    pub const fn is_favorable(self) -> bool {
        matches!(self, Self::Met)
    }
}
