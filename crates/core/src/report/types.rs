//! Report data types.

use cashflow_shared::config::{AnalysisBasis, ReportConfig};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cashflow::EntryType;
use crate::fiscal::MONTHS_PER_YEAR;
use crate::variance::PerformanceStatus;

/// Options controlling derived metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Amount that vertical-analysis shares are computed from.
    pub basis: AnalysisBasis,
    /// Round percentages to one decimal place.
    pub round_for_display: bool,
}

impl From<&ReportConfig> for ReportOptions {
    fn from(config: &ReportConfig) -> Self {
        Self {
            basis: config.vertical_analysis_basis,
            round_for_display: config.round_for_display,
        }
    }
}

/// One cell of the dashboard table with its derived metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportCell {
    /// Planned amount.
    pub planned: Decimal,
    /// Actual amount; absent when nothing was recorded in the cell's span.
    pub actual: Option<Decimal>,
    /// `actual / planned` as a percentage.
    pub performance: Decimal,
    /// Direction of the performance ratio.
    pub status: PerformanceStatus,
    /// Share of the column total as a percentage.
    pub vertical_analysis: Decimal,
}

/// A category row of the dashboard table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Category name.
    pub category: String,
    /// Entry type of the category.
    pub entry_type: EntryType,
    /// One cell per month, January first.
    pub months: [ReportCell; MONTHS_PER_YEAR],
    /// One cell per quarter.
    pub quarters: [ReportCell; 4],
    /// Whole-year cell.
    pub annual: ReportCell,
}

/// The totals row across all categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsRow {
    /// Monthly column totals.
    pub months: [ReportCell; MONTHS_PER_YEAR],
    /// Quarter column totals.
    pub quarters: [ReportCell; 4],
    /// Whole-year total.
    pub annual: ReportCell,
}

/// Annual planned/actual for one entry type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSummary {
    /// Entry type.
    pub entry_type: EntryType,
    /// Number of categories of this type.
    pub categories: usize,
    /// Planned annual sum.
    pub planned: Decimal,
    /// Actual annual sum, absent counted as zero.
    pub actual: Decimal,
    /// `actual / planned` as a percentage.
    pub performance: Decimal,
}

/// Revenue minus cost minus expense.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetResult {
    /// Planned net result.
    pub planned: Decimal,
    /// Actual net result.
    pub actual: Decimal,
}

/// Complete derived dashboard view for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowReport {
    /// Reporting year.
    pub year: i32,
    /// Category rows in first-appearance order.
    pub rows: Vec<ReportRow>,
    /// Column totals.
    pub totals: TotalsRow,
    /// Summary per entry type, in revenue/cost/expense order.
    pub by_type: Vec<TypeSummary>,
    /// Net result for the year.
    pub net_result: NetResult,
}

impl CashFlowReport {
    /// Row for a category, if present.
    #[must_use]
    pub fn row(&self, category: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|row| row.category == category)
    }

    /// Summary for an entry type.
    #[must_use]
    pub fn summary(&self, entry_type: EntryType) -> Option<&TypeSummary> {
        self.by_type.iter().find(|s| s.entry_type == entry_type)
    }
}
