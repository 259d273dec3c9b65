//! Report generation service.

use cashflow_shared::config::AnalysisBasis;
use rust_decimal::Decimal;
use tracing::debug;

use super::types::{
    CashFlowReport, NetResult, ReportCell, ReportOptions, ReportRow, TotalsRow, TypeSummary,
};
use crate::cashflow::{
    CategoryMatrix, CategoryRow, ColumnTotal, Entry, EntryType, aggregate, annual_total,
    monthly_totals, quarter_totals,
};
use crate::fiscal::{MONTHS_PER_YEAR, Quarter};
use crate::variance::{performance, performance_status, round_for_display, vertical_analysis};

const ALL_MONTHS: [usize; MONTHS_PER_YEAR] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

/// Service for deriving the dashboard view.
pub struct ReportService;

impl ReportService {
    /// Aggregates `entries` and derives the full report.
    ///
    /// `entries` are expected to be filtered to `year` already; `year` is only
    /// carried through to the output.
    #[must_use]
    pub fn build(year: i32, entries: &[Entry], options: ReportOptions) -> CashFlowReport {
        Self::from_matrix(year, &aggregate(entries), options)
    }

    /// Derives the report from an existing aggregation.
    #[must_use]
    pub fn from_matrix(year: i32, matrix: &CategoryMatrix, options: ReportOptions) -> CashFlowReport {
        let columns = Columns::new(matrix);

        let rows = matrix
            .rows()
            .iter()
            .map(|row| Self::build_row(row, &columns, options))
            .collect();
        let totals = Self::build_totals(matrix, &columns, options);
        let by_type = Self::summarize_types(matrix, options);
        let net_result = Self::net_result(&by_type);

        debug!(
            year,
            categories = matrix.len(),
            planned = %columns.annual.planned,
            actual = %columns.annual.actual,
            "Built cash-flow report"
        );

        CashFlowReport {
            year,
            rows,
            totals,
            by_type,
            net_result,
        }
    }

    fn build_row(row: &CategoryRow, columns: &Columns, options: ReportOptions) -> ReportRow {
        let months = std::array::from_fn(|index| {
            let cell = &row.cells[index];
            derive_cell(cell.planned, cell.actual, columns.months[index], options)
        });

        let quarters = Quarter::ALL.map(|quarter| {
            let total = row.quarter_total(quarter);
            let actual = row
                .has_actual_in(&quarter.month_indices())
                .then_some(total.actual);
            derive_cell(total.planned, actual, columns.quarters[quarter.index()], options)
        });

        let total = row.annual_total();
        let actual = row.has_actual_in(&ALL_MONTHS).then_some(total.actual);
        let annual = derive_cell(total.planned, actual, columns.annual, options);

        ReportRow {
            category: row.category.clone(),
            entry_type: row.entry_type,
            months,
            quarters,
            annual,
        }
    }

    fn build_totals(matrix: &CategoryMatrix, columns: &Columns, options: ReportOptions) -> TotalsRow {
        let any_actual =
            |indices: &[usize]| matrix.rows().iter().any(|row| row.has_actual_in(indices));
        let total_cell = |column: ColumnTotal, indices: &[usize]| {
            let actual = any_actual(indices).then_some(column.actual);
            derive_cell(column.planned, actual, column, options)
        };

        TotalsRow {
            months: std::array::from_fn(|index| total_cell(columns.months[index], &[index])),
            quarters: Quarter::ALL.map(|quarter| {
                total_cell(columns.quarters[quarter.index()], &quarter.month_indices())
            }),
            annual: total_cell(columns.annual, &ALL_MONTHS),
        }
    }

    fn summarize_types(matrix: &CategoryMatrix, options: ReportOptions) -> Vec<TypeSummary> {
        EntryType::ALL
            .iter()
            .map(|&entry_type| {
                let rows: Vec<&CategoryRow> = matrix
                    .rows()
                    .iter()
                    .filter(|row| row.entry_type == entry_type)
                    .collect();
                let total: ColumnTotal = rows.iter().map(|row| row.annual_total()).sum();
                let has_actual = rows.iter().any(|row| row.has_actual_in(&ALL_MONTHS));

                TypeSummary {
                    entry_type,
                    categories: rows.len(),
                    planned: total.planned,
                    actual: total.actual,
                    performance: display(
                        performance(total.planned, has_actual.then_some(total.actual)),
                        options,
                    ),
                }
            })
            .collect()
    }

    fn net_result(by_type: &[TypeSummary]) -> NetResult {
        by_type
            .iter()
            .fold(NetResult::default(), |mut net, summary| {
                match summary.entry_type {
                    EntryType::Revenue => {
                        net.planned = net.planned.saturating_add(summary.planned);
                        net.actual = net.actual.saturating_add(summary.actual);
                    }
                    EntryType::Cost | EntryType::Expense => {
                        net.planned = net.planned.saturating_sub(summary.planned);
                        net.actual = net.actual.saturating_sub(summary.actual);
                    }
                }
                net
            })
    }
}

struct Columns {
    months: [ColumnTotal; MONTHS_PER_YEAR],
    quarters: [ColumnTotal; 4],
    annual: ColumnTotal,
}

impl Columns {
    fn new(matrix: &CategoryMatrix) -> Self {
        let months = monthly_totals(matrix);
        Self {
            quarters: quarter_totals(&months),
            annual: annual_total(&months),
            months,
        }
    }
}

fn derive_cell(
    planned: Decimal,
    actual: Option<Decimal>,
    column: ColumnTotal,
    options: ReportOptions,
) -> ReportCell {
    let (slice, total) = match options.basis {
        AnalysisBasis::Actual => (actual.unwrap_or(Decimal::ZERO), column.actual),
        AnalysisBasis::Planned => (planned, column.planned),
    };

    ReportCell {
        planned,
        actual,
        performance: display(performance(planned, actual), options),
        status: performance_status(planned, actual),
        vertical_analysis: display(vertical_analysis(slice, total), options),
    }
}

fn display(value: Decimal, options: ReportOptions) -> Decimal {
    if options.round_for_display {
        round_for_display(value)
    } else {
        value
    }
}
