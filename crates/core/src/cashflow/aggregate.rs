//! Grouping of flat entries into the category/month matrix, and column totals.

use std::collections::HashMap;

use tracing::warn;

use super::error::CashFlowError;
use super::types::{CategoryMatrix, CategoryRow, ColumnTotal, Entry, MonthCell};
use crate::fiscal::{MONTHS_PER_YEAR, Month, Quarter};

/// Groups entries into one row per category, in order of first appearance.
///
/// Each `(category, month)` cell takes the values of the last entry for it in
/// input order; entries are never summed within a cell. Entries whose month is
/// outside `1..=12` are skipped with a warning and never create a row on their
/// own. Use [`try_aggregate`] to reject them instead.
#[must_use]
pub fn aggregate(entries: &[Entry]) -> CategoryMatrix {
    let mut builder = MatrixBuilder::default();

    for entry in entries {
        match entry.month() {
            Some(month) => builder.place(entry, month),
            None => warn!(
                entry_id = %entry.id,
                month = entry.month,
                category = %entry.category,
                "Skipping entry with month outside 1..=12"
            ),
        }
    }

    builder.finish()
}

/// Strict variant of [`aggregate`] that validates every entry first.
///
/// # Errors
///
/// Returns the first [`CashFlowError`] found by [`validate_entries`].
pub fn try_aggregate(entries: &[Entry]) -> Result<CategoryMatrix, CashFlowError> {
    validate_entries(entries)?;
    Ok(aggregate(entries))
}

/// Checks that every entry has an in-range month and a non-blank category.
///
/// Amounts are not checked; negative values are legal.
///
/// # Errors
///
/// Returns `CashFlowError::MonthOutOfRange` or `CashFlowError::EmptyCategory`
/// for the first offending entry.
pub fn validate_entries(entries: &[Entry]) -> Result<(), CashFlowError> {
    for entry in entries {
        if entry.month().is_none() {
            return Err(CashFlowError::MonthOutOfRange {
                entry_id: entry.id,
                month: entry.month,
            });
        }
        if entry.category.trim().is_empty() {
            return Err(CashFlowError::EmptyCategory(entry.id));
        }
    }
    Ok(())
}

/// Per-month totals across all categories, absent actuals counted as zero.
#[must_use]
pub fn monthly_totals(matrix: &CategoryMatrix) -> [ColumnTotal; MONTHS_PER_YEAR] {
    let mut totals = [ColumnTotal::default(); MONTHS_PER_YEAR];
    for row in matrix {
        for (total, cell) in totals.iter_mut().zip(row.cells.iter()) {
            *total += ColumnTotal::from(cell);
        }
    }
    totals
}

/// Sum of the three monthly totals at `3q, 3q+1, 3q+2`.
#[must_use]
pub fn quarter_total(totals: &[ColumnTotal; MONTHS_PER_YEAR], quarter: Quarter) -> ColumnTotal {
    quarter
        .month_indices()
        .iter()
        .map(|&index| totals[index])
        .sum()
}

/// All four quarter totals.
#[must_use]
pub fn quarter_totals(totals: &[ColumnTotal; MONTHS_PER_YEAR]) -> [ColumnTotal; 4] {
    Quarter::ALL.map(|quarter| quarter_total(totals, quarter))
}

/// Sum of all twelve monthly totals.
#[must_use]
pub fn annual_total(totals: &[ColumnTotal; MONTHS_PER_YEAR]) -> ColumnTotal {
    totals.iter().sum()
}

#[derive(Default)]
struct MatrixBuilder {
    rows: Vec<CategoryRow>,
    positions: HashMap<String, usize>,
}

impl MatrixBuilder {
    fn place(&mut self, entry: &Entry, month: Month) {
        let rows = &mut self.rows;
        let position = *self
            .positions
            .entry(entry.category.clone())
            .or_insert_with(|| {
                rows.push(CategoryRow::new(entry.category.clone(), entry.entry_type));
                rows.len() - 1
            });

        rows[position].cells[month.index()] = MonthCell::from(entry);
    }

    fn finish(self) -> CategoryMatrix {
        CategoryMatrix::from_rows(self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cashflow::types::EntryType;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn entry(category: &str, month: u8, planned: Decimal) -> Entry {
        Entry::new(category, EntryType::Expense, 2024, month, planned)
    }

    #[test]
    fn test_empty_input() {
        let matrix = aggregate(&[]);
        assert!(matrix.is_empty());

        let totals = monthly_totals(&matrix);
        assert_eq!(totals.len(), 12);
        assert!(totals.iter().all(|t| *t == ColumnTotal::default()));
    }

    #[test]
    fn test_rows_in_first_appearance_order() {
        let entries = vec![
            entry("Rent", 2, dec!(1000)),
            entry("Sales", 1, dec!(5000)),
            entry("Rent", 1, dec!(1000)),
            entry("Payroll", 3, dec!(2000)),
        ];
        let matrix = aggregate(&entries);
        let names: Vec<&str> = matrix.categories().collect();
        assert_eq!(names, vec!["Rent", "Sales", "Payroll"]);
    }

    #[test]
    fn test_missing_months_default() {
        let matrix = aggregate(&[entry("Rent", 5, dec!(800))]);
        let row = matrix.get("Rent").unwrap();

        assert_eq!(row.cells.len(), 12);
        assert_eq!(row.cells[4].planned, dec!(800));
        assert_eq!(row.cells[4].actual, None);
        for (index, cell) in row.cells.iter().enumerate() {
            if index != 4 {
                assert_eq!(*cell, MonthCell::default());
            }
        }
    }

    #[test]
    fn test_last_write_wins() {
        let entries = vec![
            entry("A", 1, dec!(10)).with_actual(dec!(7)),
            entry("A", 1, dec!(20)),
        ];
        let matrix = aggregate(&entries);
        let cell = matrix.get("A").unwrap().cells[0];

        assert_eq!(cell.planned, dec!(20));
        // The later entry replaces the whole cell, including its actual.
        assert_eq!(cell.actual, None);
    }

    #[test]
    fn test_out_of_range_month_is_skipped() {
        let entries = vec![
            entry("Ghost", 0, dec!(10)),
            entry("Ghost", 13, dec!(10)),
            entry("Rent", 12, dec!(10)),
        ];
        let matrix = aggregate(&entries);

        assert!(matrix.get("Ghost").is_none());
        assert_eq!(matrix.get("Rent").unwrap().cells[11].planned, dec!(10));
    }

    #[test]
    fn test_try_aggregate_rejects_out_of_range_month() {
        let bad = entry("Rent", 13, dec!(10));
        let id = bad.id;
        let err = try_aggregate(&[entry("Rent", 1, dec!(1)), bad]).unwrap_err();
        assert_eq!(err, CashFlowError::MonthOutOfRange { entry_id: id, month: 13 });
    }

    #[test]
    fn test_try_aggregate_rejects_blank_category() {
        let bad = entry("   ", 1, dec!(10));
        let id = bad.id;
        assert_eq!(
            try_aggregate(&[bad]).unwrap_err(),
            CashFlowError::EmptyCategory(id)
        );
    }

    #[test]
    fn test_negative_amounts_pass_through() {
        let entries = vec![
            entry("Refunds", 1, dec!(-50)).with_actual(dec!(-70)),
            entry("Sales", 1, dec!(100)).with_actual(dec!(90)),
        ];
        let matrix = try_aggregate(&entries).unwrap();
        let totals = monthly_totals(&matrix);
        assert_eq!(totals[0], ColumnTotal::new(dec!(50), dec!(20)));
    }

    #[test]
    fn test_monthly_and_quarter_totals() {
        let entries = vec![
            entry("Rent", 1, dec!(100)).with_actual(dec!(100)),
            entry("Rent", 2, dec!(100)),
            entry("Rent", 4, dec!(100)).with_actual(dec!(110)),
            entry("Power", 1, dec!(30)).with_actual(dec!(25)),
            entry("Power", 3, dec!(30)).with_actual(dec!(35)),
        ];
        let matrix = aggregate(&entries);
        let totals = monthly_totals(&matrix);

        assert_eq!(totals[0], ColumnTotal::new(dec!(130), dec!(125)));
        assert_eq!(totals[1], ColumnTotal::new(dec!(100), dec!(0)));
        assert_eq!(totals[2], ColumnTotal::new(dec!(30), dec!(35)));

        assert_eq!(
            quarter_total(&totals, Quarter::Q1),
            ColumnTotal::new(dec!(260), dec!(160))
        );
        assert_eq!(
            quarter_total(&totals, Quarter::Q2),
            ColumnTotal::new(dec!(100), dec!(110))
        );
        assert_eq!(quarter_total(&totals, Quarter::Q4), ColumnTotal::default());

        let quarters = quarter_totals(&totals);
        assert_eq!(quarters.iter().sum::<ColumnTotal>(), annual_total(&totals));

        let rent = matrix.get("Rent").unwrap();
        assert_eq!(
            rent.quarter_total(Quarter::Q1),
            ColumnTotal::new(dec!(200), dec!(100))
        );
        assert_eq!(rent.annual_total(), ColumnTotal::new(dec!(300), dec!(210)));
    }

    #[test]
    fn test_row_entry_type_comes_from_first_entry() {
        let entries = vec![
            Entry::new("Mixed", EntryType::Cost, 2024, 1, dec!(1)),
            Entry::new("Mixed", EntryType::Revenue, 2024, 2, dec!(1)),
        ];
        let matrix = aggregate(&entries);
        assert_eq!(matrix.get("Mixed").unwrap().entry_type, EntryType::Cost);
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let entries = vec![
            entry("A", 1, Decimal::MAX).with_actual(Decimal::MIN),
            entry("B", 1, Decimal::MAX).with_actual(Decimal::MIN),
            entry("C", 2, Decimal::MAX),
        ];
        let matrix = aggregate(&entries);
        let totals = monthly_totals(&matrix);

        assert_eq!(totals[0], ColumnTotal::new(Decimal::MAX, Decimal::MIN));
        assert_eq!(quarter_total(&totals, Quarter::Q1).planned, Decimal::MAX);
        assert_eq!(annual_total(&totals).actual, Decimal::MIN);
        assert_eq!(matrix.get("A").unwrap().annual_total().planned, Decimal::MAX);
    }

    #[test]
    fn test_has_actual_in_ignores_indices_past_december() {
        let matrix = aggregate(&[entry("Rent", 12, dec!(10)).with_actual(dec!(10))]);
        let rent = matrix.get("Rent").unwrap();

        assert!(rent.has_actual_in(&[11, 12, 99]));
        assert!(!rent.has_actual_in(&[12, 99]));
    }
}
