//! Cash-flow data types.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use cashflow_shared::types::EntryId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fiscal::{MONTHS_PER_YEAR, Month, Quarter};

/// Classification of a cash-flow entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Incoming money.
    Revenue,
    /// Direct cost of what is sold.
    Cost,
    /// Operating expense.
    Expense,
}

impl EntryType {
    /// All entry types in display order.
    pub const ALL: [Self; 3] = [Self::Revenue, Self::Cost, Self::Expense];
}

/// A single fetched cash-flow record.
///
/// Owned by the external data layer; the core only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Entry ID. Generated when missing from the payload.
    #[serde(default)]
    pub id: EntryId,
    /// Calendar year.
    pub year: i32,
    /// Month number, expected in `1..=12`. Not validated on construction.
    pub month: u8,
    /// Category name.
    pub category: String,
    /// Entry type.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Planned (budgeted) amount.
    pub planned_amount: Decimal,
    /// Actual amount, absent until recorded.
    #[serde(default)]
    pub actual_amount: Option<Decimal>,
}

impl Entry {
    /// Creates an entry with no actual amount and an empty description.
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        entry_type: EntryType,
        year: i32,
        month: u8,
        planned_amount: Decimal,
    ) -> Self {
        Self {
            id: EntryId::new(),
            year,
            month,
            category: category.into(),
            entry_type,
            description: String::new(),
            planned_amount,
            actual_amount: None,
        }
    }

    /// Sets the actual amount.
    #[must_use]
    pub fn with_actual(mut self, actual: Decimal) -> Self {
        self.actual_amount = Some(actual);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The entry's month, if it is in range.
    #[must_use]
    pub const fn month(&self) -> Option<Month> {
        Month::new(self.month)
    }
}

/// Planned/actual pair for one category in one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthCell {
    /// Planned amount, zero when no entry exists.
    pub planned: Decimal,
    /// Actual amount, absent when none was recorded.
    pub actual: Option<Decimal>,
}

impl MonthCell {
    /// Actual amount with absent treated as zero.
    #[must_use]
    pub fn actual_or_zero(&self) -> Decimal {
        self.actual.unwrap_or(Decimal::ZERO)
    }
}

impl From<&Entry> for MonthCell {
    fn from(entry: &Entry) -> Self {
        Self {
            planned: entry.planned_amount,
            actual: entry.actual_amount,
        }
    }
}

/// Planned and actual sums over a column (a month or a quarter).
///
/// Addition saturates at `Decimal::MAX` and `Decimal::MIN`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnTotal {
    /// Sum of planned amounts.
    pub planned: Decimal,
    /// Sum of actual amounts, absent counted as zero.
    pub actual: Decimal,
}

impl ColumnTotal {
    /// Creates a total from its parts.
    #[must_use]
    pub const fn new(planned: Decimal, actual: Decimal) -> Self {
        Self { planned, actual }
    }
}

impl From<&MonthCell> for ColumnTotal {
    fn from(cell: &MonthCell) -> Self {
        Self {
            planned: cell.planned,
            actual: cell.actual_or_zero(),
        }
    }
}

impl Add for ColumnTotal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            planned: self.planned.saturating_add(rhs.planned),
            actual: self.actual.saturating_add(rhs.actual),
        }
    }
}

impl AddAssign for ColumnTotal {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for ColumnTotal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a ColumnTotal> for ColumnTotal {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// One category with exactly twelve month cells (index 0 = January).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRow {
    /// Category name.
    pub category: String,
    /// Type of the first entry seen for this category.
    pub entry_type: EntryType,
    /// Month cells, January first.
    pub cells: [MonthCell; MONTHS_PER_YEAR],
}

impl CategoryRow {
    /// Creates a row with all months at their default.
    #[must_use]
    pub fn new(category: impl Into<String>, entry_type: EntryType) -> Self {
        Self {
            category: category.into(),
            entry_type,
            cells: [MonthCell::default(); MONTHS_PER_YEAR],
        }
    }

    /// Cell for a month.
    #[must_use]
    pub fn cell(&self, month: Month) -> &MonthCell {
        &self.cells[month.index()]
    }

    /// Sum of this category over the three months of a quarter.
    #[must_use]
    pub fn quarter_total(&self, quarter: Quarter) -> ColumnTotal {
        quarter
            .month_indices()
            .iter()
            .map(|&index| ColumnTotal::from(&self.cells[index]))
            .sum()
    }

    /// Sum of this category over the whole year.
    #[must_use]
    pub fn annual_total(&self) -> ColumnTotal {
        self.cells.iter().map(ColumnTotal::from).sum()
    }

    /// True if any cell in the given month indices has a recorded actual.
    ///
    /// Indices past December are ignored.
    #[must_use]
    pub fn has_actual_in(&self, indices: &[usize]) -> bool {
        indices
            .iter()
            .filter_map(|&index| self.cells.get(index))
            .any(|cell| cell.actual.is_some())
    }
}

/// Category rows in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryMatrix {
    rows: Vec<CategoryRow>,
}

impl CategoryMatrix {
    pub(crate) fn from_rows(rows: Vec<CategoryRow>) -> Self {
        Self { rows }
    }

    /// Rows in first-appearance order.
    #[must_use]
    pub fn rows(&self) -> &[CategoryRow] {
        &self.rows
    }

    /// Row for a category, if present.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&CategoryRow> {
        self.rows.iter().find(|row| row.category == category)
    }

    /// Category names in first-appearance order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.category.as_str())
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no category is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> IntoIterator for &'a CategoryMatrix {
    type Item = &'a CategoryRow;
    type IntoIter = std::slice::Iter<'a, CategoryRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
