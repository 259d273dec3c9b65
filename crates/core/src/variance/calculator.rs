//! Performance ratio and vertical analysis (AV).

use rust_decimal::{Decimal, RoundingStrategy};

use super::types::PerformanceStatus;

/// Decimal places kept by [`round_for_display`].
const DISPLAY_DP: u32 = 1;

/// `(part / whole) * 100` for a non-zero `whole`.
///
/// A ratio too large for `Decimal` saturates at `Decimal::MAX` or
/// `Decimal::MIN`, following the sign of the quotient.
fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if part.is_sign_negative() == whole.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        })
}

/// Actual as a percentage of planned: `(actual / planned) * 100`, unrounded.
///
/// Returns zero when `actual` is absent or `planned` is zero. Saturates
/// instead of overflowing.
#[must_use]
pub fn performance(planned: Decimal, actual: Option<Decimal>) -> Decimal {
    match actual {
        Some(actual) if !planned.is_zero() => percent_of(actual, planned),
        _ => Decimal::ZERO,
    }
}

/// Classifies the performance of a planned/actual pair.
#[must_use]
pub fn performance_status(planned: Decimal, actual: Option<Decimal>) -> PerformanceStatus {
    if actual.is_none() || planned.is_zero() {
        PerformanceStatus::NoSignal
    } else {
        PerformanceStatus::classify(performance(planned, actual))
    }
}

/// A slice's share of its column total: `(slice / total) * 100`.
///
/// Returns zero when the column total is zero. Saturates instead of
/// overflowing.
#[must_use]
pub fn vertical_analysis(slice: Decimal, column_total: Decimal) -> Decimal {
    if column_total.is_zero() {
        Decimal::ZERO
    } else {
        percent_of(slice, column_total)
    }
}

/// Rounds a percentage to one decimal place, midpoint away from zero.
#[must_use]
pub fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero)
}
