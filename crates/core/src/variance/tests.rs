//! Property-based tests for variance calculations.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calculator::{performance, performance_status, round_for_display, vertical_analysis};
use super::types::PerformanceStatus;

fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy covering the whole `Decimal` range, every scale included.
fn any_decimal() -> impl Strategy<Value = Decimal> {
    (any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>(), 0u32..=28).prop_map(
        |(lo, mid, hi, negative, scale)| Decimal::from_parts(lo, mid, hi, negative, scale),
    )
}

fn nonzero_amount() -> impl Strategy<Value = Decimal> {
    amount().prop_filter("non-zero", |d| !d.is_zero())
}

proptest! {
    /// Zero planned gives zero performance for any actual.
    #[test]
    fn prop_zero_planned_gives_zero(actual in proptest::option::of(amount())) {
        prop_assert_eq!(performance(Decimal::ZERO, actual), Decimal::ZERO);
        prop_assert_eq!(performance_status(Decimal::ZERO, actual), PerformanceStatus::NoSignal);
    }

    /// Absent actual gives zero performance for any planned.
    #[test]
    fn prop_absent_actual_gives_zero(planned in amount()) {
        prop_assert_eq!(performance(planned, None), Decimal::ZERO);
    }

    /// Meeting plan exactly is always 100%.
    #[test]
    fn prop_actual_equal_planned_is_hundred(planned in nonzero_amount()) {
        prop_assert_eq!(performance(planned, Some(planned)), Decimal::ONE_HUNDRED);
        prop_assert_eq!(performance_status(planned, Some(planned)), PerformanceStatus::Met);
    }

    /// Zero column total gives zero share for any slice.
    #[test]
    fn prop_zero_total_gives_zero_share(slice in amount()) {
        prop_assert_eq!(vertical_analysis(slice, Decimal::ZERO), Decimal::ZERO);
    }

    /// A slice that is the whole column is 100%.
    #[test]
    fn prop_whole_column_is_hundred(total in nonzero_amount()) {
        prop_assert_eq!(vertical_analysis(total, total), Decimal::ONE_HUNDRED);
    }
}

proptest! {
    /// Percentages stay defined across the whole `Decimal` range.
    #[test]
    fn prop_percentages_never_overflow(a in any_decimal(), b in any_decimal()) {
        let ratio = performance(b, Some(a));
        let share = vertical_analysis(a, b);
        prop_assert_eq!(ratio, share);

        let same_sign = a.is_sign_negative() == b.is_sign_negative();
        if !b.is_zero() && !a.is_zero() {
            let sign_ok = if same_sign { ratio >= Decimal::ZERO } else { ratio <= Decimal::ZERO };
            prop_assert!(sign_ok);
        }
        prop_assert!((round_for_display(ratio) - ratio).abs() <= Decimal::new(5, 2));
    }
}
