//! End-to-end: entry payload from the data layer through to the dashboard report.

use cashflow_core::cashflow::{
    AggregationCache, DatasetKey, Entry, EntryType, aggregate, monthly_totals, quarter_total,
};
use cashflow_core::fiscal::Quarter;
use cashflow_core::report::{ReportOptions, ReportService};
use cashflow_core::variance::PerformanceStatus;
use cashflow_shared::types::UserId;
use rust_decimal_macros::dec;

const PAYLOAD: &str = r#"[
    {"year": 2024, "month": 1, "category": "Sales", "type": "revenue",
     "description": "Store", "plannedAmount": "10000.00", "actualAmount": "11500.00"},
    {"year": 2024, "month": 2, "category": "Sales", "type": "revenue",
     "plannedAmount": 10000, "actualAmount": 9000},
    {"year": 2024, "month": 1, "category": "Suppliers", "type": "cost",
     "plannedAmount": "4000", "actualAmount": "4200"},
    {"year": 2024, "month": 1, "category": "Rent", "type": "expense",
     "plannedAmount": "1500"},
    {"year": 2024, "month": 1, "category": "Rent", "type": "expense",
     "plannedAmount": "1600", "actualAmount": "1600"},
    {"year": 2024, "month": 4, "category": "Rent", "type": "expense",
     "plannedAmount": "1600", "actualAmount": null}
]"#;

fn entries() -> Vec<Entry> {
    serde_json::from_str(PAYLOAD).expect("payload decodes")
}

#[test]
fn test_payload_decodes_with_absent_actuals() {
    let entries = entries();
    assert_eq!(entries.len(), 6);
    assert_eq!(entries[0].entry_type, EntryType::Revenue);
    assert_eq!(entries[0].description, "Store");
    assert_eq!(entries[1].planned_amount, dec!(10000));
    assert_eq!(entries[3].actual_amount, None);
    assert_eq!(entries[5].actual_amount, None);
    assert_ne!(entries[0].id, entries[1].id);
}

#[test]
fn test_matrix_from_payload() {
    let matrix = aggregate(&entries());
    let categories: Vec<&str> = matrix.categories().collect();
    assert_eq!(categories, vec!["Sales", "Suppliers", "Rent"]);

    // Second January rent entry wins.
    let rent = matrix.get("Rent").unwrap();
    assert_eq!(rent.cells[0].planned, dec!(1600));
    assert_eq!(rent.cells[0].actual, Some(dec!(1600)));
    assert_eq!(rent.cells[3].actual, None);

    let totals = monthly_totals(&matrix);
    assert_eq!(totals[0].planned, dec!(15600));
    assert_eq!(totals[0].actual, dec!(17300));
    assert_eq!(
        quarter_total(&totals, Quarter::Q1).planned,
        totals[0].planned + totals[1].planned + totals[2].planned
    );
}

#[test]
fn test_report_from_payload() {
    let report = ReportService::build(2024, &entries(), ReportOptions::default());

    let sales = report.row("Sales").unwrap();
    assert_eq!(sales.months[0].performance, dec!(115));
    assert_eq!(sales.months[0].status, PerformanceStatus::Met);
    assert_eq!(sales.months[1].performance, dec!(90));
    assert_eq!(sales.months[1].status, PerformanceStatus::Under);

    // Costs over plan still read as "met"; direction is not type-aware.
    let suppliers = report.row("Suppliers").unwrap();
    assert_eq!(suppliers.months[0].performance, dec!(105));
    assert_eq!(suppliers.months[0].status, PerformanceStatus::Met);

    let rent = report.row("Rent").unwrap();
    assert_eq!(rent.quarters[1].planned, dec!(1600));
    assert_eq!(rent.quarters[1].status, PerformanceStatus::NoSignal);

    assert_eq!(report.net_result.planned, dec!(20000) - dec!(4000) - dec!(3200));
    assert_eq!(report.net_result.actual, dec!(20500) - dec!(4200) - dec!(1600));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["rows"].as_array().unwrap().len(), 3);
    assert_eq!(json["rows"][0]["months"].as_array().unwrap().len(), 12);
    assert_eq!(json["rows"][0]["quarters"].as_array().unwrap().len(), 4);
}

#[test]
fn test_cached_report_matches_direct_report() {
    let entries = entries();
    let cache = AggregationCache::new();
    let key = DatasetKey::from_entries(UserId::new(), 2024, &entries);

    let matrix = cache.aggregate_cached(key, &entries);
    let cached = ReportService::from_matrix(2024, &matrix, ReportOptions::default());
    let direct = ReportService::build(2024, &entries, ReportOptions::default());
    assert_eq!(cached, direct);
}
