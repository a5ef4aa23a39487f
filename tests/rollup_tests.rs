// Copyright (c) 2025 Momentum Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use momentum::calendar::in_month;
use momentum::models::Expense;
use momentum::rollup::{group_by_day, total_of};
use rust_decimal::Decimal;

fn expense(id: i64, date: &str, amount: &str) -> Expense {
    Expense {
        id,
        amount: amount.parse::<Decimal>().unwrap(),
        note: None,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
    }
}

#[test]
fn buckets_by_day_descending_with_full_precision_sums() {
    let records = vec![
        expense(1, "2026-02-01", "12.5"),
        expense(2, "2026-02-01", "7.5"),
        expense(3, "2026-02-02", "5"),
    ];
    let view = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
    let buckets = group_by_day(&records, |e| in_month(e.date, view));

    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].day.to_string(), "2026-02-02");
    assert_eq!(buckets[0].total, Decimal::from(5));
    assert_eq!(buckets[0].records.len(), 1);
    assert_eq!(buckets[1].day.to_string(), "2026-02-01");
    assert_eq!(buckets[1].total, "20.0".parse::<Decimal>().unwrap());
    assert_eq!(buckets[1].records.len(), 2);

    assert_eq!(total_of(&records), "25.0".parse::<Decimal>().unwrap());
}

#[test]
fn empty_input_yields_no_buckets() {
    let records: Vec<Expense> = Vec::new();
    assert!(group_by_day(&records, |_| true).is_empty());
    assert_eq!(total_of(&records), Decimal::ZERO);
}

#[test]
fn filter_runs_before_grouping() {
    let records = vec![
        expense(1, "2026-02-01", "10"),
        expense(2, "2026-01-31", "99"),
        expense(3, "2026-03-01", "99"),
    ];
    let view = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
    let buckets = group_by_day(&records, |e| in_month(e.date, view));
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].total, Decimal::from(10));
}

#[test]
fn regrouping_flattened_buckets_preserves_sums() {
    let records = vec![
        expense(1, "2026-02-01", "12.5"),
        expense(2, "2026-02-01", "7.5"),
        expense(3, "2026-02-02", "5"),
        expense(4, "2026-02-14", "0.01"),
    ];
    let buckets = group_by_day(&records, |_| true);
    let bucket_sum = buckets
        .iter()
        .fold(Decimal::ZERO, |acc, b| acc + b.total);
    assert_eq!(bucket_sum, total_of(&records));

    let flattened: Vec<Expense> = buckets.iter().flat_map(|b| b.records.clone()).collect();
    let regrouped = group_by_day(&flattened, |_| true);
    assert_eq!(regrouped.len(), buckets.len());
    for (a, b) in regrouped.iter().zip(buckets.iter()) {
        assert_eq!(a.day, b.day);
        assert_eq!(a.total, b.total);
    }
}

#[test]
fn cents_survive_aggregation_without_float_drift() {
    // 0.1 + 0.2 is exactly 0.3 in decimal arithmetic.
    let records = vec![
        expense(1, "2026-02-01", "0.1"),
        expense(2, "2026-02-01", "0.2"),
    ];
    let buckets = group_by_day(&records, |_| true);
    assert_eq!(buckets[0].total, "0.3".parse::<Decimal>().unwrap());
}
