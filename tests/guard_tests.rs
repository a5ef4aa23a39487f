// Copyright (c) 2025 Momentum Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use momentum::commands::expenses::validate_new_expense;
use momentum::commands::journal::{anchor_date, period_of};
use momentum::calendar::Period;
use momentum::models::EntryType;
use rust_decimal::Decimal;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn yesterdays_expense_is_rejected_before_the_api() {
    let now = d(2026, 2, 2);
    let err = validate_new_expense(Decimal::from(10), d(2026, 2, 1), now).unwrap_err();
    assert_eq!(err.to_string(), "You can only add or edit today's expense.");
}

#[test]
fn future_expenses_are_rejected_too() {
    let now = d(2026, 2, 2);
    assert!(validate_new_expense(Decimal::from(10), d(2026, 2, 3), now).is_err());
}

#[test]
fn non_positive_amounts_are_rejected() {
    let now = d(2026, 2, 2);
    let err = validate_new_expense(Decimal::ZERO, now, now).unwrap_err();
    assert_eq!(err.to_string(), "Enter a valid amount for today.");
    assert!(validate_new_expense("-3.5".parse().unwrap(), now, now).is_err());
}

#[test]
fn todays_expense_passes() {
    let now = d(2026, 2, 2);
    assert!(validate_new_expense("12.50".parse().unwrap(), now, now).is_ok());
}

#[test]
fn journal_entries_anchor_to_their_period_start() {
    let thursday = d(2026, 2, 5);
    assert_eq!(anchor_date(EntryType::Daily, thursday), thursday);
    assert_eq!(anchor_date(EntryType::Weekly, thursday), d(2026, 2, 2));
    assert_eq!(anchor_date(EntryType::Monthly, thursday), d(2026, 2, 1));
}

#[test]
fn entry_types_map_onto_edit_periods() {
    assert_eq!(period_of(EntryType::Daily), Period::Day);
    assert_eq!(period_of(EntryType::Weekly), Period::Week);
    assert_eq!(period_of(EntryType::Monthly), Period::Month);
}
