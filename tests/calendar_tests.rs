// Copyright (c) 2025 Momentum Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate, Weekday};
use momentum::calendar::{
    classify_day, days_in_month, first_of_month, is_current_period, last_of_month, month_grid,
    start_of_week, DayStatus, Period,
};
use std::collections::HashSet;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn month_grid_is_week_aligned() {
    // A spread of shapes: leap February, non-leap February, a month
    // starting on Monday, one ending on Sunday, and a six-week August.
    for reference in [
        d(2024, 2, 15),
        d(2026, 2, 10),
        d(2025, 9, 1),
        d(2026, 5, 31),
        d(2026, 8, 20),
    ] {
        let grid = month_grid(reference);
        assert_eq!(grid.len() % 7, 0, "grid for {} not in whole weeks", reference);
        assert_eq!(grid.first().unwrap().weekday(), Weekday::Mon);
        assert_eq!(grid.last().unwrap().weekday(), Weekday::Sun);

        // Every day of the month appears exactly once.
        for day in 1..=days_in_month(reference) {
            let date = d(reference.year(), reference.month(), day);
            assert_eq!(grid.iter().filter(|g| **g == date).count(), 1);
        }

        // Consecutive and ascending throughout.
        for pair in grid.windows(2) {
            assert_eq!(pair[1], pair[0] + chrono::Duration::days(1));
        }
    }
}

#[test]
fn month_grid_starts_on_the_first_when_it_is_a_monday() {
    // September 2025 begins on a Monday, so no padding in front.
    let grid = month_grid(d(2025, 9, 14));
    assert_eq!(grid[0], d(2025, 9, 1));
    assert_eq!(*grid.last().unwrap(), d(2025, 10, 5));
}

#[test]
fn month_boundaries() {
    assert_eq!(first_of_month(d(2026, 2, 17)), d(2026, 2, 1));
    assert_eq!(last_of_month(d(2026, 2, 17)), d(2026, 2, 28));
    assert_eq!(last_of_month(d(2024, 2, 3)), d(2024, 2, 29));
    assert_eq!(last_of_month(d(2026, 12, 31)), d(2026, 12, 31));
    assert_eq!(days_in_month(d(2026, 4, 9)), 30);
}

#[test]
fn start_of_week_is_monday() {
    assert_eq!(start_of_week(d(2026, 2, 2)), d(2026, 2, 2)); // already Monday
    assert_eq!(start_of_week(d(2026, 2, 8)), d(2026, 2, 2)); // Sunday
    assert_eq!(start_of_week(d(2026, 2, 5)), d(2026, 2, 2)); // Thursday
}

#[test]
fn classify_day_precedence() {
    let reference = d(2026, 2, 1);
    let today = d(2026, 2, 10);
    let index: HashSet<NaiveDate> = [d(2026, 2, 3), d(2026, 2, 10), d(2026, 1, 31)]
        .into_iter()
        .collect();

    // Out-of-month wins even when the date is in the index.
    assert_eq!(
        classify_day(d(2026, 1, 31), &index, reference, today),
        DayStatus::OutOfMonth
    );
    assert_eq!(
        classify_day(d(2026, 2, 10), &index, reference, today),
        DayStatus::TodayChecked
    );
    assert_eq!(
        classify_day(d(2026, 2, 3), &index, reference, today),
        DayStatus::Checked
    );
    assert_eq!(
        classify_day(d(2026, 2, 4), &index, reference, today),
        DayStatus::PastMissed
    );
    assert_eq!(
        classify_day(d(2026, 2, 11), &index, reference, today),
        DayStatus::Future
    );
}

#[test]
fn classify_day_today_unchecked() {
    let index = HashSet::new();
    assert_eq!(
        classify_day(d(2026, 2, 10), &index, d(2026, 2, 1), d(2026, 2, 10)),
        DayStatus::TodayUnchecked
    );
}

#[test]
fn today_outside_the_viewed_month_is_out_of_month() {
    // March 1st sits in February's grid tail; viewing February it must
    // classify as out-of-month, not as today.
    let index: HashSet<NaiveDate> = [d(2026, 3, 1)].into_iter().collect();
    assert_eq!(
        classify_day(d(2026, 3, 1), &index, d(2026, 2, 1), d(2026, 3, 1)),
        DayStatus::OutOfMonth
    );
}

#[test]
fn each_grid_day_gets_exactly_one_status() {
    let reference = d(2026, 2, 1);
    let today = d(2026, 2, 1);
    let index: HashSet<NaiveDate> = [d(2026, 2, 1)].into_iter().collect();
    for date in month_grid(reference) {
        let status = classify_day(date, &index, reference, today);
        let out = date.month() != reference.month() || date.year() != reference.year();
        assert_eq!(status == DayStatus::OutOfMonth, out, "{} -> {:?}", date, status);
    }
}

#[test]
fn first_checkin_of_the_month_counts_as_today() {
    let index: HashSet<NaiveDate> = [d(2026, 2, 1)].into_iter().collect();
    assert_eq!(
        classify_day(d(2026, 2, 1), &index, d(2026, 2, 1), d(2026, 2, 1)),
        DayStatus::TodayChecked
    );
}

#[test]
fn current_period_day() {
    let now = d(2026, 2, 10);
    assert!(is_current_period(Period::Day, now, now));
    assert!(!is_current_period(Period::Day, d(2026, 2, 9), now));
}

#[test]
fn current_period_week_honors_monday_start() {
    let now = d(2026, 2, 10); // Tuesday, week of Feb 9
    assert!(is_current_period(Period::Week, d(2026, 2, 9), now));
    assert!(is_current_period(Period::Week, d(2026, 2, 15), now)); // Sunday same week
    assert!(!is_current_period(Period::Week, d(2026, 2, 8), now)); // Sunday before
    assert!(!is_current_period(Period::Week, d(2026, 2, 16), now)); // next Monday
}

#[test]
fn current_period_month() {
    let now = d(2026, 2, 10);
    assert!(is_current_period(Period::Month, now, now));
    assert!(is_current_period(Period::Month, d(2026, 2, 28), now));
    assert!(!is_current_period(Period::Month, d(2026, 1, 10), now));
    // Same month number, different year.
    assert!(!is_current_period(Period::Month, d(2025, 2, 10), now));
}
