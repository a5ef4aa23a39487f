// Copyright (c) 2025 Momentum Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use std::collections::HashSet;

pub fn first_of_month(d: NaiveDate) -> NaiveDate {
    d - Duration::days(d.day() as i64 - 1)
}

pub fn last_of_month(d: NaiveDate) -> NaiveDate {
    first_of_month(d) + Months::new(1) - Duration::days(1)
}

pub fn days_in_month(d: NaiveDate) -> u32 {
    last_of_month(d).day()
}

/// Monday of the week containing `d`.
pub fn start_of_week(d: NaiveDate) -> NaiveDate {
    d - Duration::days(d.weekday().num_days_from_monday() as i64)
}

pub fn in_month(d: NaiveDate, reference: NaiveDate) -> bool {
    d.year() == reference.year() && d.month() == reference.month()
}

/// The week-aligned grid of dates shown for the month containing
/// `reference`: from the Monday on or before the 1st through the Sunday
/// on or after the last day, ascending. Always a multiple of seven long.
pub fn month_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    let first = start_of_week(first_of_month(reference));
    let last_of = last_of_month(reference);
    let last = last_of + Duration::days((6 - last_of.weekday().num_days_from_monday()) as i64);
    let mut days = Vec::with_capacity(42);
    let mut d = first;
    while d <= last {
        days.push(d);
        d = d + Duration::days(1);
    }
    debug_assert!(days.len() % 7 == 0);
    debug_assert_eq!(days[0].weekday(), Weekday::Mon);
    days
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    OutOfMonth,
    TodayChecked,
    TodayUnchecked,
    Checked,
    PastMissed,
    Future,
}

/// Classify one grid cell against the set of checked-in dates. First
/// match wins: out-of-month, today (checked or not), checked, past
/// without a check-in, future. "Today" means calendar-day equality in
/// the caller's clock, typically local time.
pub fn classify_day(
    date: NaiveDate,
    index: &HashSet<NaiveDate>,
    reference: NaiveDate,
    today: NaiveDate,
) -> DayStatus {
    if !in_month(date, reference) {
        return DayStatus::OutOfMonth;
    }
    let checked = index.contains(&date);
    if date == today {
        if checked {
            return DayStatus::TodayChecked;
        }
        return DayStatus::TodayUnchecked;
    }
    if checked {
        DayStatus::Checked
    } else if date < today {
        DayStatus::PastMissed
    } else {
        DayStatus::Future
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Week,
    Month,
}

/// Whether `viewed` falls inside the current day/week/month. Weeks start
/// on Monday. Gates edits so past and future periods stay read-only.
pub fn is_current_period(period: Period, viewed: NaiveDate, now: NaiveDate) -> bool {
    match period {
        Period::Day => viewed == now,
        Period::Week => start_of_week(viewed) == start_of_week(now),
        Period::Month => in_month(viewed, now),
    }
}
