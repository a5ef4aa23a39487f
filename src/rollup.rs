// Copyright (c) 2025 Momentum Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Anything keyed by a calendar day that carries an amount. Records
/// without a monetary value report zero and still bucket by day.
pub trait DayRecord {
    fn day(&self) -> NaiveDate;
    fn amount(&self) -> Decimal;
}

#[derive(Debug, Clone)]
pub struct DayBucket<T> {
    pub day: NaiveDate,
    pub records: Vec<T>,
    pub total: Decimal,
}

/// Bucket `records` by calendar day, keeping only those `keep` accepts,
/// and sum each day's amounts at full precision. Buckets come back in
/// descending day order; two-decimal rounding is left to the display
/// layer. Empty input yields an empty Vec.
pub fn group_by_day<T, F>(records: &[T], keep: F) -> Vec<DayBucket<T>>
where
    T: DayRecord + Clone,
    F: Fn(&T) -> bool,
{
    let mut buckets: BTreeMap<NaiveDate, DayBucket<T>> = BTreeMap::new();
    for r in records.iter().filter(|r| keep(r)) {
        let b = buckets.entry(r.day()).or_insert_with(|| DayBucket {
            day: r.day(),
            records: Vec::new(),
            total: Decimal::ZERO,
        });
        b.total += r.amount();
        b.records.push(r.clone());
    }
    buckets.into_values().rev().collect()
}

pub fn total_of<T: DayRecord>(records: &[T]) -> Decimal {
    records
        .iter()
        .fold(Decimal::ZERO, |acc, r| acc + r.amount())
}
