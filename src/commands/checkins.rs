// Copyright (c) 2025 Momentum Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::ApiClient;
use crate::calendar::{self, DayStatus};
use crate::models::CheckinStats;
use crate::utils::{parse_month, pretty_table, today};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use log::warn;
use std::collections::HashSet;

/// The profile view: opening it records today's check-in (at-least-once,
/// idempotent on the server), then renders the month calendar and the
/// streak statistics from fresh fetches.
pub fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let now = today();

    // Fire-and-forget: a failed recording must not block the render.
    if let Err(err) = api.record_checkin() {
        warn!("failed to record today's check-in: {}", err);
    }

    let stats = api.checkin_stats()?;
    if m.get_flag("stats") {
        print_stats(&stats);
        return Ok(());
    }

    let (year, month) = match m.get_one::<String>("month") {
        Some(s) => parse_month(s)?,
        None => (now.year(), now.month()),
    };
    let calendar = api.checkin_calendar(year, month)?;
    let index: HashSet<NaiveDate> = calendar.checkins.iter().copied().collect();
    let reference = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow::anyhow!("Invalid month {}-{}", year, month))?;

    println!("Daily Check-in Calendar — {}", reference.format("%B %Y"));
    print_grid(reference, &index, now);
    println!("✓ checked in   ✗ missed   [n] today");
    println!();
    print_stats(&stats);
    println!();
    if index.contains(&now) {
        println!("You're checked in for today. Keep the streak going!");
    } else {
        println!("Keep visiting daily to maintain your streak!");
    }
    Ok(())
}

fn print_grid(reference: NaiveDate, index: &HashSet<NaiveDate>, now: NaiveDate) {
    let grid = calendar::month_grid(reference);
    let rows = grid
        .chunks(7)
        .map(|week| week.iter().map(|d| cell(*d, index, reference, now)).collect())
        .collect();
    println!(
        "{}",
        pretty_table(&["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"], rows)
    );
}

fn cell(date: NaiveDate, index: &HashSet<NaiveDate>, reference: NaiveDate, now: NaiveDate) -> String {
    let day = date.day();
    match calendar::classify_day(date, index, reference, now) {
        DayStatus::OutOfMonth => String::new(),
        DayStatus::TodayChecked => format!("[{:>2}]✓", day),
        DayStatus::TodayUnchecked => format!("[{:>2}]", day),
        DayStatus::Checked => format!(" {:>2} ✓", day),
        DayStatus::PastMissed => format!(" {:>2} ✗", day),
        DayStatus::Future => format!(" {:>2}", day),
    }
}

fn print_stats(stats: &CheckinStats) {
    println!(
        "Total check-ins: {}   Current streak: {} days   Longest streak: {} days   This month: {} days",
        stats.total_checkins, stats.current_streak, stats.longest_streak, stats.this_month_checkins
    );
}
