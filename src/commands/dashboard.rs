// Copyright (c) 2025 Momentum Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::ApiClient;
use crate::models::{OverallProgress, WeeklyProgress};
use crate::utils::{fmt_percent, pretty_table, today};
use anyhow::Result;

/// One render of the home screen: the habit list with today's
/// completion per habit, plus the server-computed progress rollups.
pub fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let now = today();
    let habits = api.habits()?;
    let progress = api.overall_progress()?;

    println!("Today's Progress — {}", now.format("%A, %B %e, %Y"));
    println!();

    if habits.is_empty() {
        println!("No habits yet. Start one with `momentum habit add --name ...`.");
    } else {
        let mut rows = Vec::new();
        for habit in &habits {
            // One log query per habit, today only, matching what the
            // page renders.
            let logs = api.habit_logs(habit.id, Some(now), Some(now))?;
            let done = logs.iter().any(|l| l.completed);
            rows.push(vec![
                habit.id.to_string(),
                format!("{} {}", habit.icon, habit.name),
                if done { "✓".to_string() } else { "·".to_string() },
                format!("{}d", habit.current_streak),
                fmt_percent(habit.completion_rate),
                format!("{}/wk", habit.target_days),
            ]);
        }
        println!(
            "{}",
            pretty_table(&["ID", "Habit", "Today", "Streak", "30d Rate", "Target"], rows)
        );
    }

    println!();
    print_summary(&progress);

    if m.get_flag("stats") {
        println!();
        print_breakdown(&progress);
    }
    Ok(())
}

fn print_summary(progress: &OverallProgress) {
    println!(
        "Today       {:>3}/{:<3} habits   {}",
        progress.daily.completed_habits,
        progress.daily.total_habits,
        fmt_percent(progress.daily.completion_rate)
    );
    println!(
        "This week   {:>3}/{:<3} logs     {}",
        progress.weekly.actual_completions,
        progress.weekly.total_possible_completions,
        fmt_percent(progress.weekly.completion_rate)
    );
    println!(
        "This month  {:>3}/{:<3} logs     {}",
        progress.monthly.actual_completions,
        progress.monthly.total_possible_completions,
        fmt_percent(progress.monthly.completion_rate)
    );
}

fn print_breakdown(progress: &OverallProgress) {
    println!("This week, day by day:");
    println!("{}", week_table(&progress.weekly));

    println!();
    println!("This month, week by week:");
    let rows = progress
        .monthly
        .weekly_breakdown
        .iter()
        .map(|w| {
            vec![
                format!("{} – {}", w.week_start, w.week_end),
                format!("{}/{}", w.actual_completions, w.total_possible_completions),
                fmt_percent(w.completion_rate),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Week", "Done", "Rate"], rows));
}

fn week_table(week: &WeeklyProgress) -> comfy_table::Table {
    let rows = week
        .daily_breakdown
        .iter()
        .map(|d| {
            vec![
                d.date.format("%a %d").to_string(),
                format!("{}/{}", d.completed_habits, d.total_habits),
                fmt_percent(d.completion_rate),
            ]
        })
        .collect();
    pretty_table(&["Day", "Done", "Rate"], rows)
}
