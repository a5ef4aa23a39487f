// Copyright (c) 2025 Momentum Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::ApiClient;
use crate::calendar;
use crate::commands::journal::stars;
use crate::models::{EntryType, JournalDraft, JournalEntry};
use crate::utils::{maybe_print_json, parse_month, parse_rating, pretty_table, today, truncate};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};

/// The skill-of-the-month garden rides on monthly journal entries: the
/// goal text names the skill and the progress map records which days
/// were practiced.
pub fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(api, sub)?,
        Some(("goal", sub)) => goal(api, sub)?,
        Some(("plant", _)) => plant(api)?,
        Some(("rate", sub)) => rate(api, sub)?,
        Some(("year", sub)) => year(api, sub)?,
        _ => show_month(api, calendar::first_of_month(today()))?,
    }
    Ok(())
}

fn month_anchor(sub: &clap::ArgMatches) -> Result<NaiveDate> {
    match sub.get_one::<String>("month") {
        Some(s) => {
            let (year, month) = parse_month(s)?;
            NaiveDate::from_ymd_opt(year, month, 1)
                .ok_or_else(|| anyhow::anyhow!("Invalid month {}-{}", year, month))
        }
        None => Ok(calendar::first_of_month(today())),
    }
}

fn show(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    show_month(api, month_anchor(sub)?)
}

fn show_month(api: &ApiClient, anchor: NaiveDate) -> Result<()> {
    let entry = api.journal_entry(EntryType::Monthly, anchor)?;
    let now = today();
    let days = calendar::days_in_month(anchor);

    println!("New Skill Challenge — {}", anchor.format("%B %Y"));
    match entry.goal_text.as_deref().filter(|g| !g.is_empty()) {
        Some(goal) => println!("This month's skill: {}", goal),
        None => println!("No skill set yet. Pick one with `momentum skill goal ...`."),
    }
    println!();
    print_garden(&entry, anchor, days, now);
    println!(
        "You can only plant today. {} / {} seedlings sprouted",
        entry.completed_days(),
        days
    );
    if let Some(rating) = entry.rating {
        println!("Month rating: {}", stars(rating));
    }
    if let Some(feedback) = entry.feedback.as_deref().filter(|f| !f.is_empty()) {
        println!("Reflection: {}", feedback);
    }
    Ok(())
}

// Day numbers flow left to right in rows of seven, unaligned to
// weekdays, exactly as the garden is drawn.
fn print_garden(entry: &JournalEntry, anchor: NaiveDate, days: u32, now: NaiveDate) {
    let cells: Vec<String> = (1..=days)
        .map(|day| {
            let planted = entry.daily_progress.get(&day).copied().unwrap_or(false);
            let is_today = calendar::in_month(now, anchor) && now.day() == day;
            let mark = if planted { "🌱" } else { "·" };
            if is_today {
                format!("[{:>2}]{}", day, mark)
            } else {
                format!(" {:>2} {}", day, mark)
            }
        })
        .collect();
    for row in cells.chunks(7) {
        println!("{}", row.join("  "));
    }
}

fn goal(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let anchor = month_anchor(sub)?;
    let text = sub.get_one::<String>("text").unwrap();

    let existing = api.journal_entry(EntryType::Monthly, anchor)?;
    let mut draft = JournalDraft::from_entry(&existing);
    draft.entry_type = EntryType::Monthly;
    draft.date = anchor;
    draft.goal_text = Some(text.clone());
    api.save_journal(&draft)?;
    println!("Skill for {}: {}", anchor.format("%B %Y"), text);
    Ok(())
}

fn plant(api: &ApiClient) -> Result<()> {
    let now = today();
    let anchor = calendar::first_of_month(now);

    let existing = api.journal_entry(EntryType::Monthly, anchor)?;
    let mut draft = JournalDraft::from_entry(&existing);
    draft.entry_type = EntryType::Monthly;
    draft.date = anchor;
    // Only today's square can be toggled; past and future days stay
    // locked.
    let day = now.day();
    let planted = !draft.daily_progress.get(&day).copied().unwrap_or(false);
    draft.daily_progress.insert(day, planted);
    api.save_journal(&draft)?;

    if planted {
        println!("Planted day {} 🌱", day);
    } else {
        println!("Unplanted day {}", day);
    }
    Ok(())
}

fn rate(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let now = today();
    if now != calendar::last_of_month(now) {
        anyhow::bail!("Rating opens on the last day of the month");
    }
    let anchor = calendar::first_of_month(now);
    let rating = parse_rating(sub.get_one::<String>("stars").unwrap())?;

    let existing = api.journal_entry(EntryType::Monthly, anchor)?;
    let mut draft = JournalDraft::from_entry(&existing);
    draft.entry_type = EntryType::Monthly;
    draft.date = anchor;
    draft.rating = Some(rating);
    if let Some(feedback) = sub.get_one::<String>("feedback") {
        draft.feedback = Some(feedback.clone());
    }
    api.save_journal(&draft)?;
    println!("Rated {} {}", anchor.format("%B %Y"), stars(rating));
    Ok(())
}

fn year(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let entries = api.journal_entries(Some(EntryType::Monthly), None, None)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &entries)? {
        return Ok(());
    }
    if entries.is_empty() {
        println!("No skills tracked yet. Start your first monthly challenge!");
        return Ok(());
    }
    let rows = entries
        .iter()
        .map(|e| {
            vec![
                e.date.format("%B %Y").to_string(),
                truncate(e.goal_text.as_deref().unwrap_or(""), 32),
                format!("{} days", e.completed_days()),
                e.rating.map(stars).unwrap_or_default(),
                truncate(e.feedback.as_deref().unwrap_or(""), 40),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Month", "Skill", "Progress", "Rating", "Reflection"], rows)
    );
    Ok(())
}
