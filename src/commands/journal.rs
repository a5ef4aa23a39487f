// Copyright (c) 2025 Momentum Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::ApiClient;
use crate::calendar::{self, Period};
use crate::models::{EntryType, JournalDraft, JournalPatch};
use crate::utils::{maybe_print_json, parse_date, parse_rating, pretty_table, today, truncate};
use anyhow::Result;
use chrono::NaiveDate;

pub fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(api, sub)?,
        Some(("write", sub)) => write(api, sub)?,
        Some(("edit", sub)) => edit(api, sub)?,
        Some(("list", sub)) => list(api, sub)?,
        Some(("delete", sub)) => delete(api, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn period_of(entry_type: EntryType) -> Period {
    match entry_type {
        EntryType::Daily => Period::Day,
        EntryType::Weekly => Period::Week,
        EntryType::Monthly => Period::Month,
    }
}

/// Entries are keyed by their period's first day: the day itself, the
/// week's Monday, or the first of the month.
pub fn anchor_date(entry_type: EntryType, date: NaiveDate) -> NaiveDate {
    match entry_type {
        EntryType::Daily => date,
        EntryType::Weekly => calendar::start_of_week(date),
        EntryType::Monthly => calendar::first_of_month(date),
    }
}

fn kind_and_date(sub: &clap::ArgMatches) -> Result<(EntryType, NaiveDate)> {
    let entry_type: EntryType = sub.get_one::<String>("type").unwrap().parse()?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    Ok((entry_type, anchor_date(entry_type, date)))
}

fn period_label(entry_type: EntryType, anchor: NaiveDate) -> String {
    match entry_type {
        EntryType::Daily => anchor.format("%A, %B %e, %Y").to_string(),
        EntryType::Weekly => format!("Week of {}", anchor.format("%b %e, %Y")),
        EntryType::Monthly => anchor.format("%B %Y").to_string(),
    }
}

fn show(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let (entry_type, anchor) = kind_and_date(sub)?;
    let entry = api.journal_entry(entry_type, anchor)?;
    let editable = calendar::is_current_period(period_of(entry_type), anchor, today());

    println!(
        "{} note — {} ({})",
        entry_type,
        period_label(entry_type, anchor),
        if editable { "editable now" } else { "view only" }
    );
    match entry.content.as_deref() {
        Some(content) if !content.is_empty() => println!("\n{}", content),
        _ => println!("\n(no entry yet)"),
    }
    if entry_type == EntryType::Monthly {
        if let Some(goal) = entry.goal_text.as_deref().filter(|g| !g.is_empty()) {
            println!("\nSkill goal: {}", goal);
        }
        println!(
            "Progress: {} day(s) logged",
            entry.completed_days()
        );
        if let Some(rating) = entry.rating {
            println!("Rating: {}", stars(rating));
        }
        if let Some(feedback) = entry.feedback.as_deref().filter(|f| !f.is_empty()) {
            println!("Reflection: {}", feedback);
        }
    }
    Ok(())
}

fn write(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let (entry_type, anchor) = kind_and_date(sub)?;
    if !calendar::is_current_period(period_of(entry_type), anchor, today()) {
        anyhow::bail!("Edits allowed only for the current period");
    }
    if entry_type != EntryType::Monthly
        && (sub.get_one::<String>("goal").is_some()
            || sub.get_one::<String>("rating").is_some()
            || sub.get_one::<String>("feedback").is_some())
    {
        anyhow::bail!("--goal, --rating, and --feedback apply to monthly entries only");
    }

    // Load-then-save so untouched fields (the progress garden above
    // all) survive the upsert.
    let existing = api.journal_entry(entry_type, anchor)?;
    let mut draft = JournalDraft::from_entry(&existing);
    draft.entry_type = entry_type;
    draft.date = anchor;
    if let Some(content) = sub.get_one::<String>("content") {
        draft.content = Some(content.clone());
    }
    if let Some(goal) = sub.get_one::<String>("goal") {
        draft.goal_text = Some(goal.clone());
    }
    if let Some(rating) = sub.get_one::<String>("rating") {
        draft.rating = Some(parse_rating(rating)?);
    }
    if let Some(feedback) = sub.get_one::<String>("feedback") {
        draft.feedback = Some(feedback.clone());
    }

    api.save_journal(&draft)?;
    println!("Saved ✓ ({} note, {})", entry_type, period_label(entry_type, anchor));
    Ok(())
}

fn edit(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut patch = JournalPatch {
        content: sub.get_one::<String>("content").cloned(),
        goal_text: sub.get_one::<String>("goal").cloned(),
        feedback: sub.get_one::<String>("feedback").cloned(),
        ..JournalPatch::default()
    };
    if let Some(rating) = sub.get_one::<String>("rating") {
        patch.rating = Some(parse_rating(rating)?);
    }
    if patch.is_empty() {
        anyhow::bail!("Nothing to change; pass at least one field");
    }
    let updated = api.update_journal_entry(id, &patch)?;
    println!(
        "Updated entry #{} ({} note, {})",
        updated.id,
        updated.entry_type,
        period_label(updated.entry_type, updated.date)
    );
    Ok(())
}

fn list(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let entry_type = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<EntryType>())
        .transpose()?;
    let limit = *sub.get_one::<usize>("limit").unwrap();
    let mut entries = api.journal_entries(entry_type, None, None)?;
    entries.truncate(limit);

    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &entries)? {
        return Ok(());
    }
    if entries.is_empty() {
        println!("No entries yet. Start writing!");
        return Ok(());
    }
    let rows = entries
        .iter()
        .map(|e| {
            let snippet = e
                .content
                .as_deref()
                .filter(|c| !c.is_empty())
                .or(e.goal_text.as_deref())
                .unwrap_or("No content");
            vec![
                e.id.to_string(),
                e.entry_type.to_string(),
                e.date.to_string(),
                truncate(snippet, 48),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["ID", "Type", "Date", "Content"], rows));
    Ok(())
}

fn delete(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    api.delete_journal_entry(id)?;
    println!("Deleted entry #{}", id);
    Ok(())
}

pub fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
