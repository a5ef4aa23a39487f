// Copyright (c) 2025 Momentum Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::ApiClient;
use crate::models::{HabitPatch, NewHabit};
use crate::utils::{maybe_print_json, parse_color, parse_date, pretty_table, today};
use anyhow::Result;

pub fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(api, sub)?,
        Some(("add", sub)) => add(api, sub)?,
        Some(("edit", sub)) => edit(api, sub)?,
        Some(("delete", sub)) => delete(api, sub)?,
        Some(("done", sub)) => done(api, sub)?,
        Some(("logs", sub)) => logs(api, sub)?,
        Some(("unlog", sub)) => unlog(api, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let habits = api.habits()?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &habits)? {
        return Ok(());
    }
    let rows = habits
        .iter()
        .map(|h| {
            vec![
                h.id.to_string(),
                format!("{} {}", h.icon, h.name),
                h.description.clone().unwrap_or_default(),
                format!("{}/wk", h.target_days),
                format!("{}d", h.current_streak),
                format!("{}d", h.longest_streak),
                h.total_completions.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["ID", "Habit", "Description", "Target", "Streak", "Best", "Total"],
            rows
        )
    );
    Ok(())
}

fn add(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let target = *sub.get_one::<u32>("target").unwrap();
    if !(1..=7).contains(&target) {
        anyhow::bail!("Target must be between 1 and 7 days per week");
    }
    let habit = NewHabit {
        name: sub.get_one::<String>("name").unwrap().clone(),
        description: sub.get_one::<String>("description").cloned(),
        icon: sub.get_one::<String>("icon").unwrap().clone(),
        color: parse_color(sub.get_one::<String>("color").unwrap())?,
        target_days: target,
    };
    let created = api.create_habit(&habit)?;
    println!("Created habit #{} {} {}", created.id, created.icon, created.name);
    Ok(())
}

fn edit(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut patch = HabitPatch {
        name: sub.get_one::<String>("name").cloned(),
        description: sub.get_one::<String>("description").cloned(),
        icon: sub.get_one::<String>("icon").cloned(),
        ..HabitPatch::default()
    };
    if let Some(color) = sub.get_one::<String>("color") {
        patch.color = Some(parse_color(color)?);
    }
    if let Some(target) = sub.get_one::<u32>("target") {
        if !(1..=7).contains(target) {
            anyhow::bail!("Target must be between 1 and 7 days per week");
        }
        patch.target_days = Some(*target);
    }
    if sub.get_flag("archive") {
        patch.is_active = Some(false);
    } else if sub.get_flag("restore") {
        patch.is_active = Some(true);
    }
    if patch.is_empty() {
        anyhow::bail!("Nothing to change; pass at least one field");
    }
    let updated = api.update_habit(id, &patch)?;
    println!("Updated habit #{} {} {}", updated.id, updated.icon, updated.name);
    Ok(())
}

fn delete(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    api.delete_habit(id)?;
    println!("Deleted habit #{}", id);
    Ok(())
}

fn done(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    let notes = sub.get_one::<String>("notes").cloned();
    // Upsert on the server side: marking an already-done day leaves it
    // done rather than flipping it back.
    let log = api.log_habit(id, date, notes)?;
    println!("Habit #{} marked done for {} (log #{})", id, log.date, log.id);
    Ok(())
}

fn logs(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let from = sub
        .get_one::<String>("from")
        .map(|s| parse_date(s))
        .transpose()?;
    let to = sub
        .get_one::<String>("to")
        .map(|s| parse_date(s))
        .transpose()?;
    let logs = api.habit_logs(id, from, to)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &logs)? {
        return Ok(());
    }
    let rows = logs
        .iter()
        .map(|l| {
            vec![
                l.id.to_string(),
                l.date.to_string(),
                if l.completed { "✓".into() } else { "·".into() },
                l.notes.clone().unwrap_or_default(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Log", "Date", "Done", "Notes"], rows));
    Ok(())
}

fn unlog(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let log_id = *sub.get_one::<i64>("log_id").unwrap();
    api.delete_habit_log(log_id)?;
    println!("Deleted log #{}", log_id);
    Ok(())
}
