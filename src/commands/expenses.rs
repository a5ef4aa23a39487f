// Copyright (c) 2025 Momentum Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::ApiClient;
use crate::calendar;
use crate::models::{BudgetUpsert, DailyBudgetUpsert, ExpensePatch, NewExpense};
use crate::rollup;
use crate::utils::{
    fmt_money, maybe_print_json, parse_date, parse_decimal, parse_month, pretty_table, today,
};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

pub fn handle(api: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(api, sub)?,
        Some(("add", sub)) => add(api, sub)?,
        Some(("edit", sub)) => edit(api, sub)?,
        Some(("delete", sub)) => delete(api, sub)?,
        Some(("budget", sub)) => budget(api, sub)?,
        Some(("daily-budget", sub)) => daily_budget(api, sub)?,
        _ => {}
    }
    Ok(())
}

/// Expenses may only be created or edited on the day they happened;
/// everything else is rejected before an API call goes out. The server
/// enforces the same rule again.
pub fn validate_new_expense(amount: Decimal, date: NaiveDate, now: NaiveDate) -> Result<()> {
    if amount <= Decimal::ZERO {
        anyhow::bail!("Enter a valid amount for today.");
    }
    if date != now {
        anyhow::bail!("You can only add or edit today's expense.");
    }
    Ok(())
}

fn summary(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let now = today();
    let (year, month) = match sub.get_one::<String>("month") {
        Some(s) => parse_month(s)?,
        None => (now.year(), now.month()),
    };
    let summary = api.expense_summary(month, year)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &summary)? {
        return Ok(());
    }

    let reference = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow::anyhow!("Invalid month {}-{}", year, month))?;
    println!("Expenses — {}", reference.format("%B %Y"));
    println!(
        "Budget {}   Spent {}   Saved {}",
        fmt_money(&summary.budget),
        fmt_money(&summary.total_spent),
        fmt_money(&summary.saved)
    );
    if summary.budget > Decimal::ZERO {
        let used = (summary.total_spent / summary.budget * Decimal::from(100)).round_dp(0);
        println!("Budget used: {}%", used.min(Decimal::from(100)));
    }
    println!();

    if summary.expenses.is_empty() {
        println!("No expenses for {}.", reference.format("%B %Y"));
        return Ok(());
    }

    let mut listed = summary.expenses.clone();
    listed.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    let rows = listed
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.date.format("%d %b").to_string(),
                fmt_money(&e.amount),
                e.note.clone().unwrap_or_default(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["ID", "Date", "Amount", "Note"], rows));

    let buckets = rollup::group_by_day(&summary.expenses, |e| calendar::in_month(e.date, reference));
    println!();
    println!("Daily totals");
    let rows = buckets
        .iter()
        .map(|b| {
            vec![
                b.day.format("%d %b").to_string(),
                fmt_money(&b.total),
                format!("{} item(s)", b.records.len()),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Day", "Total", "Entries"], rows));
    Ok(())
}

fn add(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    validate_new_expense(amount, date, today())?;

    let expense = NewExpense {
        amount,
        note: sub.get_one::<String>("note").cloned(),
        date,
    };
    let saved = api.add_expense(&expense)?;
    println!(
        "Saved {} for today (expense #{}). You can edit again today.",
        fmt_money(&saved.amount),
        saved.id
    );
    Ok(())
}

fn edit(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    if amount <= Decimal::ZERO {
        anyhow::bail!("Enter a valid amount for today.");
    }
    let patch = ExpensePatch {
        amount,
        note: sub.get_one::<String>("note").cloned(),
    };
    let updated = api.update_expense(id, &patch)?;
    println!("Updated expense #{} to {}", updated.id, fmt_money(&updated.amount));
    Ok(())
}

fn delete(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    api.delete_expense(id)?;
    println!("Deleted expense #{}", id);
    Ok(())
}

fn budget(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let now = today();
    let (year, month) = match sub.get_one::<String>("month") {
        Some(s) => parse_month(s)?,
        None => (now.year(), now.month()),
    };
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    if amount < Decimal::ZERO {
        anyhow::bail!("Budget cannot be negative");
    }
    let saved = api.set_budget(&BudgetUpsert {
        month,
        year,
        amount,
    })?;
    println!(
        "Budget saved for {}-{:02}: {}",
        saved.year,
        saved.month,
        fmt_money(&saved.amount)
    );
    Ok(())
}

fn daily_budget(api: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    match sub.get_one::<String>("amount") {
        Some(raw) => {
            let amount = parse_decimal(raw)?;
            if amount < Decimal::ZERO {
                anyhow::bail!("Budget cannot be negative");
            }
            let saved = api.set_daily_budget(&DailyBudgetUpsert { date, amount })?;
            println!("Daily budget for {}: {}", saved.date, fmt_money(&saved.amount));
        }
        None => match api.daily_budget(date)? {
            Some(b) => println!("Daily budget for {}: {}", b.date, fmt_money(&b.amount)),
            None => println!("No daily budget set for {}.", date),
        },
    }
    Ok(())
}
