// Copyright (c) 2025 Momentum Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::rollup::DayRecord;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub icon: String,
    pub target_days: u32,
    pub is_active: bool,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub completion_rate: f64,
    pub total_completions: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewHabit {
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub icon: String,
    pub target_days: u32,
}

/// Partial habit update; only the fields that are set travel on the
/// wire.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HabitPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl HabitPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.color.is_none()
            && self.icon.is_none()
            && self.target_days.is_none()
            && self.is_active.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitLog {
    pub id: i64,
    pub habit_id: i64,
    pub date: NaiveDate,
    pub completed: bool,
    pub notes: Option<String>,
}

/// The completion upsert the server expects: `completed` is always
/// true, repeated posts for the same day leave the log completed rather
/// than toggling it back off.
#[derive(Debug, Clone, Serialize)]
pub struct NewHabitLog {
    pub date: NaiveDate,
    pub completed: bool,
    pub notes: Option<String>,
}

impl NewHabitLog {
    pub fn for_date(date: NaiveDate, notes: Option<String>) -> Self {
        NewHabitLog {
            date,
            completed: true,
            notes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyProgress {
    pub date: NaiveDate,
    pub total_habits: u32,
    pub completed_habits: u32,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyProgress {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub total_habits: u32,
    pub total_possible_completions: u32,
    pub actual_completions: u32,
    pub completion_rate: f64,
    pub daily_breakdown: Vec<DailyProgress>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyProgress {
    pub month: u32,
    pub year: i32,
    pub total_habits: u32,
    pub total_possible_completions: u32,
    pub actual_completions: u32,
    pub completion_rate: f64,
    pub weekly_breakdown: Vec<WeeklyProgress>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallProgress {
    pub daily: DailyProgress,
    pub weekly: WeeklyProgress,
    pub monthly: MonthlyProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryType::Daily => write!(f, "daily"),
            EntryType::Weekly => write!(f, "weekly"),
            EntryType::Monthly => write!(f, "monthly"),
        }
    }
}

impl FromStr for EntryType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(EntryType::Daily),
            "weekly" => Ok(EntryType::Weekly),
            "monthly" => Ok(EntryType::Monthly),
            other => Err(anyhow::anyhow!(
                "Invalid entry type '{}', expected daily|weekly|monthly",
                other
            )),
        }
    }
}

/// The per-day progress garden travels as a JSON object encoded inside
/// a string field; in memory it is a plain day-number -> done map.
/// Unparseable or absent wire values decode as an empty garden.
pub mod progress_map {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S>(map: &BTreeMap<u32, bool>, ser: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let encoded = serde_json::to_string(map).map_err(serde::ser::Error::custom)?;
        ser.serialize_str(&encoded)
    }

    pub fn deserialize<'de, D>(de: D) -> Result<BTreeMap<u32, bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(de)?;
        Ok(raw
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: i64,
    pub entry_type: EntryType,
    pub date: NaiveDate,
    pub content: Option<String>,
    pub goal_text: Option<String>,
    #[serde(default, with = "progress_map")]
    pub daily_progress: BTreeMap<u32, bool>,
    pub rating: Option<u8>,
    pub feedback: Option<String>,
}

impl JournalEntry {
    /// The server answers a miss with an id-0 scaffold instead of a 404.
    pub fn is_saved(&self) -> bool {
        self.id != 0
    }

    pub fn completed_days(&self) -> usize {
        self.daily_progress.values().filter(|v| **v).count()
    }
}

/// Partial update for an entry addressed by id; only set fields change.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JournalPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl JournalPatch {
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.goal_text.is_none()
            && self.rating.is_none()
            && self.feedback.is_none()
    }
}

/// Upsert payload for `POST /journal/save`, keyed server-side on
/// `(entry_type, date)`.
#[derive(Debug, Clone, Serialize)]
pub struct JournalDraft {
    pub entry_type: EntryType,
    pub date: NaiveDate,
    pub content: Option<String>,
    pub goal_text: Option<String>,
    #[serde(with = "progress_map")]
    pub daily_progress: BTreeMap<u32, bool>,
    pub rating: Option<u8>,
    pub feedback: Option<String>,
}

impl JournalDraft {
    pub fn from_entry(entry: &JournalEntry) -> Self {
        JournalDraft {
            entry_type: entry.entry_type,
            date: entry.date,
            content: entry.content.clone(),
            goal_text: entry.goal_text.clone(),
            daily_progress: entry.daily_progress.clone(),
            rating: entry.rating,
            feedback: entry.feedback.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinReceipt {
    pub message: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinCalendar {
    pub year: i32,
    pub month: u32,
    pub checkins: Vec<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinStats {
    pub total_checkins: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub this_month_checkins: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub note: Option<String>,
    pub date: NaiveDate,
}

impl DayRecord for Expense {
    fn day(&self) -> NaiveDate {
        self.date
    }

    fn amount(&self) -> Decimal {
        self.amount
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewExpense {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub note: Option<String>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpensePatch {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseSummary {
    pub month: u32,
    pub year: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub budget: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_spent: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub saved: Decimal,
    pub expenses: Vec<Expense>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetUpsert {
    pub month: u32,
    pub year: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub month: u32,
    pub year: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyBudgetUpsert {
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyBudget {
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}
