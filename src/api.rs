// Copyright (c) 2025 Momentum Labs.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{
    Budget, BudgetUpsert, CheckinCalendar, CheckinReceipt, CheckinStats, DailyBudget,
    DailyBudgetUpsert, EntryType, Expense, ExpensePatch, ExpenseSummary, Habit, HabitLog,
    HabitPatch, JournalDraft, JournalEntry, JournalPatch, NewExpense, NewHabit, NewHabitLog,
    NewUser, OverallProgress, Token, User,
};
use crate::utils;
use chrono::NaiveDate;
use log::debug;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Method;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// What can go wrong talking to the server: the call never left (or the
/// reply was unreadable), the server said no, or there is no session to
/// speak with. Callers surface these as status lines; nothing retries.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("cannot reach the server: {0}")]
    Network(#[source] reqwest::Error),
    #[error("{detail}")]
    Rejected { status: u16, detail: String },
    #[error("not logged in; run `momentum login` first")]
    NoSession,
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

pub struct ApiClient {
    base: String,
    token: Option<String>,
    http: Client,
}

impl ApiClient {
    pub fn new(base: &str, token: Option<String>) -> anyhow::Result<Self> {
        Ok(ApiClient {
            base: base.trim_end_matches('/').to_string(),
            token,
            http: utils::http_client()?,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn bearer(&self) -> ApiResult<&str> {
        self.token.as_deref().ok_or(ApiError::NoSession)
    }

    fn request(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        debug!("{} {}", method, path);
        let req = self
            .http
            .request(method, self.url(path))
            .bearer_auth(self.bearer()?);
        Ok(req)
    }

    fn send<T: DeserializeOwned>(req: RequestBuilder) -> ApiResult<T> {
        let resp = req.send().map_err(ApiError::Network)?;
        Self::decode(resp)
    }

    fn send_unit(req: RequestBuilder) -> ApiResult<()> {
        let resp = req.send().map_err(ApiError::Network)?;
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::rejection(resp))
    }

    fn decode<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
        let status = resp.status();
        if status.is_success() {
            return resp.json().map_err(ApiError::Network);
        }
        Err(Self::rejection(resp))
    }

    // The backend reports failures as {"detail": ...}; detail is a plain
    // string except for validation errors, which arrive as a list.
    fn rejection(resp: Response) -> ApiError {
        let status = resp.status();
        let detail = resp
            .json::<ErrorBody>()
            .ok()
            .and_then(|b| b.detail)
            .map(|d| match d {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        ApiError::Rejected {
            status: status.as_u16(),
            detail,
        }
    }

    // -- auth ------------------------------------------------------------

    pub fn register(&self, user: &NewUser) -> ApiResult<User> {
        debug!("POST /auth/register ({})", user.username);
        let req = self.http.post(self.url("/auth/register")).json(user);
        Self::send(req)
    }

    /// The login route speaks OAuth2 password-grant form encoding, not
    /// JSON.
    pub fn login(&self, username: &str, password: &str) -> ApiResult<Token> {
        debug!("POST /auth/login ({})", username);
        let req = self
            .http
            .post(self.url("/auth/login"))
            .form(&[("username", username), ("password", password)]);
        Self::send(req)
    }

    pub fn me(&self) -> ApiResult<User> {
        Self::send(self.request(Method::GET, "/auth/me")?)
    }

    // -- habits ----------------------------------------------------------

    pub fn habits(&self) -> ApiResult<Vec<Habit>> {
        Self::send(self.request(Method::GET, "/habits/")?)
    }

    pub fn create_habit(&self, habit: &NewHabit) -> ApiResult<Habit> {
        Self::send(self.request(Method::POST, "/habits/")?.json(habit))
    }

    pub fn update_habit(&self, id: i64, patch: &HabitPatch) -> ApiResult<Habit> {
        Self::send(
            self.request(Method::PUT, &format!("/habits/{}", id))?
                .json(patch),
        )
    }

    pub fn delete_habit(&self, id: i64) -> ApiResult<()> {
        Self::send_unit(self.request(Method::DELETE, &format!("/habits/{}", id))?)
    }

    pub fn habit_logs(
        &self,
        habit_id: i64,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> ApiResult<Vec<HabitLog>> {
        let mut req = self.request(Method::GET, &format!("/habits/{}/logs", habit_id))?;
        if let Some(d) = start {
            req = req.query(&[("start_date", d.to_string())]);
        }
        if let Some(d) = end {
            req = req.query(&[("end_date", d.to_string())]);
        }
        Self::send(req)
    }

    pub fn log_habit(
        &self,
        habit_id: i64,
        date: NaiveDate,
        notes: Option<String>,
    ) -> ApiResult<HabitLog> {
        let body = NewHabitLog::for_date(date, notes);
        Self::send(
            self.request(Method::POST, &format!("/habits/{}/logs", habit_id))?
                .json(&body),
        )
    }

    pub fn delete_habit_log(&self, log_id: i64) -> ApiResult<()> {
        Self::send_unit(self.request(Method::DELETE, &format!("/habits/logs/{}", log_id))?)
    }

    // -- progress --------------------------------------------------------

    pub fn overall_progress(&self) -> ApiResult<OverallProgress> {
        Self::send(self.request(Method::GET, "/progress/")?)
    }

    // -- journal ---------------------------------------------------------

    pub fn journal_entries(
        &self,
        entry_type: Option<EntryType>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> ApiResult<Vec<JournalEntry>> {
        let mut req = self.request(Method::GET, "/journal/entries")?;
        if let Some(t) = entry_type {
            req = req.query(&[("entry_type", t.to_string())]);
        }
        if let Some(d) = start {
            req = req.query(&[("start_date", d.to_string())]);
        }
        if let Some(d) = end {
            req = req.query(&[("end_date", d.to_string())]);
        }
        Self::send(req)
    }

    /// A miss comes back as an id-0 scaffold rather than a 404, so this
    /// always yields an entry to edit.
    pub fn journal_entry(&self, entry_type: EntryType, date: NaiveDate) -> ApiResult<JournalEntry> {
        Self::send(self.request(
            Method::GET,
            &format!("/journal/entry/{}/{}", entry_type, date),
        )?)
    }

    pub fn save_journal(&self, draft: &JournalDraft) -> ApiResult<JournalEntry> {
        Self::send(self.request(Method::POST, "/journal/save")?.json(draft))
    }

    pub fn update_journal_entry(&self, id: i64, patch: &JournalPatch) -> ApiResult<JournalEntry> {
        Self::send(
            self.request(Method::PUT, &format!("/journal/entries/{}", id))?
                .json(patch),
        )
    }

    pub fn delete_journal_entry(&self, id: i64) -> ApiResult<()> {
        Self::send_unit(self.request(Method::DELETE, &format!("/journal/entries/{}", id))?)
    }

    // -- check-ins -------------------------------------------------------

    pub fn record_checkin(&self) -> ApiResult<CheckinReceipt> {
        Self::send(self.request(Method::POST, "/checkins/today")?)
    }

    pub fn checkin_calendar(&self, year: i32, month: u32) -> ApiResult<CheckinCalendar> {
        Self::send(self.request(
            Method::GET,
            &format!("/checkins/calendar/{}/{}", year, month),
        )?)
    }

    pub fn checkin_stats(&self) -> ApiResult<CheckinStats> {
        Self::send(self.request(Method::GET, "/checkins/stats")?)
    }

    // -- expenses --------------------------------------------------------

    pub fn expense_summary(&self, month: u32, year: i32) -> ApiResult<ExpenseSummary> {
        Self::send(
            self.request(Method::GET, "/expenses/summary")?
                .query(&[("month", month.to_string()), ("year", year.to_string())]),
        )
    }

    pub fn add_expense(&self, expense: &NewExpense) -> ApiResult<Expense> {
        Self::send(self.request(Method::POST, "/expenses/today")?.json(expense))
    }

    pub fn update_expense(&self, id: i64, patch: &ExpensePatch) -> ApiResult<Expense> {
        Self::send(
            self.request(Method::PUT, &format!("/expenses/expense/{}", id))?
                .json(patch),
        )
    }

    pub fn delete_expense(&self, id: i64) -> ApiResult<()> {
        Self::send_unit(self.request(Method::DELETE, &format!("/expenses/expense/{}", id))?)
    }

    pub fn set_budget(&self, budget: &BudgetUpsert) -> ApiResult<Budget> {
        Self::send(self.request(Method::PUT, "/expenses/budget")?.json(budget))
    }

    pub fn set_daily_budget(&self, budget: &DailyBudgetUpsert) -> ApiResult<DailyBudget> {
        Self::send(
            self.request(Method::PUT, "/expenses/daily-budget")?
                .json(budget),
        )
    }

    pub fn daily_budget(&self, date: NaiveDate) -> ApiResult<Option<DailyBudget>> {
        Self::send(
            self.request(Method::GET, "/expenses/daily-budget")?
                .query(&[("budget_date", date.to_string())]),
        )
    }
}
