pub mod calendar;
pub mod comments;
pub mod days;
pub mod preferences;
pub mod tasks;

use chrono::{Local, NaiveDate};
use journal_shared::{calendar::CalendarError, WeekStart};
use uuid::Uuid;

use crate::error::AppError;
use crate::routes::AppState;

/// The server's local date.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Helper to turn path segments into a date
pub(crate) fn parse_day(year: i32, month: u32, day: u32) -> Result<NaiveDate, AppError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::InvalidDate { year, month, day }.into())
}

/// Helper to resolve the owner's week start, falling back to the configured default
pub(crate) async fn week_start_for(state: &AppState, owner: Uuid) -> Result<WeekStart, AppError> {
    Ok(state
        .store
        .week_start(owner)
        .await?
        .unwrap_or(state.config.default_week_start))
}
