use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::{Datelike, NaiveDate};
use journal_shared::{
    api::{CalendarParams, MonthCalendar, StreakResponse},
    calendar::{
        build_month_grid, bucket_days, month_start, next_month_first_day,
        previous_month_first_day, summarize, week_labels, CalendarError,
    },
    DateField,
};
use uuid::Uuid;

use super::{today, week_start_for};
use crate::auth::AuthUser;
use crate::error::AppError;
use crate::routes::AppState;

/// Compose the month page for `owner`: grid, tagged days and streak.
pub(crate) async fn build_month_calendar(
    state: &AppState,
    owner: Uuid,
    anchor: NaiveDate,
    field: DateField,
    today: NaiveDate,
) -> Result<MonthCalendar, AppError> {
    let week_start = week_start_for(state, owner).await?;
    let grid = build_month_grid(anchor.year(), anchor.month(), week_start)?;
    let range = grid.range();

    let tasks = state.store.find_tasks(owner, field, range).await?;
    let comments = state.store.find_comments(owner, range).await?;
    let weeks = bucket_days(grid.weeks(), field, &tasks, &comments)?;

    let history = state.store.find_all_tasks(owner).await?;
    let streak = summarize(&history, today);

    tracing::debug!(
        owner = %owner,
        year = grid.year(),
        month = grid.month(),
        weeks = weeks.len(),
        tasks = tasks.len(),
        comments = comments.len(),
        "Built month calendar"
    );

    let month_current = month_start(grid.year(), grid.month())?;

    Ok(MonthCalendar {
        today,
        month_current,
        month_previous: previous_month_first_day(month_current).ok_or(CalendarError::OutOfRange)?,
        month_next: next_month_first_day(month_current).ok_or(CalendarError::OutOfRange)?,
        week_names: week_labels(week_start).iter().map(|name| name.to_string()).collect(),
        weeks,
        streak,
    })
}

/// GET /api/v1/calendar
pub async fn month_calendar(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(params): Query<CalendarParams>,
) -> Result<Json<MonthCalendar>, AppError> {
    let today = today();

    // No parameters means the current month
    let anchor = match (params.year, params.month) {
        (Some(year), Some(month)) => month_start(year, month)?,
        (None, None) => month_start(today.year(), today.month())?,
        _ => {
            return Err(AppError::Validation(
                "year and month must be given together".to_string(),
            ))
        }
    };

    let calendar = build_month_calendar(
        &state,
        user.id,
        anchor,
        params.field.unwrap_or_default(),
        today,
    )
    .await?;

    Ok(Json(calendar))
}

/// GET /api/v1/streak
pub async fn streak(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<StreakResponse>, AppError> {
    let history = state.store.find_all_tasks(user.id).await?;
    let streak = summarize(&history, today());

    Ok(Json(StreakResponse { streak }))
}
