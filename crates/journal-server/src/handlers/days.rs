use axum::{
    extract::{Path, State},
    Extension, Json,
};
use journal_shared::{
    api::DayPage,
    calendar::{CalendarError, DateRange},
    DateField,
};

use super::{calendar::build_month_calendar, parse_day, today};
use crate::auth::AuthUser;
use crate::error::AppError;
use crate::routes::AppState;

/// GET /api/v1/days/:year/:month/:day
pub async fn day_page(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((year, month, day)): Path<(i32, u32, u32)>,
) -> Result<Json<DayPage>, AppError> {
    let the_day = parse_day(year, month, day)?;

    let tasks = state
        .store
        .find_tasks(user.id, DateField::CreatedOn, DateRange::single(the_day))
        .await?;
    let comment = state.store.comment_on(user.id, the_day).await?;
    let calendar =
        build_month_calendar(&state, user.id, the_day, DateField::CreatedOn, today()).await?;

    Ok(Json(DayPage {
        the_day,
        yesterday: the_day.pred_opt().ok_or(CalendarError::OutOfRange)?,
        tomorrow: the_day.succ_opt().ok_or(CalendarError::OutOfRange)?,
        tasks,
        comment,
        calendar,
    }))
}
