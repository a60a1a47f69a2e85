use axum::{extract::State, Extension, Json};
use journal_shared::{api::UpdatePreferencesRequest, Preferences, WeekStart};

use super::week_start_for;
use crate::auth::AuthUser;
use crate::error::AppError;
use crate::routes::AppState;

/// GET /api/v1/preferences
pub async fn get_preferences(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Preferences>, AppError> {
    let week_start = week_start_for(&state, user.id).await?;
    Ok(Json(Preferences { week_start }))
}

/// PATCH /api/v1/preferences
pub async fn update_preferences(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<UpdatePreferencesRequest>,
) -> Result<Json<Preferences>, AppError> {
    let week_start = WeekStart::new(req.week_start)?;
    state.store.set_week_start(user.id, week_start).await?;

    Ok(Json(Preferences { week_start }))
}
