use axum::{
    extract::{Path, State},
    Extension, Json,
};
use journal_shared::{api::UpsertCommentRequest, Comment};

use super::parse_day;
use crate::auth::AuthUser;
use crate::error::AppError;
use crate::routes::AppState;

/// PUT /api/v1/days/:year/:month/:day/comment
pub async fn upsert_comment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((year, month, day)): Path<(i32, u32, u32)>,
    Json(req): Json<UpsertCommentRequest>,
) -> Result<Json<Comment>, AppError> {
    let the_day = parse_day(year, month, day)?;

    if req.body.trim().is_empty() {
        return Err(AppError::Validation("Comment body is required".to_string()));
    }

    let comment = state.store.upsert_comment(user.id, the_day, &req.body).await?;
    Ok(Json(comment))
}

/// DELETE /api/v1/days/:year/:month/:day/comment
pub async fn delete_comment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((year, month, day)): Path<(i32, u32, u32)>,
) -> Result<(), AppError> {
    let the_day = parse_day(year, month, day)?;

    if !state.store.delete_comment(user.id, the_day).await? {
        return Err(AppError::NotFound);
    }

    Ok(())
}
