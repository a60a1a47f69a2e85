use axum::{
    extract::{Path, State},
    Extension, Json,
};
use journal_shared::{
    api::{CreateTaskRequest, SetTaskDoneRequest},
    Task,
};
use uuid::Uuid;

use super::{parse_day, today};
use crate::auth::AuthUser;
use crate::error::AppError;
use crate::routes::AppState;

const MAX_TITLE_LEN: usize = 128;

/// Helper to load a task and verify the caller owns it
async fn owned_task(state: &AppState, task_id: Uuid, user: &AuthUser) -> Result<Task, AppError> {
    let task = state
        .store
        .find_task(task_id)
        .await?
        .ok_or(AppError::NotFound)?;

    if task.owner_id != user.id {
        tracing::debug!(task = %task_id, user = %user.id, "Task belongs to another user");
        return Err(AppError::Forbidden);
    }

    Ok(task)
}

/// POST /api/v1/days/:year/:month/:day/tasks
pub async fn create_task(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((year, month, day)): Path<(i32, u32, u32)>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<Json<Task>, AppError> {
    let the_day = parse_day(year, month, day)?;
    let title = req.title.trim();

    if title.is_empty() {
        return Err(AppError::Validation("Task title is required".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(AppError::Validation(format!(
            "Task title must be at most {} characters",
            MAX_TITLE_LEN
        )));
    }

    let task = state.store.create_task(user.id, title, the_day).await?;
    tracing::info!(task = %task.id, day = %the_day, "Task created");

    Ok(Json(task))
}

/// POST /api/v1/tasks/:task_id/done
pub async fn set_done(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(task_id): Path<Uuid>,
    Json(req): Json<SetTaskDoneRequest>,
) -> Result<Json<Task>, AppError> {
    owned_task(&state, task_id, &user).await?;

    let done_on = req.done.then(today);
    let task = state.store.set_task_done(task_id, done_on).await?;

    Ok(Json(task))
}

/// DELETE /api/v1/tasks/:task_id
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(task_id): Path<Uuid>,
) -> Result<(), AppError> {
    owned_task(&state, task_id, &user).await?;
    state.store.delete_task(task_id).await?;

    tracing::info!(task = %task_id, "Task deleted");
    Ok(())
}
