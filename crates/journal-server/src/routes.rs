use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::auth::auth_middleware;
use crate::handlers::{
    calendar as calendar_handlers, comments as comment_handlers, days as day_handlers,
    preferences as preference_handlers, tasks as task_handlers,
};
use crate::store::JournalStore;
use crate::Config;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn JournalStore>,
    pub config: Config,
}

pub fn create_router(store: Arc<dyn JournalStore>, config: Config) -> Router {
    let state = AppState { store, config };

    // Day routes: the day page plus its tasks and comment
    let day_routes = Router::new()
        .route("/", get(day_handlers::day_page))
        .route("/tasks", post(task_handlers::create_task))
        .route(
            "/comment",
            put(comment_handlers::upsert_comment).delete(comment_handlers::delete_comment),
        );

    // Task routes addressed by id
    let task_routes = Router::new()
        .route("/:task_id", delete(task_handlers::delete_task))
        .route("/:task_id/done", post(task_handlers::set_done));

    // Protected routes with auth middleware
    let protected_routes = Router::new()
        .route("/calendar", get(calendar_handlers::month_calendar))
        .route("/streak", get(calendar_handlers::streak))
        .route(
            "/preferences",
            get(preference_handlers::get_preferences).patch(preference_handlers::update_preferences),
        )
        .nest("/days/:year/:month/:day", day_routes)
        .nest("/tasks", task_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Combine all routes
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
