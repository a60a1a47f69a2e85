use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use journal_server::{
    auth::create_access_token,
    create_router,
    store::{JournalStore, MemoryStore},
    Config,
};
use journal_shared::{Task, WeekStart};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

const SECRET: &str = "test-secret";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub user_id: Uuid,
    pub token: String,
}

#[allow(dead_code)]
pub fn setup_test_app() -> TestApp {
    setup_test_app_with(|store| store as Arc<dyn JournalStore>)
}

/// Serve the router from a wrapper around the in-memory store. `TestApp::store`
/// still points at the inner store so tests can seed it directly.
pub fn setup_test_app_with<F>(wrap: F) -> TestApp
where
    F: FnOnce(Arc<MemoryStore>) -> Arc<dyn JournalStore>,
{
    let store = Arc::new(MemoryStore::new());
    let config = Config {
        database_url: None,
        jwt_secret: SECRET.to_string(),
        jwt_expires_in: 900,
        port: 0,
        default_week_start: WeekStart::MONDAY,
    };
    let router = create_router(wrap(store.clone()), config);
    let user_id = Uuid::new_v4();

    TestApp {
        router,
        store,
        user_id,
        token: token_for(user_id),
    }
}

#[allow(dead_code)]
pub fn token_for(user_id: Uuid) -> String {
    create_access_token(user_id, SECRET, 900).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

impl TestApp {
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> anyhow::Result<(StatusCode, Value)> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        Ok((status, value))
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        self.request(Method::GET, uri, Some(&self.token), None).await
    }

    #[allow(dead_code)]
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Value,
    ) -> anyhow::Result<(StatusCode, Value)> {
        self.request(method, uri, Some(&self.token), Some(body)).await
    }

    /// Insert a task straight into the store, optionally completed on its own day.
    #[allow(dead_code)]
    pub async fn seed_task(&self, day: NaiveDate, done: bool) -> anyhow::Result<Task> {
        let task = self.store.create_task(self.user_id, "seeded", day).await?;
        if done {
            return Ok(self.store.set_task_done(task.id, Some(day)).await?);
        }
        Ok(task)
    }
}

/// Tags of `date` in a calendar response, as plain strings.
#[allow(dead_code)]
pub fn tags_on(calendar: &Value, date: &str) -> Vec<String> {
    calendar["weeks"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|week| week.as_array().unwrap())
        .find(|day| day["date"] == date)
        .map(|day| {
            day["tags"]
                .as_array()
                .unwrap()
                .iter()
                .map(|tag| tag.as_str().unwrap().to_string())
                .collect()
        })
        .unwrap_or_else(|| panic!("{} is not in the calendar", date))
}
