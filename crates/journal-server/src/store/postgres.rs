use async_trait::async_trait;
use chrono::NaiveDate;
use journal_shared::{calendar::DateRange, Comment, DateField, Task, WeekStart};
use uuid::Uuid;

use super::JournalStore;
use crate::db::DbPool;
use crate::error::AppError;

const TASK_COLUMNS: &str = "id, owner_id, title, created_on, done_on";

#[derive(Clone)]
pub struct PgStore {
    db: DbPool,
}

impl PgStore {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }
}

/// A stored value outside 0..=6 is corrupt data, not a bad request.
fn stored_week_start(value: i16) -> Result<WeekStart, AppError> {
    u8::try_from(value)
        .ok()
        .and_then(|value| WeekStart::new(value).ok())
        .ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!(
                "Stored week start {} is out of range",
                value
            ))
        })
}

#[async_trait]
impl JournalStore for PgStore {
    async fn find_tasks(
        &self,
        owner: Uuid,
        field: DateField,
        range: DateRange,
    ) -> Result<Vec<Task>, AppError> {
        // The column comes from a closed enum, never from the request.
        let query = format!(
            "SELECT {} FROM tasks WHERE owner_id = $1 AND {} BETWEEN $2 AND $3 ORDER BY seq",
            TASK_COLUMNS,
            field.column()
        );

        let tasks = sqlx::query_as::<_, Task>(&query)
            .bind(owner)
            .bind(range.start)
            .bind(range.end)
            .fetch_all(&self.db)
            .await?;

        Ok(tasks)
    }

    async fn find_comments(&self, owner: Uuid, range: DateRange) -> Result<Vec<Comment>, AppError> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, owner_id, body, created_on
            FROM comments
            WHERE owner_id = $1 AND created_on BETWEEN $2 AND $3
            ORDER BY created_on
            "#,
        )
        .bind(owner)
        .bind(range.start)
        .bind(range.end)
        .fetch_all(&self.db)
        .await?;

        Ok(comments)
    }

    async fn find_all_tasks(&self, owner: Uuid) -> Result<Vec<Task>, AppError> {
        let query = format!(
            "SELECT {} FROM tasks WHERE owner_id = $1 ORDER BY seq",
            TASK_COLUMNS
        );

        let tasks = sqlx::query_as::<_, Task>(&query)
            .bind(owner)
            .fetch_all(&self.db)
            .await?;

        Ok(tasks)
    }

    async fn find_task(&self, id: Uuid) -> Result<Option<Task>, AppError> {
        let query = format!("SELECT {} FROM tasks WHERE id = $1", TASK_COLUMNS);

        let task = sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(task)
    }

    async fn create_task(
        &self,
        owner: Uuid,
        title: &str,
        day: NaiveDate,
    ) -> Result<Task, AppError> {
        let query = format!(
            r#"
            INSERT INTO tasks (id, owner_id, title, created_on)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            TASK_COLUMNS
        );

        let task = sqlx::query_as::<_, Task>(&query)
            .bind(Uuid::new_v4())
            .bind(owner)
            .bind(title)
            .bind(day)
            .fetch_one(&self.db)
            .await?;

        Ok(task)
    }

    async fn set_task_done(&self, id: Uuid, done_on: Option<NaiveDate>) -> Result<Task, AppError> {
        let query = format!(
            "UPDATE tasks SET done_on = $1 WHERE id = $2 RETURNING {}",
            TASK_COLUMNS
        );

        sqlx::query_as::<_, Task>(&query)
            .bind(done_on)
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn delete_task(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn comment_on(&self, owner: Uuid, day: NaiveDate) -> Result<Option<Comment>, AppError> {
        let comment = sqlx::query_as::<_, Comment>(
            "SELECT id, owner_id, body, created_on FROM comments WHERE owner_id = $1 AND created_on = $2",
        )
        .bind(owner)
        .bind(day)
        .fetch_optional(&self.db)
        .await?;

        Ok(comment)
    }

    async fn upsert_comment(
        &self,
        owner: Uuid,
        day: NaiveDate,
        body: &str,
    ) -> Result<Comment, AppError> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (id, owner_id, body, created_on)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (owner_id, created_on) DO UPDATE SET body = EXCLUDED.body
            RETURNING id, owner_id, body, created_on
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(owner)
        .bind(body)
        .bind(day)
        .fetch_one(&self.db)
        .await?;

        Ok(comment)
    }

    async fn delete_comment(&self, owner: Uuid, day: NaiveDate) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM comments WHERE owner_id = $1 AND created_on = $2")
            .bind(owner)
            .bind(day)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn week_start(&self, owner: Uuid) -> Result<Option<WeekStart>, AppError> {
        let row: Option<(i16,)> =
            sqlx::query_as("SELECT week_start FROM user_settings WHERE user_id = $1")
                .bind(owner)
                .fetch_optional(&self.db)
                .await?;

        row.map(|(value,)| stored_week_start(value)).transpose()
    }

    async fn set_week_start(&self, owner: Uuid, week_start: WeekStart) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO user_settings (user_id, week_start)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE SET week_start = EXCLUDED.week_start
            "#,
        )
        .bind(owner)
        .bind(i16::from(week_start.get()))
        .execute(&self.db)
        .await?;

        Ok(())
    }
}
