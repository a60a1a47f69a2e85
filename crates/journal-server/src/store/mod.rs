//! Persistence of tasks, comments and per-user settings.
//!
//! The calendar engine only reads through [`JournalStore::find_tasks`],
//! [`JournalStore::find_comments`] and [`JournalStore::find_all_tasks`]; the
//! remaining methods back the task and comment endpoints. Every query is
//! scoped to one owner.

mod memory;
mod postgres;

use async_trait::async_trait;
use chrono::NaiveDate;
use journal_shared::{calendar::DateRange, Comment, DateField, Task, WeekStart};
use uuid::Uuid;

use crate::error::AppError;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait JournalStore: Send + Sync {
    /// Tasks whose `field` date lies in `range`, in creation order.
    async fn find_tasks(
        &self,
        owner: Uuid,
        field: DateField,
        range: DateRange,
    ) -> Result<Vec<Task>, AppError>;

    /// Comments created within `range`.
    async fn find_comments(&self, owner: Uuid, range: DateRange) -> Result<Vec<Comment>, AppError>;

    /// The owner's whole task history.
    async fn find_all_tasks(&self, owner: Uuid) -> Result<Vec<Task>, AppError>;

    async fn find_task(&self, id: Uuid) -> Result<Option<Task>, AppError>;

    async fn create_task(&self, owner: Uuid, title: &str, day: NaiveDate)
        -> Result<Task, AppError>;

    /// Set or clear the completion date. `NotFound` for an unknown task.
    async fn set_task_done(&self, id: Uuid, done_on: Option<NaiveDate>) -> Result<Task, AppError>;

    async fn delete_task(&self, id: Uuid) -> Result<(), AppError>;

    async fn comment_on(&self, owner: Uuid, day: NaiveDate) -> Result<Option<Comment>, AppError>;

    /// Write the day's comment, replacing the body of an existing one.
    async fn upsert_comment(
        &self,
        owner: Uuid,
        day: NaiveDate,
        body: &str,
    ) -> Result<Comment, AppError>;

    /// Returns whether a comment existed.
    async fn delete_comment(&self, owner: Uuid, day: NaiveDate) -> Result<bool, AppError>;

    async fn week_start(&self, owner: Uuid) -> Result<Option<WeekStart>, AppError>;

    async fn set_week_start(&self, owner: Uuid, week_start: WeekStart) -> Result<(), AppError>;
}
