use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use journal_shared::{calendar::DateRange, Comment, DateField, Task, WeekStart};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::JournalStore;
use crate::error::AppError;

#[derive(Debug, Default)]
struct Tables {
    // Insertion order doubles as creation order.
    tasks: Vec<Task>,
    comments: Vec<Comment>,
    week_starts: HashMap<Uuid, WeekStart>,
}

/// Process-local store, used when no database is configured.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JournalStore for MemoryStore {
    async fn find_tasks(
        &self,
        owner: Uuid,
        field: DateField,
        range: DateRange,
    ) -> Result<Vec<Task>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .tasks
            .iter()
            .filter(|task| task.owner_id == owner)
            .filter(|task| task.date_for(field).is_some_and(|d| range.contains(d)))
            .cloned()
            .collect())
    }

    async fn find_comments(&self, owner: Uuid, range: DateRange) -> Result<Vec<Comment>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .comments
            .iter()
            .filter(|comment| comment.owner_id == owner && range.contains(comment.created_on))
            .cloned()
            .collect())
    }

    async fn find_all_tasks(&self, owner: Uuid) -> Result<Vec<Task>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .tasks
            .iter()
            .filter(|task| task.owner_id == owner)
            .cloned()
            .collect())
    }

    async fn find_task(&self, id: Uuid) -> Result<Option<Task>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables.tasks.iter().find(|task| task.id == id).cloned())
    }

    async fn create_task(
        &self,
        owner: Uuid,
        title: &str,
        day: NaiveDate,
    ) -> Result<Task, AppError> {
        let task = Task {
            id: Uuid::new_v4(),
            owner_id: owner,
            title: title.to_string(),
            created_on: day,
            done_on: None,
        };
        self.tables.write().await.tasks.push(task.clone());
        Ok(task)
    }

    async fn set_task_done(&self, id: Uuid, done_on: Option<NaiveDate>) -> Result<Task, AppError> {
        let mut tables = self.tables.write().await;
        let task = tables
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(AppError::NotFound)?;
        task.done_on = done_on;
        Ok(task.clone())
    }

    async fn delete_task(&self, id: Uuid) -> Result<(), AppError> {
        let mut tables = self.tables.write().await;
        let before = tables.tasks.len();
        tables.tasks.retain(|task| task.id != id);

        if tables.tasks.len() == before {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn comment_on(&self, owner: Uuid, day: NaiveDate) -> Result<Option<Comment>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .comments
            .iter()
            .find(|comment| comment.owner_id == owner && comment.created_on == day)
            .cloned())
    }

    async fn upsert_comment(
        &self,
        owner: Uuid,
        day: NaiveDate,
        body: &str,
    ) -> Result<Comment, AppError> {
        let mut tables = self.tables.write().await;

        if let Some(existing) = tables
            .comments
            .iter_mut()
            .find(|comment| comment.owner_id == owner && comment.created_on == day)
        {
            existing.body = body.to_string();
            return Ok(existing.clone());
        }

        let comment = Comment {
            id: Uuid::new_v4(),
            owner_id: owner,
            body: body.to_string(),
            created_on: day,
        };
        tables.comments.push(comment.clone());
        Ok(comment)
    }

    async fn delete_comment(&self, owner: Uuid, day: NaiveDate) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        let before = tables.comments.len();
        tables
            .comments
            .retain(|comment| !(comment.owner_id == owner && comment.created_on == day));
        Ok(tables.comments.len() != before)
    }

    async fn week_start(&self, owner: Uuid) -> Result<Option<WeekStart>, AppError> {
        Ok(self.tables.read().await.week_starts.get(&owner).copied())
    }

    async fn set_week_start(&self, owner: Uuid, week_start: WeekStart) -> Result<(), AppError> {
        self.tables.write().await.week_starts.insert(owner, week_start);
        Ok(())
    }
}
