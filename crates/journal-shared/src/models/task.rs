use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task belongs to exactly one calendar day, the day it was created for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Task {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub created_on: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done_on: Option<NaiveDate>,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.done_on.is_some()
    }

    /// The date this task is filed under when bucketing by `field`.
    pub fn date_for(&self, field: DateField) -> Option<NaiveDate> {
        match field {
            DateField::CreatedOn => Some(self.created_on),
            DateField::DoneOn => self.done_on,
        }
    }
}

/// Which task date a calendar groups by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    #[default]
    CreatedOn,
    DoneOn,
}

impl DateField {
    /// Column name in the `tasks` table.
    pub fn column(&self) -> &'static str {
        match self {
            Self::CreatedOn => "created_on",
            Self::DoneOn => "done_on",
        }
    }
}
