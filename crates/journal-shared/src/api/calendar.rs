use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarWeek, StreakSummary};
use crate::models::{Comment, DateField, Task};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CalendarParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<DateField>,
}

/// Everything a month page shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthCalendar {
    pub today: NaiveDate,
    pub month_current: NaiveDate,
    pub month_previous: NaiveDate,
    pub month_next: NaiveDate,
    pub week_names: Vec<String>,
    pub weeks: Vec<CalendarWeek>,
    pub streak: Option<StreakSummary>,
}

/// A single day with its neighbours and the month around it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPage {
    pub the_day: NaiveDate,
    pub yesterday: NaiveDate,
    pub tomorrow: NaiveDate,
    pub tasks: Vec<Task>,
    pub comment: Option<Comment>,
    pub calendar: MonthCalendar,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakResponse {
    pub streak: Option<StreakSummary>,
}
