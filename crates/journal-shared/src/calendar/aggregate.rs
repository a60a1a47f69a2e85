use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::CalendarError;
use crate::models::{Comment, DateField, Task};

/// Summary of one task or comment on a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayTag {
    Done,
    Yet,
    Comment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub tags: Vec<DayTag>,
}

pub type CalendarWeek = Vec<CalendarDay>;

/// Reduce a grid's tasks and comments into tagged days, one chunk per week.
///
/// Every grid date is present, with an empty tag list when nothing happened
/// that day. Task tags keep the order of `tasks`; the comment tag comes last.
/// `tasks` and `comments` must already be limited to the grid's range and a
/// single owner. Tasks without a date for `field` are skipped.
pub fn bucket_days(
    weeks: &[[NaiveDate; 7]],
    field: DateField,
    tasks: &[Task],
    comments: &[Comment],
) -> Result<Vec<CalendarWeek>, CalendarError> {
    let mut by_day: BTreeMap<NaiveDate, Vec<DayTag>> = weeks
        .iter()
        .flatten()
        .map(|date| (*date, Vec::new()))
        .collect();

    for task in tasks {
        let Some(date) = task.date_for(field) else {
            continue;
        };
        let tag = if task.is_done() { DayTag::Done } else { DayTag::Yet };
        by_day
            .get_mut(&date)
            .ok_or(CalendarError::OutsideGrid { date })?
            .push(tag);
    }

    let mut commented = BTreeSet::new();
    for comment in comments {
        let date = comment.created_on;
        if !commented.insert(date) {
            return Err(CalendarError::DuplicateComment { date });
        }
        by_day
            .get_mut(&date)
            .ok_or(CalendarError::OutsideGrid { date })?
            .push(DayTag::Comment);
    }

    Ok(weeks
        .iter()
        .map(|week| {
            week.iter()
                .map(|date| CalendarDay {
                    date: *date,
                    tags: by_day.remove(date).unwrap_or_default(),
                })
                .collect()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::build_month_grid;
    use crate::models::WeekStart;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(owner: Uuid, created_on: NaiveDate, done_on: Option<NaiveDate>) -> Task {
        Task {
            id: Uuid::new_v4(),
            owner_id: owner,
            title: "task".to_string(),
            created_on,
            done_on,
        }
    }

    fn comment(owner: Uuid, created_on: NaiveDate) -> Comment {
        Comment {
            id: Uuid::new_v4(),
            owner_id: owner,
            body: "note".to_string(),
            created_on,
        }
    }

    fn tags_on(weeks: &[CalendarWeek], date: NaiveDate) -> Vec<DayTag> {
        weeks
            .iter()
            .flatten()
            .find(|day| day.date == date)
            .map(|day| day.tags.clone())
            .unwrap()
    }

    #[test]
    fn test_empty_month_keeps_every_day() {
        let grid = build_month_grid(2024, 3, WeekStart::MONDAY).unwrap();
        let weeks = bucket_days(grid.weeks(), DateField::CreatedOn, &[], &[]).unwrap();

        assert_eq!(weeks.len(), grid.weeks().len());
        for (week, grid_week) in weeks.iter().zip(grid.weeks()) {
            assert_eq!(week.len(), 7);
            let dates: Vec<_> = week.iter().map(|day| day.date).collect();
            assert_eq!(dates, grid_week.to_vec());
            assert!(week.iter().all(|day| day.tags.is_empty()));
        }
    }

    #[test]
    fn test_tags_follow_task_order_then_comment() {
        let owner = Uuid::new_v4();
        let day = date(2024, 3, 15);
        let grid = build_month_grid(2024, 3, WeekStart::MONDAY).unwrap();
        let tasks = vec![
            task(owner, day, None),
            task(owner, day, Some(day)),
            task(owner, day, None),
            task(owner, date(2024, 3, 16), Some(day)),
        ];
        let comments = vec![comment(owner, day)];

        let weeks = bucket_days(grid.weeks(), DateField::CreatedOn, &tasks, &comments).unwrap();

        assert_eq!(
            tags_on(&weeks, day),
            vec![DayTag::Yet, DayTag::Done, DayTag::Yet, DayTag::Comment]
        );
        assert_eq!(tags_on(&weeks, date(2024, 3, 16)), vec![DayTag::Done]);
        assert!(tags_on(&weeks, date(2024, 3, 17)).is_empty());
    }

    #[test]
    fn test_padding_days_collect_records_too() {
        let owner = Uuid::new_v4();
        // March 2024 with a Monday start opens on Feb 26
        let padding = date(2024, 2, 26);
        let grid = build_month_grid(2024, 3, WeekStart::MONDAY).unwrap();
        let weeks = bucket_days(
            grid.weeks(),
            DateField::CreatedOn,
            &[task(owner, padding, Some(padding))],
            &[comment(owner, padding)],
        )
        .unwrap();

        assert_eq!(weeks[0][0].date, padding);
        assert_eq!(weeks[0][0].tags, vec![DayTag::Done, DayTag::Comment]);
    }

    #[test]
    fn test_bucketing_by_completion_date() {
        let owner = Uuid::new_v4();
        let grid = build_month_grid(2024, 3, WeekStart::MONDAY).unwrap();
        let tasks = vec![
            task(owner, date(2024, 3, 1), Some(date(2024, 3, 4))),
            task(owner, date(2024, 3, 4), None),
        ];

        let weeks = bucket_days(grid.weeks(), DateField::DoneOn, &tasks, &[]).unwrap();

        assert_eq!(tags_on(&weeks, date(2024, 3, 4)), vec![DayTag::Done]);
        assert!(tags_on(&weeks, date(2024, 3, 1)).is_empty());
    }

    #[test]
    fn test_second_comment_on_a_day_is_an_error() {
        let owner = Uuid::new_v4();
        let day = date(2024, 3, 10);
        let grid = build_month_grid(2024, 3, WeekStart::MONDAY).unwrap();
        let comments = vec![comment(owner, day), comment(owner, day)];

        let result = bucket_days(grid.weeks(), DateField::CreatedOn, &[], &comments);

        assert_eq!(result, Err(CalendarError::DuplicateComment { date: day }));
    }

    #[test]
    fn test_record_outside_grid_is_an_error() {
        let owner = Uuid::new_v4();
        let stray = date(2024, 6, 1);
        let grid = build_month_grid(2024, 3, WeekStart::MONDAY).unwrap();

        let result = bucket_days(
            grid.weeks(),
            DateField::CreatedOn,
            &[task(owner, stray, None)],
            &[],
        );

        assert_eq!(result, Err(CalendarError::OutsideGrid { date: stray }));
    }

    #[test]
    fn test_bucketing_is_repeatable() {
        let owner = Uuid::new_v4();
        let day = date(2024, 3, 5);
        let grid = build_month_grid(2024, 3, WeekStart::SUNDAY).unwrap();
        let tasks = vec![task(owner, day, None), task(owner, day, Some(day))];
        let comments = vec![comment(owner, day)];

        let first = bucket_days(grid.weeks(), DateField::CreatedOn, &tasks, &comments).unwrap();
        let second = bucket_days(grid.weeks(), DateField::CreatedOn, &tasks, &comments).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_tags_serialize_by_name() {
        let json = serde_json::to_string(&[DayTag::Done, DayTag::Yet, DayTag::Comment]).unwrap();
        assert_eq!(json, r#"["Done","Yet","Comment"]"#);
    }
}
