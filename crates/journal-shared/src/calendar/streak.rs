//! Consecutive-completion statistics.
//!
//! A day counts as completed when it has at least one task and every task
//! filed on it is done. Days without tasks break a streak.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Task;

/// One maximal run of consecutive completed days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakRecord {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub length: u32,
}

impl StreakRecord {
    fn starting(date: NaiveDate) -> Self {
        Self {
            start_date: date,
            end_date: date,
            length: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    pub current_streak: u32,
    pub best_streak: u32,
    pub best_run: StreakRecord,
    pub completed_days: u32,
}

/// Days with at least one done task and no open task.
pub fn completed_days<'a, I>(tasks: I) -> BTreeSet<NaiveDate>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut done = BTreeSet::new();
    let mut not_done = BTreeSet::new();

    for task in tasks {
        if task.is_done() {
            done.insert(task.created_on);
        } else {
            not_done.insert(task.created_on);
        }
    }

    done.difference(&not_done).copied().collect()
}

/// Split sorted days into maximal runs of consecutive dates.
pub fn streak_runs(days: &BTreeSet<NaiveDate>) -> Vec<StreakRecord> {
    let mut runs: Vec<StreakRecord> = Vec::new();

    for &day in days {
        match runs.last_mut() {
            Some(run) if run.end_date.succ_opt() == Some(day) => {
                run.end_date = day;
                run.length += 1;
            }
            _ => runs.push(StreakRecord::starting(day)),
        }
    }

    runs
}

/// Current and best streak over a task history, or `None` when no day was
/// ever completed.
///
/// The current streak is the length of the latest run when it ends today or
/// yesterday, and 0 otherwise. On equal lengths the most recent run is
/// reported as best.
pub fn summarize<'a, I>(tasks: I, today: NaiveDate) -> Option<StreakSummary>
where
    I: IntoIterator<Item = &'a Task>,
{
    let days = completed_days(tasks);
    let runs = streak_runs(&days);
    let best_run = *runs.iter().max_by_key(|run| run.length)?;

    Some(StreakSummary {
        current_streak: current_streak(&runs, today),
        best_streak: best_run.length,
        best_run,
        completed_days: u32::try_from(days.len()).unwrap_or(u32::MAX),
    })
}

fn current_streak(runs: &[StreakRecord], today: NaiveDate) -> u32 {
    let Some(run) = runs.last() else {
        return 0;
    };

    // Alive while the latest run ends today or yesterday
    if run.end_date == today || run.end_date.succ_opt() == Some(today) {
        run.length
    } else {
        0
    }
}
