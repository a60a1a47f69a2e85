//! Calendar engine: month grids, per-day status tags and completion streaks.
//!
//! Everything here is a pure function of its inputs. Fetching the tasks and
//! comments that feed [`bucket_days`] and [`summarize`] is left to the caller.

mod aggregate;
mod error;
mod grid;
mod streak;

pub use aggregate::{bucket_days, CalendarDay, CalendarWeek, DayTag};
pub use error::CalendarError;
pub use grid::{
    build_month_grid, month_start, next_month_first_day, previous_month_first_day, week_labels,
    DateRange, MonthGrid, WEEK_NAMES,
};
pub use streak::{completed_days, streak_runs, summarize, StreakRecord, StreakSummary};
