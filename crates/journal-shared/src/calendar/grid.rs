//! Month grid construction.
//! A grid always holds whole weeks, padded with days of the adjacent months.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::CalendarError;
use crate::models::WeekStart;

/// Weekday labels in Monday-first order.
pub const WEEK_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn single(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    range: DateRange,
    weeks: Vec<[NaiveDate; 7]>,
}

impl MonthGrid {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weeks(&self) -> &[[NaiveDate; 7]] {
        &self.weeks
    }

    /// First and last date shown, padding included.
    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks.iter().flatten().copied()
    }

    /// Whether `date` belongs to the grid's month rather than the padding.
    pub fn in_month(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// The 1st of the given month.
pub fn month_start(year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidDate {
        year,
        month,
        day: 1,
    })
}

pub fn previous_month_first_day(date: NaiveDate) -> Option<NaiveDate> {
    if date.month() == 1 {
        NaiveDate::from_ymd_opt(date.year() - 1, 12, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() - 1, 1)
    }
}

pub fn next_month_first_day(date: NaiveDate) -> Option<NaiveDate> {
    if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    }
}

/// Weekday labels rotated so that index 0 is `week_start`.
pub fn week_labels(week_start: WeekStart) -> [&'static str; 7] {
    let mut labels = WEEK_NAMES;
    labels.rotate_left(usize::from(week_start.get()));
    labels
}

/// Days to walk forward from `from` until reaching `to`.
fn days_until(from: Weekday, to: Weekday) -> i64 {
    i64::from((to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7)
}

/// Build the weeks covering a month, starting each week on `week_start`.
pub fn build_month_grid(
    year: i32,
    month: u32,
    week_start: WeekStart,
) -> Result<MonthGrid, CalendarError> {
    let first = month_start(year, month)?;
    // Move to next month, then back one day
    let last = next_month_first_day(first)
        .and_then(|d| d.pred_opt())
        .ok_or(CalendarError::OutOfRange)?;

    let lead = days_until(week_start.first_weekday(), first.weekday());
    let trail = days_until(last.weekday(), week_start.last_weekday());

    let start = first
        .checked_sub_signed(Duration::days(lead))
        .ok_or(CalendarError::OutOfRange)?;
    let end = last
        .checked_add_signed(Duration::days(trail))
        .ok_or(CalendarError::OutOfRange)?;

    let mut weeks = Vec::with_capacity(6);
    let mut cursor = Some(start);
    while let Some(day) = cursor.filter(|d| *d <= end) {
        // `end` closes a week, so every slot up to it is representable.
        let week: [NaiveDate; 7] =
            std::array::from_fn(|offset| day + Duration::days(offset as i64));
        cursor = week[6].succ_opt();
        weeks.push(week);
    }

    Ok(MonthGrid {
        year,
        month,
        range: DateRange::new(start, end),
        weeks,
    })
}
