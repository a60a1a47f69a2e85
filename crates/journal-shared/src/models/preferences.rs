use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarError;

/// First weekday of the calendar grid, 0 = Monday through 6 = Sunday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekStart(u8);

impl WeekStart {
    pub const MONDAY: Self = Self(0);
    pub const SUNDAY: Self = Self(6);

    pub fn new(value: u8) -> Result<Self, CalendarError> {
        if value <= 6 {
            Ok(Self(value))
        } else {
            Err(CalendarError::InvalidWeekStart(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Weekday in the first column of every week.
    pub fn first_weekday(self) -> Weekday {
        (0..self.0).fold(Weekday::Mon, |day, _| day.succ())
    }

    /// Weekday in the last column of every week.
    pub fn last_weekday(self) -> Weekday {
        self.first_weekday().pred()
    }
}

impl TryFrom<u8> for WeekStart {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeekStart> for u8 {
    fn from(week_start: WeekStart) -> Self {
        week_start.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    pub week_start: WeekStart,
}
