use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Week start must be between 0 (Monday) and 6 (Sunday), got {0}")]
    InvalidWeekStart(u8),

    #[error("Date is outside the supported calendar range")]
    OutOfRange,

    #[error("More than one comment recorded on {date}")]
    DuplicateComment { date: NaiveDate },

    #[error("Record dated {date} falls outside the calendar grid")]
    OutsideGrid { date: NaiveDate },
}

impl CalendarError {
    /// True when the error points at broken stored data rather than bad input.
    pub fn is_integrity_violation(&self) -> bool {
        matches!(self, Self::DuplicateComment { .. } | Self::OutsideGrid { .. })
    }
}
