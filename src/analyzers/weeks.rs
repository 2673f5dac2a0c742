//! Week boundaries for the report.
//!
//! The first week starts on the configured range start, whatever weekday that
//! is, and runs until the following Monday. Every later week is a regular
//! Monday-to-Sunday week keyed by its Monday.

use chrono::{Datelike, Days, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekCalendar {
    range_start: NaiveDate,
    first_monday: NaiveDate,
}

impl WeekCalendar {
    pub fn new(range_start: NaiveDate) -> Self {
        let offset = (7 - range_start.weekday().num_days_from_monday()) % 7;
        Self {
            range_start,
            first_monday: range_start + Days::new(u64::from(offset)),
        }
    }

    /// First Monday on or after the range start.
    pub fn first_monday(&self) -> NaiveDate {
        self.first_monday
    }

    /// Key of the week `date` belongs to.
    pub fn week_start(&self, date: NaiveDate) -> NaiveDate {
        if date < self.first_monday {
            return self.range_start;
        }
        date - Days::new(u64::from(date.weekday().num_days_from_monday()))
    }
}
