use chrono::NaiveDate;

use super::recurringholiday::RecurringHoliday;

#[derive(Clone)]
pub struct FixedDateHoliday {
    name: String,
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    /// Returns `None` for a month/day pair that never exists.
    /// Feb 29 is accepted and only yields a date in leap years.
    pub fn new(name: impl Into<String>, month: u32, day: u32) -> Option<FixedDateHoliday> {
        // 2000 is a leap year, so every month/day pair that can ever occur is valid in it
        NaiveDate::from_ymd_opt(2000, month, day)?;
        Some(FixedDateHoliday {
            name: name.into(),
            month,
            day
        })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_holiday_date(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}
