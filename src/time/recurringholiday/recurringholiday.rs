use chrono::{Datelike, NaiveDate};

use crate::time::holidayrecord::HolidayRecord;

/// A holiday rule that yields at most one date per year.
pub trait RecurringHoliday: Send + Sync {

    fn name(&self) -> &str;

    fn get_holiday_date(&self, year: i32) -> Option<NaiveDate>;

    fn get_holiday(&self, year: i32) -> Option<HolidayRecord> {
        self.get_holiday_date(year)
            .map(|d| HolidayRecord::new(d, self.name()))
    }

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.get_holiday_date(d.year()) == Some(*d)
    }
}
