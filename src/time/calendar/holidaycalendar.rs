use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::time::holidayrecord::HolidayRecord;

/// A source of named holidays, queried one year at a time.
pub trait HolidayCalendar: Send + Sync {
    fn get_holidays(&self, year: i32) -> Vec<HolidayRecord>;

    fn holiday_name(&self, d: NaiveDate) -> Option<String> {
        self.get_holidays(d.year())
            .into_iter()
            .find(|h| h.date() == d)
            .map(HolidayRecord::into_name)
    }

    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.holiday_name(d).is_some()
    }

    fn get_holiday_set(&self, year: i32) -> HashSet<NaiveDate> {
        self.get_holidays(year)
            .iter()
            .map(HolidayRecord::date)
            .collect()
    }
}
