use chrono::{NaiveDate, TimeDelta};

use super::recurringholiday::RecurringHoliday;

/// Easter Sunday of the Gregorian calendar (anonymous Gregorian algorithm).
///
/// Integer arithmetic only, with Euclidean division so that the result is
/// defined for every proleptic-Gregorian year. `None` only for years outside
/// the range `NaiveDate` can represent.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c.div_euclid(4);
    let k = c.rem_euclid(4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l).div_euclid(451);
    let n = h + l - 7 * m + 114;

    let month = n.div_euclid(31) as u32;
    let day = (n.rem_euclid(31) + 1) as u32;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// A holiday at a fixed day offset from Easter Sunday.
#[derive(Clone)]
pub struct EasterRelatedHoliday {
    name: String,
    shift_days: i64
}

impl EasterRelatedHoliday {
    pub fn new(name: impl Into<String>, shift_days: i64) -> EasterRelatedHoliday {
        EasterRelatedHoliday {
            name: name.into(),
            shift_days
        }
    }

    pub fn shift_days(&self) -> i64 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_holiday_date(&self, year: i32) -> Option<NaiveDate> {
        easter_sunday(year)?.checked_add_signed(TimeDelta::days(self.shift_days))
    }
}
