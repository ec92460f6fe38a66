use chrono::{Datelike, Days, NaiveDate, TimeDelta};

use super::recurringholiday::RecurringHoliday;

const THREE_WEEKS: Days = Days::new(21);

/// First Sunday of Advent: the fourth Sunday before Christmas Day.
///
/// The fourth Advent is the last Sunday strictly before Dec 25, so a
/// Christmas falling on a Sunday pushes it back a full week.
pub fn first_advent_sunday(year: i32) -> Option<NaiveDate> {
    let christmas = NaiveDate::from_ymd_opt(year, 12, 25)?;
    let days_back = christmas.weekday().num_days_from_monday() as u64 + 1;
    let fourth_advent = christmas.checked_sub_days(Days::new(days_back))?;
    fourth_advent.checked_sub_days(THREE_WEEKS)
}

/// A holiday at a fixed day offset from the first Sunday of Advent.
/// Buß- und Bettag is the Wednesday eleven days before it.
#[derive(Clone)]
pub struct AdventRelatedHoliday {
    name: String,
    shift_days: i64
}

impl AdventRelatedHoliday {
    pub fn new(name: impl Into<String>, shift_days: i64) -> AdventRelatedHoliday {
        AdventRelatedHoliday {
            name: name.into(),
            shift_days
        }
    }

    pub fn shift_days(&self) -> i64 {
        self.shift_days
    }
}

impl RecurringHoliday for AdventRelatedHoliday {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_holiday_date(&self, year: i32) -> Option<NaiveDate> {
        first_advent_sunday(year)?.checked_add_signed(TimeDelta::days(self.shift_days))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_advent_known_years() {
        assert_eq!(first_advent_sunday(2022), Some(date(2022, 11, 27))); // Dec 25 is a Sunday
        assert_eq!(first_advent_sunday(2023), Some(date(2023, 12, 3)));  // Dec 25 is a Monday
        assert_eq!(first_advent_sunday(2025), Some(date(2025, 11, 30)));
        assert_eq!(first_advent_sunday(2026), Some(date(2026, 11, 29)));
    }

    #[test]
    fn test_buss_und_bettag_known_years() {
        let holiday = AdventRelatedHoliday::new("Buß- und Bettag", -11);
        assert_eq!(holiday.get_holiday_date(2022), Some(date(2022, 11, 16)));
        assert_eq!(holiday.get_holiday_date(2023), Some(date(2023, 11, 22)));
        assert_eq!(holiday.get_holiday_date(2026), Some(date(2026, 11, 18)));
    }

    #[test]
    fn test_buss_und_bettag_is_wednesday_before_advent() {
        let holiday = AdventRelatedHoliday::new("Buß- und Bettag", -11);
        for year in 1900..=2100 {
            let advent = first_advent_sunday(year).unwrap();
            let bbt = holiday.get_holiday_date(year).unwrap();
            assert_eq!(advent.weekday(), Weekday::Sun, "year {}", year);
            assert_eq!(bbt.weekday(), Weekday::Wed, "year {}", year);
            assert_eq!((advent - bbt).num_days(), 11, "year {}", year);
            assert!(bbt >= date(year, 11, 16) && bbt <= date(year, 11, 22), "year {}", year);
        }
    }
}
