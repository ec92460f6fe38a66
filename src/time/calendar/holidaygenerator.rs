use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::region::bundesland::Bundesland;
use crate::region::regionalholidaytable::RegionalHoliday;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::holidayrecord::HolidayRecord;
use crate::time::recurringholiday::adventrelatedholiday::AdventRelatedHoliday;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

// ─────────────────────────────────────────────────────────────────────────────
// Holiday tables
// ─────────────────────────────────────────────────────────────────────────────

const NATIONWIDE_FIXED: [(&str, u32, u32); 5] = [
    ("Neujahr", 1, 1),
    ("Tag der Arbeit", 5, 1),
    ("Tag der Deutschen Einheit", 10, 3),
    ("1. Weihnachtstag", 12, 25),
    ("2. Weihnachtstag", 12, 26),
];

const REGIONAL_FIXED: [(RegionalHoliday, u32, u32); 6] = [
    (RegionalHoliday::HeiligeDreiKoenige, 1, 6),
    (RegionalHoliday::Frauentag, 3, 8),
    (RegionalHoliday::MariaeHimmelfahrt, 8, 15),
    (RegionalHoliday::Weltkindertag, 9, 20),
    (RegionalHoliday::Reformationstag, 10, 31),
    (RegionalHoliday::Allerheiligen, 11, 1),
];

const NATIONWIDE_EASTER: [(&str, i64); 4] = [
    ("Karfreitag", -2),
    ("Ostermontag", 1),
    ("Christi Himmelfahrt", 39),
    ("Pfingstmontag", 50),
];

const FRONLEICHNAM_SHIFT: i64 = 60;
const BUSS_UND_BETTAG_SHIFT: i64 = -11;

/// Builds the holiday list of one federal state.
///
/// Rules are emitted in a fixed order: nationwide fixed dates, regional
/// fixed dates, Easter-derived, Advent-derived, then school-specific
/// additional holidays. When two rules land on the same date only the first
/// record in that order is kept. The result of [`HolidayGenerator::generate`]
/// is sorted by date.
pub struct HolidayGenerator {
    region: Bundesland,
    recurring_holidays: Vec<Arc<dyn RecurringHoliday>>,
    additional_holidays: Vec<HolidayRecord>
}

impl HolidayGenerator {
    pub fn new(region: Bundesland) -> HolidayGenerator {
        let mut recurring_holidays: Vec<Arc<dyn RecurringHoliday>> = Vec::new();

        for (name, month, day) in NATIONWIDE_FIXED {
            if let Some(holiday) = FixedDateHoliday::new(name, month, day) {
                recurring_holidays.push(Arc::new(holiday));
            }
        }

        for (regional, month, day) in REGIONAL_FIXED {
            if !regional.is_observed_in(region) {
                continue;
            }
            if let Some(holiday) = FixedDateHoliday::new(regional.name(), month, day) {
                recurring_holidays.push(Arc::new(holiday));
            }
        }

        for (name, shift_days) in NATIONWIDE_EASTER {
            recurring_holidays.push(Arc::new(EasterRelatedHoliday::new(name, shift_days)));
        }
        if RegionalHoliday::Fronleichnam.is_observed_in(region) {
            recurring_holidays.push(Arc::new(EasterRelatedHoliday::new(
                RegionalHoliday::Fronleichnam.name(),
                FRONLEICHNAM_SHIFT,
            )));
        }

        if RegionalHoliday::BussUndBettag.is_observed_in(region) {
            recurring_holidays.push(Arc::new(AdventRelatedHoliday::new(
                RegionalHoliday::BussUndBettag.name(),
                BUSS_UND_BETTAG_SHIFT,
            )));
        }

        HolidayGenerator {
            region,
            recurring_holidays,
            additional_holidays: Vec::new()
        }
    }

    /// Adds one-off holidays (e.g. a school's movable days off). Each record
    /// only shows up in the year of its own date.
    pub fn with_additional_holidays(mut self, additional_holidays: Vec<HolidayRecord>) -> HolidayGenerator {
        self.additional_holidays = additional_holidays;
        self
    }

    pub fn region(&self) -> Bundesland {
        self.region
    }

    pub fn recurring_holidays(&self) -> &[Arc<dyn RecurringHoliday>] {
        &self.recurring_holidays
    }

    pub fn additional_holidays(&self) -> &[HolidayRecord] {
        &self.additional_holidays
    }

    pub fn generate(&self, year: i32) -> Vec<HolidayRecord> {
        let candidates = self.recurring_holidays
            .iter()
            .filter_map(|r| r.get_holiday(year))
            .chain(
                self.additional_holidays
                    .iter()
                    .filter(|h| h.date().year() == year)
                    .cloned()
            );

        let mut seen: HashSet<NaiveDate> = HashSet::with_capacity(20);
        let mut holidays: Vec<HolidayRecord> = candidates
            .filter(|h| seen.insert(h.date()))
            .collect();

        holidays.sort_by_key(HolidayRecord::date);
        holidays
    }
}

/// Holidays of `region` in `year`.
pub fn generate_holidays(year: i32, region: Bundesland) -> Vec<HolidayRecord> {
    HolidayGenerator::new(region).generate(year)
}

impl HolidayCalendar for HolidayGenerator {
    fn get_holidays(&self, year: i32) -> Vec<HolidayRecord> {
        self.generate(year)
    }
}
