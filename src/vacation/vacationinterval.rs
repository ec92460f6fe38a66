use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::rangeofdates::RangeOfDates;

/// A named school-vacation period with inclusive boundaries.
///
/// Intervals come from the admin configuration as-is. One with
/// `from > to` is malformed and never contains any date.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct VacationInterval {
    name: String,
    from: NaiveDate,
    to: NaiveDate
}

impl VacationInterval {
    pub fn new(name: impl Into<String>, from: NaiveDate, to: NaiveDate) -> VacationInterval {
        VacationInterval {
            name: name.into(),
            from,
            to
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_date(&self) -> NaiveDate {
        self.from
    }

    pub fn end_date(&self) -> NaiveDate {
        self.to
    }

    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.from <= self.to
    }

    pub fn range(&self) -> Option<RangeOfDates> {
        RangeOfDates::new(self.from, self.to)
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        self.range().is_some_and(|r| r.contain(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_deserializes_iso_strings() {
        let interval: VacationInterval = serde_json::from_str(
            r#"{"name": "Pfingstferien", "from": "2026-05-26", "to": "2026-06-05"}"#
        ).unwrap();
        assert_eq!(interval.name(), "Pfingstferien");
        assert_eq!(interval.start_date(), date(2026, 5, 26));
        assert_eq!(interval.end_date(), date(2026, 6, 5));
    }

    #[test]
    fn test_single_day_interval() {
        let interval = VacationInterval::new("Brückentag", date(2026, 5, 15), date(2026, 5, 15));
        assert!(interval.is_well_formed());
        assert!(interval.contains(date(2026, 5, 15)));
        assert!(!interval.contains(date(2026, 5, 14)));
    }

    #[test]
    fn test_malformed_never_contains() {
        let interval = VacationInterval::new("kaputt", date(2026, 8, 10), date(2026, 8, 1));
        assert!(!interval.is_well_formed());
        assert!(!interval.contains(date(2026, 8, 1)));
        assert!(!interval.contains(date(2026, 8, 5)));
        assert!(!interval.contains(date(2026, 8, 10)));
    }
}
