use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendarerror::CalendarError;

/// A named holiday on a concrete date. Serializes as
/// `{"date": "YYYY-MM-DD", "name": "..."}`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub struct HolidayRecord {
    date: NaiveDate,
    name: String,
}

impl HolidayRecord {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> HolidayRecord {
        HolidayRecord {
            date,
            name: name.into(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_name(self) -> String {
        self.name
    }
}

/// Parses a zero-padded ISO `YYYY-MM-DD` date.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, CalendarError> {
    let s = s.trim();
    if s.len() != 10 {
        return Err(CalendarError::InvalidDate(s.to_owned()));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| CalendarError::InvalidDate(s.to_owned()))
}
