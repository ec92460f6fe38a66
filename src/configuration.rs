use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calendarerror::CalendarError;
use crate::region::bundesland::Bundesland;
use crate::time::holidayrecord::HolidayRecord;
use crate::vacation::vacationinterval::VacationInterval;

/// Read-only snapshot of the admin configuration the engine works from.
///
/// ```json
/// {
///   "bundesland": "BY",
///   "schoolVacations": [{ "name": "Osterferien", "from": "2026-03-30", "to": "2026-04-10" }],
///   "additionalHolidays": [{ "date": "2026-02-16", "name": "Rosenmontag" }]
/// }
/// ```
///
/// Every field is optional. A missing or unknown `bundesland` means `BY`.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolCalendarConfig {
    #[serde(default)]
    bundesland: Bundesland,
    #[serde(default)]
    school_vacations: Vec<VacationInterval>,
    #[serde(default)]
    additional_holidays: Vec<HolidayRecord>
}

impl SchoolCalendarConfig {
    pub fn new(bundesland: Bundesland, school_vacations: Vec<VacationInterval>) -> SchoolCalendarConfig {
        SchoolCalendarConfig {
            bundesland,
            school_vacations,
            additional_holidays: Vec::new()
        }
    }

    pub fn with_additional_holidays(mut self, additional_holidays: Vec<HolidayRecord>) -> SchoolCalendarConfig {
        self.additional_holidays = additional_holidays;
        self
    }

    pub fn bundesland(&self) -> Bundesland {
        self.bundesland
    }

    pub fn school_vacations(&self) -> &[VacationInterval] {
        &self.school_vacations
    }

    pub fn additional_holidays(&self) -> &[HolidayRecord] {
        &self.additional_holidays
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<SchoolCalendarConfig, CalendarError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let config: SchoolCalendarConfig = serde_json::from_reader(reader)?;
        config.report_malformed_vacations();
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<SchoolCalendarConfig, CalendarError> {
        let config: SchoolCalendarConfig = serde_json::from_str(json)?;
        config.report_malformed_vacations();
        Ok(config)
    }

    pub fn from_json_value(json_value: serde_json::Value) -> Result<SchoolCalendarConfig, CalendarError> {
        let config: SchoolCalendarConfig = serde_json::from_value(json_value)?;
        config.report_malformed_vacations();
        Ok(config)
    }

    /// Malformed intervals stay in the list (they simply never match).
    fn report_malformed_vacations(&self) {
        for interval in self.school_vacations.iter().filter(|i| !i.is_well_formed()) {
            tracing::warn!(
                name = interval.name(),
                from = %interval.start_date(),
                to = %interval.end_date(),
                "Vacation interval ends before it starts and will never match"
            );
        }
    }
}
