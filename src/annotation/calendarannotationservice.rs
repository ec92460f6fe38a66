use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::annotation::dayclass::{DateAnnotation, DayClass};
use crate::annotation::holidaywindow::{HolidayWindow, HolidayWindowCache};
use crate::configuration::SchoolCalendarConfig;
use crate::region::bundesland::Bundesland;
use crate::time::calendar::holidaygenerator::HolidayGenerator;
use crate::time::rangeofdates::RangeOfDates;
use crate::vacation::vacationmatcher;

/// Answers "holiday, vacation or neither" for single dates.
///
/// Built from one configuration snapshot. When the configuration changes the
/// caller builds a new service; nothing here mutates the snapshot. Holidays
/// are served from a memoized three-year window that re-centres on the year
/// of a queried date once that year leaves the window.
///
/// Holiday always takes precedence over vacation.
pub struct CalendarAnnotationService {
    config: Arc<SchoolCalendarConfig>,
    generator: HolidayGenerator,
    window_cache: HolidayWindowCache
}

impl CalendarAnnotationService {
    pub fn new(config: SchoolCalendarConfig) -> CalendarAnnotationService {
        CalendarAnnotationService::from_shared(Arc::new(config))
    }

    pub fn from_shared(config: Arc<SchoolCalendarConfig>) -> CalendarAnnotationService {
        let generator = HolidayGenerator::new(config.bundesland())
            .with_additional_holidays(config.additional_holidays().to_vec());
        CalendarAnnotationService {
            config,
            generator,
            window_cache: HolidayWindowCache::new()
        }
    }

    pub fn config(&self) -> &SchoolCalendarConfig {
        &self.config
    }

    pub fn region(&self) -> Bundesland {
        self.generator.region()
    }

    /// Holidays of `center_year - 1 ..= center_year + 1`, recomputed only
    /// when the centre year changes.
    pub fn holidays_for_window(&self, center_year: i32) -> Arc<HolidayWindow> {
        self.window_cache.get_or_compute(center_year, self.region(), || {
            HolidayWindow::compute(&self.generator, center_year)
        })
    }

    fn window_for(&self, d: NaiveDate) -> Arc<HolidayWindow> {
        match self.window_cache.current() {
            Some(window) if window.covers(d.year()) && window.region() == self.region() => window,
            _ => self.holidays_for_window(d.year())
        }
    }

    pub fn is_holiday(&self, d: NaiveDate) -> Option<String> {
        self.window_for(d).holiday_name(d).map(str::to_owned)
    }

    pub fn is_vacation(&self, d: NaiveDate) -> Option<&str> {
        vacationmatcher::is_vacation(d, self.config.school_vacations())
    }

    /// Classification and tooltip in one pass.
    pub fn annotate(&self, d: NaiveDate) -> DateAnnotation {
        if let Some(name) = self.is_holiday(d) {
            return DateAnnotation::holiday(d, name);
        }
        if let Some(name) = self.is_vacation(d) {
            return DateAnnotation::vacation(d, name);
        }
        DateAnnotation::plain(d)
    }

    pub fn classify(&self, d: NaiveDate) -> DayClass {
        self.annotate(d).class()
    }

    pub fn tooltip(&self, d: NaiveDate) -> Option<String> {
        self.annotate(d).into_label()
    }

    /// One annotation per day of `[from, to]`; empty when `from > to`.
    pub fn annotate_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<DateAnnotation> {
        match RangeOfDates::new(from, to) {
            Some(range) => range.iter().map(|d| self.annotate(d)).collect(),
            None => Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::holidayrecord::HolidayRecord;
    use crate::vacation::vacationinterval::VacationInterval;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bayern_service() -> CalendarAnnotationService {
        CalendarAnnotationService::new(SchoolCalendarConfig::new(
            Bundesland::Bayern,
            vec![
                VacationInterval::new("Osterferien", date(2026, 3, 30), date(2026, 4, 10)),
                VacationInterval::new("Pfingstferien", date(2026, 5, 26), date(2026, 6, 5)),
            ],
        ))
    }

    #[test]
    fn test_holiday_inside_vacation_is_holiday() {
        let service = bayern_service();
        // Karfreitag 2026 lies inside the Osterferien
        assert_eq!(service.classify(date(2026, 4, 3)), DayClass::Holiday);
        assert_eq!(service.tooltip(date(2026, 4, 3)).as_deref(), Some("Karfreitag"));
        assert_eq!(service.is_vacation(date(2026, 4, 3)), Some("Osterferien"));

        // so does Fronleichnam inside the Pfingstferien
        assert_eq!(service.classify(date(2026, 6, 4)), DayClass::Holiday);
    }

    #[test]
    fn test_vacation_and_plain_days() {
        let service = bayern_service();
        assert_eq!(service.classify(date(2026, 4, 8)), DayClass::Vacation);
        assert_eq!(service.tooltip(date(2026, 4, 8)).as_deref(), Some("Osterferien"));

        assert_eq!(service.classify(date(2026, 4, 14)), DayClass::None);
        assert_eq!(service.tooltip(date(2026, 4, 14)), None);
        assert_eq!(service.classify(date(2026, 4, 14)).as_str(), "");
    }

    #[test]
    fn test_vacation_boundaries() {
        let service = bayern_service();
        assert_eq!(service.is_vacation(date(2026, 3, 30)), Some("Osterferien"));
        assert_eq!(service.is_vacation(date(2026, 4, 10)), Some("Osterferien"));
        assert_eq!(service.is_vacation(date(2026, 3, 29)), None);
        assert_eq!(service.is_vacation(date(2026, 4, 11)), None);
    }

    #[test]
    fn test_is_holiday_names() {
        let service = bayern_service();
        assert_eq!(service.is_holiday(date(2026, 8, 15)).as_deref(), Some("Mariä Himmelfahrt"));
        assert_eq!(service.is_holiday(date(2026, 10, 31)), None);
    }

    #[test]
    fn test_window_contains_neighbour_years() {
        let service = bayern_service();
        let window = service.holidays_for_window(2026);
        for year in [2025, 2026, 2027] {
            assert!(window.holidays().iter().any(|h| h.date().year() == year));
        }
        assert!(Arc::ptr_eq(&window, &service.holidays_for_window(2026)));
    }

    #[test]
    fn test_window_is_reused_across_neighbour_years() {
        let service = bayern_service();
        let window = service.holidays_for_window(2026);
        assert_eq!(service.is_holiday(date(2027, 1, 1)).as_deref(), Some("Neujahr"));
        assert_eq!(service.is_holiday(date(2025, 12, 26)).as_deref(), Some("2. Weihnachtstag"));
        assert!(Arc::ptr_eq(&window, &service.window_cache.current().unwrap()));

        // leaving the window re-centres it
        assert_eq!(service.is_holiday(date(2030, 10, 3)).as_deref(), Some("Tag der Deutschen Einheit"));
        assert_eq!(service.window_cache.current().unwrap().center_year(), 2030);
    }

    #[test]
    fn test_region_from_configuration() {
        let service = CalendarAnnotationService::new(SchoolCalendarConfig::new(Bundesland::Sachsen, vec![]));
        assert_eq!(service.region(), Bundesland::Sachsen);
        assert_eq!(service.tooltip(date(2026, 11, 18)).as_deref(), Some("Buß- und Bettag"));
        assert_eq!(service.classify(date(2026, 6, 4)), DayClass::None);
    }

    #[test]
    fn test_additional_holidays_from_configuration() {
        let config = SchoolCalendarConfig::new(Bundesland::Bayern, vec![])
            .with_additional_holidays(vec![HolidayRecord::new(date(2026, 5, 15), "Brückentag")]);
        let service = CalendarAnnotationService::new(config);
        assert_eq!(service.classify(date(2026, 5, 15)), DayClass::Holiday);
        assert_eq!(service.tooltip(date(2026, 5, 15)).as_deref(), Some("Brückentag"));
    }

    #[test]
    fn test_annotate_range() {
        let service = bayern_service();
        let week = service.annotate_range(date(2026, 4, 2), date(2026, 4, 8));
        assert_eq!(week.len(), 7);
        let classes: Vec<DayClass> = week.iter().map(DateAnnotation::class).collect();
        assert_eq!(
            classes,
            vec![
                DayClass::Vacation, // Apr 2
                DayClass::Holiday,  // Karfreitag
                DayClass::Vacation,
                DayClass::Vacation, // Easter Sunday is not a public holiday here
                DayClass::Holiday,  // Ostermontag
                DayClass::Vacation,
                DayClass::Vacation,
            ]
        );
        assert_eq!(week[1].date(), date(2026, 4, 3));
        assert!(service.annotate_range(date(2026, 4, 8), date(2026, 4, 2)).is_empty());
    }

    #[test]
    fn test_service_is_shareable_across_threads() {
        let service = Arc::new(bayern_service());
        let handles: Vec<_> = (2020..2030)
            .map(|year| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || service.classify(date(year, 10, 3)))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), DayClass::Holiday);
        }
    }
}
