use chrono::NaiveDate;

use crate::time::rangeofdates::RangeOfDates;
use super::vacationinterval::VacationInterval;

/// First interval in list order whose inclusive range contains `d`.
pub fn find_vacation(d: NaiveDate, intervals: &[VacationInterval]) -> Option<&VacationInterval> {
    intervals.iter().find(|interval| interval.contains(d))
}

/// Name of the first vacation containing `d`.
pub fn is_vacation(d: NaiveDate, intervals: &[VacationInterval]) -> Option<&str> {
    find_vacation(d, intervals).map(VacationInterval::name)
}

/// Every well-formed interval sharing at least one day with `range`,
/// in list order.
pub fn vacations_overlapping<'a>(
    range: &RangeOfDates,
    intervals: &'a [VacationInterval]
) -> Vec<&'a VacationInterval> {
    intervals
        .iter()
        .filter(|interval| interval.range().is_some_and(|r| r.overlap(range)))
        .collect()
}
