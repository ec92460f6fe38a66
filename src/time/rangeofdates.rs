use chrono::{
    Days,
    NaiveDate
};

/// Inclusive range of calendar days. An inverted pair is not a range.
#[derive(Clone, Copy)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Option<RangeOfDates> {
        if start_date > end_date {
            None
        } else {
            Some(RangeOfDates { start_date, end_date })
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn len(&self) -> usize {
        ((self.end_date - self.start_date).num_days() + 1) as usize
    }

    pub fn contain(&self, d: NaiveDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }

    pub fn overlap(&self, other: &RangeOfDates) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }

    pub fn iter(&self) -> RangeOfDatesIterator<'_> {
        RangeOfDatesIterator {
            range_of_dates: self,
            index: 0,
        }
    }
}

pub struct RangeOfDatesIterator<'a> {
    range_of_dates: &'a RangeOfDates,
    index: usize,
}

impl<'a> Iterator for RangeOfDatesIterator<'a> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.range_of_dates.len() {
            let result = self.range_of_dates
                .start_date()
                .checked_add_days(Days::new(self.index as u64));
            self.index += 1;
            result
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        assert!(RangeOfDates::new(date(2026, 1, 2), date(2026, 1, 1)).is_none());
    }

    #[test]
    fn test_iterates_inclusive_across_month_end() {
        let range = RangeOfDates::new(date(2026, 2, 27), date(2026, 3, 2)).unwrap();
        let days: Vec<NaiveDate> = range.iter().collect();
        assert_eq!(range.len(), 4);
        assert_eq!(days, vec![date(2026, 2, 27), date(2026, 2, 28), date(2026, 3, 1), date(2026, 3, 2)]);
    }

    #[test]
    fn test_contain_and_overlap() {
        let range = RangeOfDates::new(date(2026, 3, 30), date(2026, 4, 10)).unwrap();
        assert!(range.contain(date(2026, 3, 30)));
        assert!(range.contain(date(2026, 4, 10)));
        assert!(!range.contain(date(2026, 4, 11)));

        let touching = RangeOfDates::new(date(2026, 4, 10), date(2026, 4, 20)).unwrap();
        let apart = RangeOfDates::new(date(2026, 4, 11), date(2026, 4, 20)).unwrap();
        assert!(range.overlap(&touching));
        assert!(!range.overlap(&apart));
    }
}
