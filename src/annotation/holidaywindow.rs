// ── holidaywindow.rs ────────────────────────────────────────────────────────

use std::sync::{Arc, PoisonError, RwLock};

use chrono::NaiveDate;

use crate::region::bundesland::Bundesland;
use crate::time::calendar::holidaygenerator::HolidayGenerator;
use crate::time::holidayrecord::HolidayRecord;

/// Holidays of three consecutive years centred on `center_year`, in
/// chronological order.
#[derive(Debug)]
pub struct HolidayWindow {
    center_year: i32,
    region: Bundesland,
    holidays: Vec<HolidayRecord>
}

impl HolidayWindow {
    pub fn compute(generator: &HolidayGenerator, center_year: i32) -> HolidayWindow {
        let holidays = window_years(center_year)
            .flat_map(|year| generator.generate(year))
            .collect();
        HolidayWindow {
            center_year,
            region: generator.region(),
            holidays
        }
    }

    pub fn center_year(&self) -> i32 {
        self.center_year
    }

    pub fn region(&self) -> Bundesland {
        self.region
    }

    pub fn holidays(&self) -> &[HolidayRecord] {
        &self.holidays
    }

    pub fn covers(&self, year: i32) -> bool {
        window_years(self.center_year).any(|y| y == year)
    }

    /// Name of the first holiday on `d` in this window.
    pub fn holiday_name(&self, d: NaiveDate) -> Option<&str> {
        self.holidays
            .iter()
            .find(|h| h.date() == d)
            .map(HolidayRecord::name)
    }
}

fn window_years(center_year: i32) -> impl Iterator<Item = i32> {
    center_year.saturating_sub(1)..=center_year.saturating_add(1)
}

/// Holidays of `center_year - 1`, `center_year` and `center_year + 1`.
pub fn holidays_for_window(center_year: i32, region: Bundesland) -> Vec<HolidayRecord> {
    HolidayWindow::compute(&HolidayGenerator::new(region), center_year).holidays
}

// ── Single-entry cache keyed by (center_year, region) ───────────────────────
//
// The key is compared under the read lock; on a miss the window is computed
// outside any lock and then written back. Two threads may both recompute the
// same window. A window is a pure function of its key, so a poisoned lock
// still holds a valid value and is recovered.

pub struct HolidayWindowCache {
    window: RwLock<Option<Arc<HolidayWindow>>>
}

impl HolidayWindowCache {
    pub fn new() -> Self {
        Self {
            window: RwLock::new(None)
        }
    }

    /// The cached window, if any.
    pub fn current(&self) -> Option<Arc<HolidayWindow>> {
        self.window
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get_or_compute(
        &self,
        center_year: i32,
        region: Bundesland,
        compute: impl FnOnce() -> HolidayWindow,
    ) -> Arc<HolidayWindow> {
        if let Some(window) = self.current() {
            if window.center_year() == center_year && window.region() == region {
                return window;
            }
        }

        let window = Arc::new(compute());
        tracing::debug!(
            center_year,
            region = %region,
            holidays = window.holidays().len(),
            "Recomputed holiday window"
        );
        *self.window.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&window));
        window
    }

    pub fn invalidate(&self) {
        *self.window.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl Default for HolidayWindowCache {
    fn default() -> Self {
        Self::new()
    }
}
