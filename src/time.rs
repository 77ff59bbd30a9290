use std::sync::Mutex;

use chrono::{Duration, Local, NaiveDate};

/// Clock abstracts access to the current date so calculators stay deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current calendar date.
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a date until moved explicitly.
#[derive(Debug)]
pub struct FixedClock {
    date: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Mutex::new(date),
        }
    }

    pub fn set(&self, date: NaiveDate) {
        *self.date.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = date;
    }

    /// Moves the clock forward (or backward for negative values) by whole days.
    pub fn advance(&self, days: i64) {
        let mut guard = self.date.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = *guard + Duration::days(days);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.date.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_moves_only_when_told() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 23).unwrap();
        let clock = FixedClock::new(start);
        assert_eq!(clock.today(), start);

        clock.advance(1);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 24).unwrap());

        clock.set(start);
        assert_eq!(clock.today(), start);
    }
}
