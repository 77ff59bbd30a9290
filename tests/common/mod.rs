use std::sync::Arc;

use chrono::NaiveDate;

use budget_calc::time::FixedClock;

/// Fixed "today" shared by the scenario tests.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 23).expect("valid date")
}

pub fn days_ago(days: i64) -> NaiveDate {
    today() - chrono::Duration::days(days)
}

pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(today()))
}
