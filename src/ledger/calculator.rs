use std::{fmt, sync::Arc};

use chrono::{Duration, NaiveDate};

use super::record::Record;
use crate::time::{Clock, SystemClock};

/// Length of the trailing window looked back from today, today excluded.
pub const WEEK_LOOKBACK_DAYS: i64 = 7;

/// Owns a limit and the records counted against it.
///
/// "Today" is read from the clock on every aggregation, never cached.
#[derive(Clone)]
pub struct Calculator {
    limit: f64,
    records: Vec<Record>,
    clock: Arc<dyn Clock>,
}

impl Calculator {
    pub fn new(limit: f64) -> Self {
        Self::with_clock(limit, Arc::new(SystemClock))
    }

    pub fn with_clock(limit: f64, clock: Arc<dyn Clock>) -> Self {
        Self {
            limit,
            records: Vec::new(),
            clock,
        }
    }

    pub fn add_record(&mut self, record: Record) {
        tracing::debug!(
            amount = record.amount(),
            date = %record.date(),
            "record added"
        );
        self.records.push(record);
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Sum of amounts dated exactly today.
    pub fn today_stats(&self) -> f64 {
        let today = self.today();
        self.window(today, today)
    }

    /// Sum of amounts dated within `[today - 7 days, today]`.
    pub fn week_stats(&self) -> f64 {
        let today = self.today();
        self.window(today - Duration::days(WEEK_LOOKBACK_DAYS), today)
    }

    /// Sum of amounts dated within the inclusive range `[from, to]`.
    pub fn window(&self, from: NaiveDate, to: NaiveDate) -> f64 {
        let total: f64 = self
            .records
            .iter()
            .filter(|record| (from..=to).contains(&record.date()))
            .map(Record::amount)
            .sum();
        tracing::debug!(%from, %to, total, "aggregated window");
        total
    }

    pub fn balance(&self, amount: f64) -> f64 {
        self.limit - amount
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("limit", &self.limit)
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}
