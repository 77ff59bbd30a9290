use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    errors::CalcError,
    time::{Clock, SystemClock},
};

/// Input and display format for record dates, e.g. `23.03.2024`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A single dated amount with a free-text comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    amount: f64,
    comment: String,
    date: NaiveDate,
}

impl Record {
    /// Creates a record, parsing `date` as `DD.MM.YYYY` or falling back to today's local date.
    pub fn new(
        amount: f64,
        comment: impl Into<String>,
        date: Option<&str>,
    ) -> Result<Self, CalcError> {
        Self::with_clock(amount, comment, date, &SystemClock)
    }

    pub fn with_clock(
        amount: f64,
        comment: impl Into<String>,
        date: Option<&str>,
        clock: &dyn Clock,
    ) -> Result<Self, CalcError> {
        let date = match date {
            Some(raw) => parse_date(raw)?,
            None => clock.today(),
        };
        Ok(Self::on(amount, comment, date))
    }

    pub fn on(amount: f64, comment: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            comment: comment.into(),
            date,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn formatted_date(&self) -> String {
        format_date(self.date)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.formatted_date(), self.amount, self.comment)
    }
}

/// Parses a strict `DD.MM.YYYY` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, CalcError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|source| {
        tracing::warn!(input = raw, "rejected record date");
        CalcError::DateParse {
            input: raw.to_string(),
            source,
        }
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
