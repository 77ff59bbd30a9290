//! Records, the shared aggregator, and the calorie and cash calculators built on it.

pub mod calculator;
pub mod calories;
pub mod cash;
pub mod record;
pub mod report;

pub use calculator::{Calculator, WEEK_LOOKBACK_DAYS};
pub use calories::CaloriesCalculator;
pub use cash::CashCalculator;
pub use record::{format_date, parse_date, Record, DATE_FORMAT};
pub use report::{CaloriesReport, CashReport, Window};
