use std::sync::Arc;

use super::{calculator::Calculator, record::Record, report::CaloriesReport};
use crate::time::Clock;

/// Tracks eaten calories against a daily limit.
#[derive(Debug, Clone)]
pub struct CaloriesCalculator {
    inner: Calculator,
}

impl CaloriesCalculator {
    pub fn new(limit: f64) -> Self {
        Self {
            inner: Calculator::new(limit),
        }
    }

    pub fn with_clock(limit: f64, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Calculator::with_clock(limit, clock),
        }
    }

    pub fn add_record(&mut self, record: Record) {
        self.inner.add_record(record);
    }

    pub fn calculator(&self) -> &Calculator {
        &self.inner
    }

    pub fn today_report(&self) -> CaloriesReport {
        let balance = self.inner.balance(self.inner.today_stats());
        CaloriesReport::from_balance(balance)
    }

    pub fn week_report(&self) -> CaloriesReport {
        let balance = self.inner.balance(self.inner.week_stats());
        CaloriesReport::from_balance(balance)
    }

    pub fn calories_remained(&self) -> String {
        self.today_report().to_string()
    }

    pub fn week_calories_remained(&self) -> String {
        self.week_report().to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::time::FixedClock;

    fn setup() -> (CaloriesCalculator, NaiveDate) {
        let today = NaiveDate::from_ymd_opt(2024, 3, 23).unwrap();
        let calc = CaloriesCalculator::with_clock(2000.0, Arc::new(FixedClock::new(today)));
        (calc, today)
    }

    #[test]
    fn reports_remaining_allowance() {
        let (mut calc, today) = setup();
        calc.add_record(Record::on(1186.0, "Кусок тортика. И ещё один.", today));
        calc.add_record(Record::on(314.0, "Кофе", today));

        assert_eq!(
            calc.calories_remained(),
            "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более 500 кКал"
        );
    }

    #[test]
    fn exact_limit_means_stop() {
        let (mut calc, today) = setup();
        calc.add_record(Record::on(2000.0, "Пицца", today));
        assert_eq!(calc.calories_remained(), "Хватит есть!");
    }

    #[test]
    fn week_report_uses_the_week_window() {
        let (mut calc, today) = setup();
        calc.add_record(Record::on(1500.0, "вчера", today.pred_opt().unwrap()));
        calc.add_record(Record::on(100.0, "сегодня", today));

        assert_eq!(calc.today_report(), CaloriesReport::Remaining(1900.0));
        assert_eq!(calc.week_report(), CaloriesReport::Remaining(400.0));

        calc.add_record(Record::on(400.0, "ужин", today));
        assert_eq!(calc.week_calories_remained(), "Хватит есть!");
    }
}
