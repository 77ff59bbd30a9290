use std::sync::Arc;

use super::{
    calculator::Calculator,
    record::Record,
    report::{CashReport, Window},
};
use crate::{
    currency::{Currency, ExchangeRates},
    errors::CalcError,
    time::Clock,
};

/// Tracks money spent against a limit expressed in the local currency.
#[derive(Debug, Clone)]
pub struct CashCalculator {
    inner: Calculator,
    rates: ExchangeRates,
}

impl CashCalculator {
    pub fn new(limit: f64) -> Self {
        Self {
            inner: Calculator::new(limit),
            rates: ExchangeRates::default(),
        }
    }

    pub fn with_clock(limit: f64, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Calculator::with_clock(limit, clock),
            rates: ExchangeRates::default(),
        }
    }

    /// Replaces the fixed conversion table. Every rate must be positive and finite.
    pub fn with_rates(mut self, rates: ExchangeRates) -> Result<Self, CalcError> {
        rates.validate()?;
        self.rates = rates;
        Ok(self)
    }

    pub fn rates(&self) -> &ExchangeRates {
        &self.rates
    }

    pub fn add_record(&mut self, record: Record) {
        self.inner.add_record(record);
    }

    pub fn calculator(&self) -> &Calculator {
        &self.inner
    }

    pub fn today_report(&self, currency: &str) -> Result<CashReport, CalcError> {
        let currency: Currency = currency.parse()?;
        Ok(self.report(Window::Today, self.inner.today_stats(), currency))
    }

    pub fn week_report(&self, currency: &str) -> Result<CashReport, CalcError> {
        let currency: Currency = currency.parse()?;
        Ok(self.report(Window::Week, self.inner.week_stats(), currency))
    }

    pub fn today_cash_remained(&self, currency: &str) -> Result<String, CalcError> {
        self.today_report(currency).map(|report| report.to_string())
    }

    pub fn week_cash_remained(&self, currency: &str) -> Result<String, CalcError> {
        self.week_report(currency).map(|report| report.to_string())
    }

    fn report(&self, window: Window, spent: f64, currency: Currency) -> CashReport {
        let balance = self.inner.balance(spent);
        let converted = self.rates.convert(balance.abs(), currency);
        CashReport::from_balance(window, balance, converted, currency)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::time::FixedClock;

    fn setup(limit: f64) -> (CashCalculator, NaiveDate) {
        let today = NaiveDate::from_ymd_opt(2024, 3, 23).unwrap();
        let calc = CashCalculator::with_clock(limit, Arc::new(FixedClock::new(today)));
        (calc, today)
    }

    #[test]
    fn debt_is_converted_and_rounded() {
        let (mut calc, today) = setup(100.0);
        calc.add_record(Record::on(150.0, "такси", today));
        assert_eq!(
            calc.today_cash_remained("usd").unwrap(),
            "Денег нет, держись: твой долг - 0.83 USD"
        );
    }

    #[test]
    fn surplus_uses_window_specific_wording() {
        let (mut calc, today) = setup(1000.0);
        calc.add_record(Record::on(145.0, "кофе", today));
        calc.add_record(Record::on(300.0, "обед", today.pred_opt().unwrap()));

        assert_eq!(calc.today_cash_remained("rub").unwrap(), "На сегодня осталось 855.0 руб");
        assert_eq!(
            calc.week_cash_remained("eur").unwrap(),
            "На этой неделе осталось 7.93 Euro"
        );
    }

    #[test]
    fn spending_exactly_the_limit_has_no_amount() {
        let (mut calc, today) = setup(300.0);
        calc.add_record(Record::on(300.0, "продукты", today));
        assert_eq!(calc.today_cash_remained("usd").unwrap(), "Денег нет, держись");
        assert_eq!(calc.today_report("eur").unwrap(), CashReport::Broke);
    }

    #[test]
    fn unknown_currency_fails_before_reporting() {
        let (mut calc, today) = setup(300.0);
        calc.add_record(Record::on(10.0, "чай", today));
        assert!(matches!(
            calc.today_cash_remained("gbp"),
            Err(CalcError::UnknownCurrency(code)) if code == "gbp"
        ));
        assert!(calc.week_report("gbp").is_err());
    }

    #[test]
    fn custom_rates_replace_the_defaults() {
        let (mut calc, today) = setup(100.0);
        calc = calc
            .with_rates(ExchangeRates {
                usd: 100.0,
                ..ExchangeRates::default()
            })
            .unwrap();
        calc.add_record(Record::on(50.0, "книга", today));
        assert_eq!(calc.today_cash_remained("usd").unwrap(), "На сегодня осталось 0.5 USD");
    }

    #[test]
    fn zero_or_negative_rates_are_refused() {
        for usd in [0.0, -60.0, f64::NAN] {
            let (calc, _) = setup(100.0);
            let result = calc.with_rates(ExchangeRates {
                usd,
                ..ExchangeRates::default()
            });
            assert!(matches!(result, Err(CalcError::Config(_))), "usd rate {usd}");
        }
    }
}
