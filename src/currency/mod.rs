use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Local currency units per US dollar.
pub const USD_RATE: f64 = 60.0;
/// Local currency units per euro.
pub const EURO_RATE: f64 = 70.0;
/// The local currency itself.
pub const RUB_RATE: f64 = 1.0;

/// Currencies the cash calculator can report in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Usd,
    Eur,
    Rub,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Rub];

    /// Lookup code accepted by [`FromStr`].
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Rub => "rub",
        }
    }

    /// Label printed after converted amounts.
    pub fn label(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "Euro",
            Currency::Rub => "руб",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Currency {
    type Err = CalcError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "usd" => Ok(Currency::Usd),
            "eur" => Ok(Currency::Eur),
            "rub" => Ok(Currency::Rub),
            other => {
                tracing::warn!(code = other, "unknown currency requested");
                Err(CalcError::UnknownCurrency(other.to_string()))
            }
        }
    }
}

/// Fixed conversion table, in local units per foreign unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates {
    #[serde(default = "ExchangeRates::default_usd")]
    pub usd: f64,
    #[serde(default = "ExchangeRates::default_eur")]
    pub eur: f64,
    #[serde(default = "ExchangeRates::default_rub")]
    pub rub: f64,
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self {
            usd: USD_RATE,
            eur: EURO_RATE,
            rub: RUB_RATE,
        }
    }
}

impl ExchangeRates {
    fn default_usd() -> f64 {
        USD_RATE
    }

    fn default_eur() -> f64 {
        EURO_RATE
    }

    fn default_rub() -> f64 {
        RUB_RATE
    }

    pub fn rate(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => self.usd,
            Currency::Eur => self.eur,
            Currency::Rub => self.rub,
        }
    }

    /// Converts a local amount into `currency` and rounds to cents.
    pub fn convert(&self, amount: f64, currency: Currency) -> f64 {
        round_to_cents(amount / self.rate(currency))
    }

    pub fn validate(&self) -> Result<(), CalcError> {
        for currency in Currency::ALL {
            let rate = self.rate(currency);
            if !rate.is_finite() || rate <= 0.0 {
                return Err(CalcError::Config(format!(
                    "rate for {} must be a positive number, got {}",
                    currency.code(),
                    rate
                )));
            }
        }
        Ok(())
    }
}

/// Renders a converted amount with at least one decimal place: `855.0`, `0.83`.
pub fn format_amount(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Rounds to two decimals, halves away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
