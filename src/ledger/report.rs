//! Typed outcomes of the calorie and cash queries. `Display` renders the user-facing message.

use std::fmt;

use crate::currency::{format_amount, Currency};

pub const CALORIES_REMAINING: &str =
    "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более";
pub const CALORIES_EXHAUSTED: &str = "Хватит есть!";
pub const CASH_REMAINING_TODAY: &str = "На сегодня осталось";
pub const CASH_REMAINING_WEEK: &str = "На этой неделе осталось";
pub const CASH_BROKE: &str = "Денег нет, держись";

/// The period a report was aggregated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Today,
    Week,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaloriesReport {
    /// Strictly positive allowance left.
    Remaining(f64),
    Exhausted,
}

impl CaloriesReport {
    pub fn from_balance(balance: f64) -> Self {
        if balance > 0.0 {
            CaloriesReport::Remaining(balance)
        } else {
            CaloriesReport::Exhausted
        }
    }
}

impl fmt::Display for CaloriesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaloriesReport::Remaining(balance) => {
                write!(f, "{} {} кКал", CALORIES_REMAINING, balance)
            }
            CaloriesReport::Exhausted => f.write_str(CALORIES_EXHAUSTED),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CashReport {
    Remaining {
        window: Window,
        amount: f64,
        currency: Currency,
    },
    /// Spent exactly the limit.
    Broke,
    Debt {
        amount: f64,
        currency: Currency,
    },
}

impl CashReport {
    /// Classifies a local-currency balance; `converted` is the already rounded absolute value.
    pub fn from_balance(window: Window, balance: f64, converted: f64, currency: Currency) -> Self {
        if balance > 0.0 {
            CashReport::Remaining {
                window,
                amount: converted,
                currency,
            }
        } else if balance == 0.0 {
            CashReport::Broke
        } else {
            CashReport::Debt {
                amount: converted,
                currency,
            }
        }
    }
}

impl fmt::Display for CashReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CashReport::Remaining {
                window,
                amount,
                currency,
            } => {
                let lead = match window {
                    Window::Today => CASH_REMAINING_TODAY,
                    Window::Week => CASH_REMAINING_WEEK,
                };
                write!(f, "{} {} {}", lead, format_amount(*amount), currency)
            }
            CashReport::Broke => f.write_str(CASH_BROKE),
            CashReport::Debt { amount, currency } => {
                write!(
                    f,
                    "{}: твой долг - {} {}",
                    CASH_BROKE,
                    format_amount(*amount),
                    currency
                )
            }
        }
    }
}
