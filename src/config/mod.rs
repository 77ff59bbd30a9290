use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    currency::{Currency, ExchangeRates},
    errors::CalcError,
    ledger::{CaloriesCalculator, CashCalculator},
    time::{Clock, SystemClock},
};

const CONFIG_DIR_NAME: &str = "budget_calc";
const CONFIG_FILE_NAME: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Limits, conversion rates, and logging preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_calories_limit")]
    pub calories_limit: f64,
    #[serde(default = "Config::default_cash_limit")]
    pub cash_limit: f64,
    #[serde(default)]
    pub rates: ExchangeRates,
    #[serde(default = "Config::default_currency_code")]
    pub default_currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calories_limit: Self::default_calories_limit(),
            cash_limit: Self::default_cash_limit(),
            rates: ExchangeRates::default(),
            default_currency: Self::default_currency_code(),
            log_filter: None,
        }
    }
}

impl Config {
    pub fn default_calories_limit() -> f64 {
        2000.0
    }

    pub fn default_cash_limit() -> f64 {
        1000.0
    }

    pub fn default_currency_code() -> String {
        Currency::Rub.code().into()
    }

    pub fn currency(&self) -> Result<Currency, CalcError> {
        self.default_currency.parse()
    }

    /// Rejects settings the calculators cannot report against.
    pub fn validate(&self) -> Result<(), CalcError> {
        for (name, limit) in [
            ("calories_limit", self.calories_limit),
            ("cash_limit", self.cash_limit),
        ] {
            if !limit.is_finite() {
                return Err(CalcError::Config(format!("{name} must be finite")));
            }
        }
        self.rates.validate()?;
        self.currency()?;
        Ok(())
    }

    pub fn calories_calculator(&self) -> CaloriesCalculator {
        self.calories_calculator_with_clock(Arc::new(SystemClock))
    }

    pub fn calories_calculator_with_clock(&self, clock: Arc<dyn Clock>) -> CaloriesCalculator {
        CaloriesCalculator::with_clock(self.calories_limit, clock)
    }

    pub fn cash_calculator(&self) -> Result<CashCalculator, CalcError> {
        self.cash_calculator_with_clock(Arc::new(SystemClock))
    }

    pub fn cash_calculator_with_clock(
        &self,
        clock: Arc<dyn Clock>,
    ) -> Result<CashCalculator, CalcError> {
        CashCalculator::with_clock(self.cash_limit, clock).with_rates(self.rates)
    }
}

/// Loads and stores [`Config`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses the platform configuration directory, falling back to the working directory.
    pub fn new() -> Result<Self, CalcError> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME);
        Self::with_base_dir(base)
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, CalcError> {
        let config_dir = base.join("config");
        fs::create_dir_all(&config_dir)?;
        Ok(Self {
            path: config_dir.join(CONFIG_FILE_NAME),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config, CalcError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), CalcError> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "config saved");
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CalcError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
