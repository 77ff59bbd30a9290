#![doc(test(attr(deny(warnings))))]

//! Budget Calc keeps dated calorie and cash records and reports what is left
//! of a limit for today and for the trailing week.

pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod time;
pub mod utils;

use std::sync::Once;

pub use errors::CalcError;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Calc tracing initialized.");
    });
}

/// Like [`init`], but honours the `log_filter` from a loaded [`config::Config`].
///
/// Tracing is set up once per process: if [`init`] (or an earlier call of this function)
/// already ran, the config's filter is not applied and `false` is returned.
pub fn init_with_config(config: &config::Config) -> bool {
    let mut applied = false;
    INIT_TRACING.call_once(|| {
        applied = utils::init_tracing_with(config.log_filter.as_deref());
        tracing::info!(
            calories_limit = config.calories_limit,
            cash_limit = config.cash_limit,
            "Budget Calc tracing initialized."
        );
    });
    if !applied {
        tracing::debug!(
            log_filter = ?config.log_filter,
            "tracing already initialized, config log filter skipped"
        );
    }
    applied
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }

    #[test]
    fn config_filter_is_skipped_once_tracing_is_up() {
        super::init();
        let config = crate::config::Config {
            log_filter: Some("budget_calc=trace".into()),
            ..Default::default()
        };
        assert!(!super::init_with_config(&config));
    }
}
