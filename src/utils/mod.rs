use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default directive used when neither `RUST_LOG` nor the config names one.
pub const DEFAULT_LOG_DIRECTIVE: &str = "budget_calc=info";

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() -> bool {
    init_tracing_with(None)
}

/// Initializes tracing, preferring `RUST_LOG`, then `directive`, then the crate default.
///
/// Returns `true` only when this call installed the subscriber. Later calls, and calls made
/// after the host application installed its own subscriber, leave logging untouched.
pub fn init_tracing_with(directive: Option<&str>) -> bool {
    let mut installed = false;
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(directive.unwrap_or(DEFAULT_LOG_DIRECTIVE)))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

        match fmt().with_env_filter(filter).try_init() {
            Ok(()) => installed = true,
            Err(err) => {
                tracing::debug!(%err, "global subscriber already set, keeping the existing one");
            }
        }
    });
    if !installed {
        tracing::debug!(?directive, "tracing already initialized, directive not applied");
    }
    installed
}
