#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! With the `tracing` feature, [`trace!`](crate::trace) and
//! [`debug!`](crate::debug) are the `tracing` macros. Without it they expand to
//! nothing, so cut operations carry no logging cost.
//!
//! The `tracing-json` feature adds [`init_json`], which installs a JSON
//! subscriber for hosts that don't bring their own.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

// When tracing is not enabled, provide no-op macros
#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }
}

/// Environment variable read by [`init_json`] for the filter directive.
#[cfg(feature = "tracing-json")]
pub const LOG_ENV: &str = "RECTCUT_LOG";

/// Install a global JSON subscriber.
///
/// The filter comes from `RECTCUT_LOG` when set and parseable, otherwise from
/// `default_filter` (e.g. `"rectcut_core=debug"`). Fails if a global
/// subscriber is already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json(
    default_filter: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
}
