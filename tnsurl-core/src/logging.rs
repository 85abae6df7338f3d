//! Structured logging for the resolver.
//!
//! Logging is off unless requested through the environment:
//!
//! - `TNSURL_DEBUG=true|1|yes` - enable debug logging
//! - `TNSURL_LOG_LEVEL=trace|debug|info|warn|error` - pick a level
//! - `TNSURL_LOG_FORMAT=json|pretty|compact` - output format (default: json)
//!
//! ```rust,no_run
//! use tnsurl_core::logging;
//!
//! logging::init();
//! ```
//!
//! Unresolved URLs are reported at `info` with `url` and `error` fields, so
//! `TNSURL_LOG_LEVEL=info` is enough to see why a URL was rejected.

use std::env;
use std::sync::Once;

/// Enables debug logging.
pub const ENV_DEBUG: &str = "TNSURL_DEBUG";
/// Selects the log level.
pub const ENV_LOG_LEVEL: &str = "TNSURL_LOG_LEVEL";
/// Selects the output format.
pub const ENV_LOG_FORMAT: &str = "TNSURL_LOG_FORMAT";

static INIT: Once = Once::new();

/// Whether `TNSURL_DEBUG` is set to "true", "1" or "yes" (any case).
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var(ENV_DEBUG).is_ok_and(|v| is_truthy(&v))
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}

/// Level from `TNSURL_LOG_LEVEL`; "debug" when `TNSURL_DEBUG` is on, "warn" otherwise.
pub fn get_log_level() -> &'static str {
    level_from(env::var(ENV_LOG_LEVEL).ok().as_deref(), is_debug_enabled())
}

fn level_from(requested: Option<&str>, debug: bool) -> &'static str {
    let fallback = if debug { "debug" } else { "warn" };
    match requested.map(str::to_lowercase).as_deref() {
        Some("trace") => "trace",
        Some("debug") => "debug",
        Some("info") => "info",
        Some("warn") => "warn",
        Some("error") => "error",
        _ => fallback,
    }
}

/// Format from `TNSURL_LOG_FORMAT`, defaulting to "json".
pub fn get_log_format() -> &'static str {
    format_from(env::var(ENV_LOG_FORMAT).ok().as_deref())
}

fn format_from(requested: Option<&str>) -> &'static str {
    match requested.map(str::to_lowercase).as_deref() {
        Some("pretty") => "pretty",
        Some("compact") => "compact",
        _ => "json",
    }
}

/// Install the global subscriber. Later calls are no-ops.
///
/// Without the `tracing-subscriber` feature this does nothing and the host
/// application is expected to install its own subscriber.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var(ENV_LOG_LEVEL).is_err() {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = get_log_level();
            let filter = EnvFilter::try_new(format!(
                "tnsurl={level},tnsurl_core={level},tnsurl_cli={level}"
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            match get_log_format() {
                "json" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().json())
                        .init();
                }
                "compact" => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().compact())
                        .init();
                }
                _ => {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(fmt::layer().pretty())
                        .init();
                }
            }

            tracing::debug!(
                level = level,
                format = get_log_format(),
                "tnsurl logging initialized"
            );
        }
    });
}

/// Initialize logging at a specific level.
///
/// # Safety
///
/// Sets `TNSURL_LOG_LEVEL`, which is unsound once other threads read the
/// environment. Call it at startup.
pub fn init_with_level(level: &str) {
    // SAFETY: called at startup before threads are spawned.
    unsafe {
        env::set_var(ENV_LOG_LEVEL, level);
    }
    init();
}

/// Same as running with `TNSURL_DEBUG=true`.
///
/// # Safety
///
/// Sets `TNSURL_DEBUG`; see [`init_with_level`].
pub fn init_debug() {
    // SAFETY: called at startup before threads are spawned.
    unsafe {
        env::set_var(ENV_DEBUG, "true");
    }
    init();
}

/// Debug event emitted only when `TNSURL_DEBUG` is on.
#[macro_export]
macro_rules! tnsurl_debug {
    ($($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            tracing::debug!($($arg)*);
        }
    };
}

/// Trace event emitted only when `TNSURL_DEBUG` is on.
#[macro_export]
macro_rules! tnsurl_trace {
    ($($arg:tt)*) => {
        if $crate::logging::is_debug_enabled() {
            tracing::trace!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy_values() {
        for value in ["true", "TRUE", "1", "yes", "Yes"] {
            assert!(is_truthy(value), "{value}");
        }
        for value in ["false", "0", "", "on"] {
            assert!(!is_truthy(value), "{value}");
        }
    }

    #[test]
    fn test_level_from() {
        assert_eq!(level_from(None, false), "warn");
        assert_eq!(level_from(None, true), "debug");
        assert_eq!(level_from(Some("INFO"), false), "info");
        assert_eq!(level_from(Some("trace"), false), "trace");
        assert_eq!(level_from(Some("loud"), false), "warn");
        assert_eq!(level_from(Some("loud"), true), "debug");
    }

    #[test]
    fn test_format_from() {
        assert_eq!(format_from(None), "json");
        assert_eq!(format_from(Some("Pretty")), "pretty");
        assert_eq!(format_from(Some("compact")), "compact");
        assert_eq!(format_from(Some("xml")), "json");
    }

    #[test]
    fn test_debug_macros_compile() {
        crate::tnsurl_debug!(url = "jdbc:tibero:thin:@h:1:db", "debug event");
        crate::tnsurl_trace!("trace event");
    }
}
