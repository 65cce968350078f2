//! Telemetry helpers for applications embedding `chart-data`.
//!
//! Tracing setup stays opt-in. Hosts either call one of the helpers below or
//! install their own `tracing` subscriber; the registry and merge only emit
//! `debug!`/`trace!` events.

/// Initializes the default subscriber with an `info` fallback filter.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing("info")
}

/// Initializes a compact stderr subscriber when the `telemetry` feature is enabled.
///
/// `RUST_LOG` takes precedence over `fallback_directive`. Output goes to
/// stderr so tools can keep stdout for JSON.
///
/// Returns `false` when the feature is disabled, the directive is invalid, or a
/// global subscriber is already installed.
#[must_use]
pub fn init_tracing(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => match tracing_subscriber::EnvFilter::try_new(fallback_directive) {
                Ok(filter) => filter,
                Err(_) => return false,
            },
        };

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
