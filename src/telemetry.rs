//! Telemetry helpers for applications embedding `bar-chart-rs`.
//!
//! The engine only emits `tracing` events (dataset binds, rejected datasets,
//! animation phase changes). Installing a subscriber is left to the host.

/// Directive used when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_FILTER: &str = "info";

/// Initializes a compact `tracing` subscriber honoring `RUST_LOG`, falling back
/// to [`DEFAULT_TRACING_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_TRACING_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"bar_chart_rs=trace"` to watch animation transitions.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
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

#[cfg(test)]
mod tests {
    use super::init_tracing_with_fallback;

    #[test]
    fn second_init_is_rejected() {
        let _ = init_tracing_with_fallback("bar_chart_rs=debug");
        assert!(!init_tracing_with_fallback("bar_chart_rs=debug"));
    }
}
