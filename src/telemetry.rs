//! Telemetry helpers for applications embedding `axis-rs`.
//!
//! Axis passes emit `tracing` events (coercion at `trace`, layout and
//! pan/zoom transitions at `debug`, repaired ranges at `warn`). Consumers can
//! either call `init_default_tracing` or wire their own subscriber.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "axis_rs=info";

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`, falling
/// back to [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback filter,
/// e.g. `"axis_rs=trace"` to see every range coercion.
#[must_use]
pub fn init_tracing_with(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback_filter))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::init_tracing_with;

    #[test]
    fn second_initialization_is_refused() {
        let _ = init_tracing_with("axis_rs=debug");
        assert!(!init_tracing_with("axis_rs=debug"));
    }
}
