//! Opt-in tracing setup for hosts embedding `interval-scroller`.
//!
//! Events are emitted under `interval_scroller::api::*` targets:
//! - `debug`: field mount/destroy, gesture start/end, inertia and auto-repeat
//!   start/stop, picker open/close
//! - `trace`: started steps, lock/interval rejections, settles and fired timers
//! - `warn`: malformed seed text and non-finite input or timestamps
//!
//! A filter such as `RUST_LOG=interval_scroller=trace` follows one field's
//! timer activity step by step. Hosts with their own subscriber can skip
//! `init_default_tracing` entirely.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
