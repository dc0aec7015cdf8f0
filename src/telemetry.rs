//! Opt-in tracing setup for hosts embedding the radar engine.
//!
//! Layout and scene assembly emit `tracing` events but never install a
//! subscriber on their own; a host that wants quick diagnostics without
//! wiring its own subscriber can call [`init_default_tracing`] once at
//! startup.

/// Filter applied when `RUST_LOG` is absent.
#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "info";

/// Installs a compact global subscriber honoring `RUST_LOG`.
///
/// Only available behind the `telemetry` feature; without it this is a no-op
/// returning `false`. Also returns `false` when the host already set a global
/// subscriber, leaving that one in place.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
