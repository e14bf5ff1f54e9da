use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset: service events at info, plus the
/// per-request debug line `probez` emits for every answered health check.
pub const DEFAULT_FILTER: &str = "info,probez=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the JSON stdout subscriber for the demo. Later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().json())
        .try_init();
}
