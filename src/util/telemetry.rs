//! Telemetry helpers for structured logging of allocation decisions.

use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset: allocator decisions at `info`.
pub const DEFAULT_LOG_FILTER: &str = "workload_allocator=info";

/// Initialize tracing with an env-based subscriber if none is set.
///
/// Hosts that install their own subscriber keep it; this call is then a no-op.
pub fn init_tracing() {
    init_tracing_with(DEFAULT_LOG_FILTER);
}

/// Same as [`init_tracing`], with an explicit fallback filter used when `RUST_LOG`
/// is unset or unparsable.
pub fn init_tracing_with(fallback: &str) {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
