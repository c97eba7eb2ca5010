//! Global `tracing` subscriber with a level that can be swapped at runtime.

use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

static LOG_RELOAD_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// Whether `RUST_LOG` is set in the environment.
pub fn rust_log_is_set() -> bool {
    std::env::var_os(EnvFilter::DEFAULT_ENV).is_some()
}

// `RUST_LOG` wins when present and parseable; otherwise the configured level.
fn startup_filter(configured_level: &str) -> EnvFilter {
    if rust_log_is_set()
        && let Ok(filter) = EnvFilter::try_from_default_env()
    {
        return filter;
    }
    EnvFilter::new(configured_level)
}

/// Installs the global subscriber filtered at `configured_level`.
///
/// `RUST_LOG` overrides the configured level. Once installed, later calls
/// only recompute and swap the filter.
pub fn init_tracing(configured_level: &str) {
    let filter = startup_filter(configured_level);

    if let Some(handle) = LOG_RELOAD_HANDLE.get() {
        let _ = handle.reload(filter);
        return;
    }

    let (reload_layer, handle) = reload::Layer::new(filter);
    let installed = tracing_subscriber::registry()
        .with(reload_layer)
        .with(fmt::layer())
        .try_init()
        .is_ok();
    if installed {
        let _ = LOG_RELOAD_HANDLE.set(handle);
    }
}

/// Replaces the active filter with `level`, ignoring `RUST_LOG`.
///
/// Returns `false` when the subscriber was not installed by [`init_tracing`].
pub fn apply_logging_level(level: &str) -> bool {
    match LOG_RELOAD_HANDLE.get() {
        Some(handle) => handle.reload(EnvFilter::new(level)).is_ok(),
        None => false,
    }
}
