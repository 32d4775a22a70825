#[cfg(not(target_arch = "wasm32"))]
use std::sync::Once;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::EnvFilter;

#[cfg(not(target_arch = "wasm32"))]
static TRACING_INIT: Once = Once::new();

/// Filter directive used when `RUST_LOG` is unset, blank or invalid.
pub const DEFAULT_DIRECTIVE: &str = "expense_tracker_core=info";

/// Installs a global fmt subscriber filtered by `RUST_LOG`, with this
/// crate at `info` when `RUST_LOG` gives nothing usable. Safe to call more
/// than once; a subscriber already installed by the host is left in place.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let filter = env_filter(directives.as_deref());
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}

/// Build the filter from `RUST_LOG`-style directives, falling back to
/// [`DEFAULT_DIRECTIVE`].
#[cfg(not(target_arch = "wasm32"))]
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
