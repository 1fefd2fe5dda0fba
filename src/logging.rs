// ============================================================================
// Logging
// Subscriber setup for binaries and demos embedding the library
// ============================================================================
//
// The library itself only emits `tracing` events: registry fallbacks at
// warn, runtime registrations at info, rejected cross-currency operations
// and mark-to-market derivations at debug.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Install a formatting subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed; the
/// existing one is left in place.
///
/// ```
/// exact_money::logging::init_logging();
/// ```
pub fn init_logging() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
