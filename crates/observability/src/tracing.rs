//! Tracing/logging initialization.
//!
//! Rebuild passes log at info level with an `entity_type` field; events
//! the folder skips log at trace level. Targets are kept in the output so
//! `RUST_LOG=tablefold_engine=trace` surfaces the permissive skip paths
//! of a single crate during debugging.

use tracing_subscriber::EnvFilter;

/// Directives applied when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVES: &str = "info";

/// Initialize tracing/logging for the process, honoring `RUST_LOG`.
///
/// Safe to call multiple times (subsequent calls are no-ops), so test
/// harnesses and binaries can both call it unconditionally.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    init_with_filter(filter);
}

/// Initialize with an explicit filter (used by harnesses that must not
/// depend on the environment).
pub fn init_with_filter(filter: EnvFilter) {
    // Flattened JSON fields so `entity_type`, `tenant`, and counts are
    // top-level keys for log pipelines.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .flatten_event(true)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(true)
        .try_init();
}
