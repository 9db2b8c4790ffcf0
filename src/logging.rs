//! Diagnostics for the tool itself.
//!
//! Reformatted log lines go to stdout; anything `tracefmt` has to say about
//! its own operation goes to stderr through `tracing`, filtered by the
//! `TRACEFMT_LOG` environment variable (same syntax as `RUST_LOG`).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostic filter directive.
pub const FILTER_ENV_VAR: &str = "TRACEFMT_LOG";

/// Filter used when [`FILTER_ENV_VAR`] is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global stderr subscriber. Calling this more than once is harmless.
pub fn init() {
    let directive = std::env::var(FILTER_ENV_VAR).ok();
    let (filter, rejected) = match directive.as_deref().map(EnvFilter::try_new) {
        Some(Ok(filter)) => (filter, None),
        Some(Err(e)) => (EnvFilter::new(DEFAULT_FILTER), Some(e)),
        None => (EnvFilter::new(DEFAULT_FILTER), None),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed && let Some(e) = rejected {
        tracing::warn!("ignoring invalid {FILTER_ENV_VAR}: {e}");
    }
}
