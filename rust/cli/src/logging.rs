//! Tracing setup for the binary.
//!
//! Log lines go to stderr so they never interleave with game output on
//! stdout. `RUST_LOG` overrides the default filter, e.g.
//! `RUST_LOG=flip7_engine=debug flip7 play`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install the global fmt subscriber. Safe to call more than once.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
