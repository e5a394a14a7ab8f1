//! Logging setup.
//!
//! The report itself is written to stdout by the reporters; `tracing` carries
//! progress and diagnostics. Default level is `info`, overridable with
//! `RUST_LOG` (e.g. `RUST_LOG=vgsales=debug`).

use tracing_subscriber::{EnvFilter, fmt};

/// Initializes the console subscriber. Call once at startup.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
