//! Diagnostic logging to stderr.
//!
//! Progress output for users goes to stdout with `println!`; this is for
//! debugging runs. Filter with `VIBE_LOG` (e.g. `VIBE_LOG=vibe=debug`).

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub const LOG_ENV: &str = "VIBE_LOG";

/// Install the global subscriber. Later calls are ignored.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);

    let _ = tracing_subscriber::registry().with(env_filter).with(fmt_layer).try_init();
}
