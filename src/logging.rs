//! Tracing setup shared by the site launcher and the extraction binaries.

use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber. `RUST_LOG` wins over `default_level`.
///
/// Output goes to stderr so the extraction binaries keep stdout clean.
pub fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let installed = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stderr)
                .with_filter(env_filter),
        )
        .try_init();
    if installed.is_ok() {
        debug!("Logging initialized; override level with RUST_LOG");
    }
}
