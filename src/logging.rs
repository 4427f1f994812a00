//! Diagnostic logging to stderr using `tracing`.
//!
//! Stdout carries only relayed child output, so every log line goes to
//! stderr. Quiet by default; `RUST_LOG` is honored.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber.
///
/// `verbose` forces debug output for this crate. Calling this more than once
/// keeps the first subscriber.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("atrium=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
    if installed.is_err() {
        tracing::debug!("subscriber already installed");
    }
}
