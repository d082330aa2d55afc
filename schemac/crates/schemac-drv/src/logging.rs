//! Logging setup.

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global subscriber.
///
/// Logs go to stderr so that stdout carries nothing but tokens. `RUST_LOG`
/// is not consulted: the level is `info`, or `debug` with `verbose`.
pub fn init_logging(verbose: bool, no_color: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("failed to initialize logging")
}
