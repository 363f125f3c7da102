//! Diagnostic logging to stderr.
//!
//! Filter precedence: `RUST_LOG`, then `HEADEREXPOSER_LOG`, then the `-v`
//! count. Standard output stays reserved for findings.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable read when `RUST_LOG` is unset.
pub const LOG_ENV: &str = "HEADEREXPOSER_LOG";

/// Default filter for a given `-v` count and `--quiet` flag.
#[must_use]
pub fn default_directive(verbose: u8, quiet: bool) -> String {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    format!("{}={level}", env!("CARGO_CRATE_NAME"))
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(verbose: u8, quiet: bool, use_colors: bool) {
    let directive = std::env::var("RUST_LOG")
        .or_else(|_| std::env::var(LOG_ENV))
        .unwrap_or_else(|_| default_directive(verbose, quiet));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(use_colors);

    // Fails only if a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(layer)
        .with(EnvFilter::new(directive))
        .try_init();
}
