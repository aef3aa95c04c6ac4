//! Logging initialization
//!
//! Logs go to stderr: stdout carries the rendered report and must stay
//! clean for piping and for the console sink.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber once at startup.
///
/// `RUST_LOG` overrides `level`; the `--debug` flag overrides both.
pub fn init(debug: bool, level: &str) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}
