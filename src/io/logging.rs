//! Tracing subscriber setup for command-line runs
//!
//! Log lines go to stderr so they never mix with exported payloads. The
//! `RUST_LOG` environment variable overrides the level chosen by flags.

use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity flags
///
/// `quiet` wins over any number of `-v` flags.
pub const fn default_directive(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter from `RUST_LOG`, falling back to `default_directive`
pub fn build_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install the global subscriber
///
/// Calling this more than once keeps the first subscriber.
pub fn init_logging(quiet: bool, verbose: u8) {
    let filter = build_filter(default_directive(quiet, verbose));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
