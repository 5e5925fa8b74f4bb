//! Tracing subscriber setup.
//!
//! Logs go to stderr so the report on stdout stays clean. `RUST_LOG` wins
//! over the `-v` count when set. `log` records (the config loader uses the
//! `log` facade) are bridged into the same subscriber.

use tracing_subscriber::EnvFilter;

/// Default level for a `-v` count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));
    install(filter);
}

/// Like [`init_tracing`], but ignores `RUST_LOG`.
pub fn init_fixed_tracing(level: &str) {
    install(EnvFilter::new(level));
}

fn install(filter: EnvFilter) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
