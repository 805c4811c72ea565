//! Logging setup for the CLI

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter for a verbosity level given as a count of `-v` flags
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "sectionplan=warn",
        1 => "sectionplan=debug",
        _ => "sectionplan=trace",
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the verbosity flags.
///
/// Logs go to stderr so reports on stdout can be piped. Calling this twice
/// is harmless: the second install attempt is ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
