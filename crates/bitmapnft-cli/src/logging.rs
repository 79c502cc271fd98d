//! Logging setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbosity` picks the level
/// (0 = warn, 1 = debug, 2+ = trace).
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // A subscriber may already be installed (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}
