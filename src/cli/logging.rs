//! Diagnostic logging for the binary.
//!
//! Library code emits `tracing` events; this installs the subscriber that
//! prints them. Output goes to stderr so stdout stays clean for tokens.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `--verbose` forces `sealtoken=debug`; otherwise `RUST_LOG` applies,
/// falling back to `warn`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("sealtoken=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second init (e.g. from tests) is harmless; ignore it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
