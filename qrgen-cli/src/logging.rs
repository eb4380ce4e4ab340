//! Verbosity-driven tracing setup for the binary.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber from the `-v` count. An explicit
/// `RUST_LOG` always wins over the flag.
pub fn init(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
