//! Logging setup for the command-line tool
//!
//! The library crates log through the `log` facade; the subscriber
//! installed here forwards those records to stderr.

use tracing_subscriber::EnvFilter;

/// Install the stderr logger.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or
/// debug output for confdata crates when `verbose` is set.
pub fn init(verbose: bool) {
    let default = if verbose {
        "warn,confdata=debug,confdata_types=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init()
    {
        eprintln!("failed to initialize logging: {}", err);
    }
}
