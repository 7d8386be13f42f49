//! Logging setup

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the crate logs at INFO,
/// or DEBUG when verbose.
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "cuisine_tour_check=debug"
    } else {
        "cuisine_tour_check=info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
