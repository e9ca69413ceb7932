use tracing_subscriber::EnvFilter;

/// Default filter: warnings only, or debug output for this crate when verbose.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "aisleep=debug,warn"
    } else {
        "warn"
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
/// Logs go to stderr so report output on stdout stays clean.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A subscriber may already be set (e.g. by a test harness)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
