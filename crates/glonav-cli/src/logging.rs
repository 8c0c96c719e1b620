//! Tracing subscriber setup for the `glonav` binary.
//!
//! Library crates log through the `log` facade; the subscriber's
//! `tracing-log` bridge forwards those records. Output goes to stderr so
//! `--format json` stays parseable on stdout.

use tracing_subscriber::EnvFilter;

/// Filter directive in effect: `RUST_LOG` when set, else `debug` under
/// `--verbose`, else the configured level.
pub fn filter_directive(rust_log: Option<&str>, level: &str, verbose: bool) -> String {
    match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        Some(directive) => directive.to_string(),
        None if verbose => "debug".to_string(),
        None => level.to_string(),
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(level: &str, verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(rust_log.as_deref(), level, verbose);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("Invalid log filter '{directive}' ({e}), falling back to info");
        EnvFilter::new("info")
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

// ============================================================================
// Tests
// ============================================================================
