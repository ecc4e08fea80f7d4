//! Tracing subscriber setup for the command line
//!
//! Events go to stderr so stdout stays clean for rendered output.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `debug`
pub const LOG_ENV: &str = "OLLAMA_PARAMS_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Build the filter: `--verbose` wins, then `OLLAMA_PARAMS_LOG`, then `warn`.
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }

    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
