//! Logging setup
//!
//! Installs a `tracing` subscriber writing to stderr, so a report printed on
//! stdout is never interleaved with log lines.

use tracing_subscriber::EnvFilter;

/// Filter directive for a verbosity level (`-q` = -1, default = 0, `-v` = 1, `-vv` = 2)
pub fn default_directive(verbosity: i8) -> &'static str {
    match verbosity {
        i8::MIN..=-1 => "secdoc=error",
        0 => "secdoc=info",
        1 => "secdoc=debug",
        _ => "secdoc=trace",
    }
}

/// Build the filter; `RUST_LOG` wins over the verbosity flags
pub fn build_filter(verbosity: i8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)))
}

/// Initialize the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbosity: i8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
