use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter directive; `RUST_LOG` takes precedence when set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "sleeper_ffl=debug"
    } else {
        "sleeper_ffl=info"
    }
}

/// Install the global subscriber. Logs go to stderr so `--json` output on
/// stdout stays machine-readable. Calling this twice is a no-op.
pub fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init();
}
