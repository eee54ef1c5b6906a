use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Diagnostics go to stderr so stdout only carries progress lines.
/// `RUST_LOG` wins over the verbosity flag when set.
pub(crate) fn init_logging(verbose: bool) {
    let default = if verbose {
        "aocfetch=debug"
    } else {
        "aocfetch=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(false)
                .compact(),
        )
        .try_init();
}
