use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Install a compact stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise everything is at `warn` and
/// `verbose` raises the engine and the CLI to `debug`.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "warn,shelter_availability=debug,availability=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let format = fmt::format().compact().without_time().with_target(false);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
