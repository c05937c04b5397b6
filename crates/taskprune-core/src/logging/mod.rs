use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Install the global JSON log subscriber on stderr.
///
/// Quiet mode only lets errors through so that stdout progress stays readable.
/// `RUST_LOG` overrides either default. Only the first call has any effect.
pub fn init_logging(quiet: bool) {
    INIT.call_once(|| {
        let default_level = if quiet { "error" } else { "info" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init();

        // Another global subscriber (e.g. one set by an embedding program) wins.
        if let Err(e) = installed {
            eprintln!("taskprune: structured logging disabled: {}", e);
        }
    });
}
