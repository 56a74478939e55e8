//! Logger setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise `name` (the crate or binary name) is
/// logged at `default_level`, and `tower_http` at `debug` so request traces show up.
pub fn setup_logger(name: &str, default_level: &str) {
    let crate_name = name.replace('-', "_");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{crate_name}={default_level},tower_http=debug"
        ))
    });

    // try_init: tests may call this more than once
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();
}
