//! Tracing setup for the browser and for native test runs

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Unknown levels fall back to `info`.
///
/// Fails only when a subscriber is already installed.
pub fn init_logging(log_level: &str) -> Result<(), TryInitError> {
    let level = log_level.parse::<LevelFilter>().unwrap_or(LevelFilter::INFO);

    #[cfg(target_arch = "wasm32")]
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());

    #[cfg(not(target_arch = "wasm32"))]
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(level)
        .try_init()
}
