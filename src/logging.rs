// src/logging.rs
// =============================================================================
// Logging setup.
//
// We log with the `tracing` macros (info!, debug!, ...) everywhere and
// install one subscriber here, at startup.
//
// - RUST_LOG controls the level, e.g. RUST_LOG=email_crawler=debug shows
//   every page fetched and every page skipped
// - Logs go to stderr, so `crawl --json` output on stdout stays valid JSON
// =============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,email_crawler=info";

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
